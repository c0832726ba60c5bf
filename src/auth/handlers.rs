use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::CookieJar;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::{
        dto::{FieldErrors, LoginForm, RegistrationForm},
        password::{hash_password, verify_password},
        repo::is_unique_violation,
        repo_types::{User, ROLE_USER},
        sessions::{removal_cookie, session_cookie, Session},
        validate::validate_registration,
    },
    error::AppError,
    state::AppState,
    views,
};

const USERNAME_TAKEN: &str = "Username is already taken";
const BAD_CREDENTIALS: &str = "Invalid username or password";

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", get(register_form).post(register))
        .route("/login", get(login_form).post(login))
        .route("/logout", post(logout))
}

#[instrument]
pub async fn register_form() -> Html<String> {
    Html(views::register_page("", &FieldErrors::default()))
}

#[instrument(skip(state, form))]
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegistrationForm>,
) -> Result<Response, AppError> {
    let errors = validate_registration(&form);
    if !errors.is_empty() {
        return Ok(Html(views::register_page(&form.username, &errors)).into_response());
    }

    let username = form.username.trim();

    // Friendly pre-check. The UNIQUE constraint below is what actually
    // guarantees uniqueness under concurrent registrations.
    if User::find_by_username(&state.db, username).await?.is_some() {
        warn!(username, "registration for taken username");
        let mut errors = FieldErrors::default();
        errors.push("username", USERNAME_TAKEN);
        return Ok(Html(views::register_page(username, &errors)).into_response());
    }

    let hash = hash_password(&form.password)?;

    let user = match User::insert(&state.db, username, &hash, ROLE_USER).await {
        Ok(user) => user,
        Err(e) if is_unique_violation(&e) => {
            warn!(username, "registration lost insert race");
            let mut errors = FieldErrors::default();
            errors.push("username", USERNAME_TAKEN);
            return Ok(Html(views::register_page(username, &errors)).into_response());
        }
        Err(e) => return Err(e.into()),
    };

    info!(user_id = user.id, username = %user.username, role = %user.role, "user registered");
    Ok(Redirect::to("/login").into_response())
}

#[instrument]
pub async fn login_form() -> Html<String> {
    Html(views::login_page("", None))
}

#[instrument(skip(state, jar, form))]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let username = form.username.trim();

    // Unknown username and wrong password must be indistinguishable to
    // the client.
    let rejected = || Html(views::login_page(username, Some(BAD_CREDENTIALS))).into_response();

    let Some(user) = User::find_by_username(&state.db, username).await? else {
        warn!(username, "login for unknown username");
        return Ok(rejected());
    };

    if !verify_password(&form.password, &user.password_hash) {
        warn!(user_id = user.id, username, "login with wrong password");
        return Ok(rejected());
    }

    let session = Session::create(&state.db, user.id, state.config.session.ttl_minutes).await?;
    let jar = jar.add(session_cookie(&state.config.session, session.token));

    info!(user_id = user.id, username = %user.username, "user logged in");
    Ok((jar, Redirect::to("/")).into_response())
}

#[instrument(skip(state, jar))]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    if let Some(token) = jar
        .get(&state.config.session.cookie_name)
        .and_then(|c| c.value().parse::<Uuid>().ok())
    {
        Session::delete(&state.db, token).await?;
        info!("session cleared");
    }
    let jar = jar.remove(removal_cookie(&state.config.session));
    Ok((jar, Redirect::to("/")).into_response())
}
