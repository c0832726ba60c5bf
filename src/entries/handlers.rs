use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::{dto::FieldErrors, extractors::CurrentUser},
    entries::{
        dto::{validate_entry, EntryForm},
        repo_types::GuestbookEntry,
    },
    error::AppError,
    state::AppState,
    views,
};

pub fn entry_routes() -> Router<AppState> {
    Router::new().route("/", get(index).post(post_entry))
}

#[instrument(skip(state, user))]
pub async fn index(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Response, AppError> {
    let entries = GuestbookEntry::list(&state.db).await?;
    let username = user.as_ref().map(|u| u.username.as_str());
    Ok(Html(views::entries_page(
        &entries,
        username,
        "",
        "",
        &FieldErrors::default(),
    ))
    .into_response())
}

#[instrument(skip(state, user, form))]
pub async fn post_entry(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<EntryForm>,
) -> Result<Response, AppError> {
    let errors = validate_entry(&form);
    if !errors.is_empty() {
        let entries = GuestbookEntry::list(&state.db).await?;
        let username = user.as_ref().map(|u| u.username.as_str());
        return Ok(Html(views::entries_page(
            &entries,
            username,
            &form.name,
            &form.text,
            &errors,
        ))
        .into_response());
    }

    let entry = GuestbookEntry::insert(&state.db, form.name.trim(), form.text.trim()).await?;
    info!(entry_id = entry.id, name = %entry.name, "guestbook entry posted");
    Ok(Redirect::to("/").into_response())
}
