use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use tracing::warn;
use uuid::Uuid;

use crate::auth::{repo_types::User, sessions::Session};
use crate::state::AppState;

/// Resolves the session cookie to the logged-in user, if any. All
/// routes are publicly reachable, so a missing or stale session is
/// never a rejection, just `None`.
pub struct CurrentUser(pub Option<User>);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(&state.config.session.cookie_name)
            .and_then(|c| c.value().parse::<Uuid>().ok());

        let Some(token) = token else {
            return Ok(CurrentUser(None));
        };

        let session = match Session::find_valid(&state.db, token).await {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "session lookup failed");
                return Ok(CurrentUser(None));
            }
        };
        let Some(session) = session else {
            return Ok(CurrentUser(None));
        };

        let user = match User::find_by_id(&state.db, session.user_id).await {
            Ok(u) => u,
            Err(e) => {
                warn!(error = %e, user_id = session.user_id, "user lookup failed");
                None
            }
        };

        Ok(CurrentUser(user))
    }
}
