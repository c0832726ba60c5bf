use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use crate::views;

/// Failures that escape a handler. Validation and duplicate-username
/// errors never end up here: handlers redisplay the form for those.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        // Generic failure page, no internals leaked to the client.
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(views::error_page()),
        )
            .into_response()
    }
}
