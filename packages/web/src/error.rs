//! Handler-boundary error mapping.
//!
//! Persistence errors never reach the transport layer except the explicit
//! 404 for a missing pet; everything else is logged and answered with a
//! plain 500 page.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

pub const PET_NOT_FOUND: &str = "No Pet was Found with the given ID";

#[derive(Debug)]
pub enum AppError {
    /// 404 with a user-visible description.
    NotFound(&'static str),
    /// Anything the user should not see details of.
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(description) => (
                StatusCode::NOT_FOUND,
                Html(format!(
                    "<!DOCTYPE html><html><body><h1>Not Found</h1><p>{description}</p></body></html>"
                )),
            )
                .into_response(),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html("<!DOCTYPE html><html><body><h1>Something went wrong</h1></body></html>".to_string()),
                )
                    .into_response()
            }
        }
    }
}

impl From<paws_api::Error> for AppError {
    fn from(err: paws_api::Error) -> Self {
        match err {
            paws_api::Error::NotFound => AppError::NotFound(PET_NOT_FOUND),
            other => AppError::Internal(other.into()),
        }
    }
}

impl From<tera::Error> for AppError {
    fn from(err: tera::Error) -> Self {
        AppError::Internal(err.into())
    }
}

impl From<tower_sessions::session::Error> for AppError {
    fn from(err: tower_sessions::session::Error) -> Self {
        AppError::Internal(err.into())
    }
}
