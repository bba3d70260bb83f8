//! Request handlers: pet pages and the signup/login/logout flow.

pub mod auth;
pub mod pets;

use axum::response::Html;
use tera::Context;

use crate::error::AppError;
use crate::state::AppState;

/// Render a named template with the given context.
fn render(state: &AppState, template: &str, context: &Context) -> Result<Html<String>, AppError> {
    Ok(Html(state.templates.render(template, context)?))
}
