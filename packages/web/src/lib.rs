//! Web frontend for Paws Rescue Center.
//!
//! Owns the HTTP surface only: routing, session cookie handling, and Tera
//! rendering. All data access and business rules live in `paws-api`.

use anyhow::Context as _;
use axum::routing::get;
use axum::Router;
use tower_sessions::cookie::Key;
use tower_sessions::{MemoryStore, SessionManagerLayer};

pub mod error;
pub mod handlers;
pub mod settings;
pub mod state;
pub mod templates;

pub use state::AppState;

/// Build the application router with the session layer applied.
///
/// The secret signs the session cookie and must be at least 64 bytes.
pub fn app(state: AppState, session_secret: &[u8]) -> anyhow::Result<Router> {
    let key = Key::try_from(session_secret)
        .context("session secret must be at least 64 bytes long")?;
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_signed(key);

    let router = Router::new()
        .route("/", get(handlers::pets::homepage))
        .route("/about", get(handlers::pets::about))
        .route(
            "/details/{pet_id}",
            get(handlers::pets::pet_details).post(handlers::pets::edit_pet),
        )
        .route("/delete/{pet_id}", get(handlers::pets::delete_pet))
        .route(
            "/signup",
            get(handlers::auth::signup_page).post(handlers::auth::signup),
        )
        .route(
            "/login",
            get(handlers::auth::login_page).post(handlers::auth::login),
        )
        .route("/logout", get(handlers::auth::logout))
        .layer(session_layer)
        .with_state(state);

    Ok(router)
}
