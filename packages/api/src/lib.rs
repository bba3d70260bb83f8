//! # API crate — data layer and business rules for Paws Rescue Center
//!
//! Everything the web frontend needs that is not transport, routing, or
//! template rendering lives here. The web crate owns the HTTP surface and
//! calls into this crate with an explicit database pool instead of a global
//! handle.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Argon2 password hashing and verification, session key constant |
//! | [`db`] | SQLite connection pool, schema creation, idempotent seeding |
//! | [`forms`] | Validated form inputs for login, signup, and pet editing |
//! | [`models`] | Database models (`User`, `Pet`) and their row operations |
//!
//! All fallible store operations return [`Error`]; commit-time unique
//! violations surface as [`Error::Duplicate`] so callers can turn them into
//! inline form messages instead of server errors.

pub mod auth;
pub mod db;
pub mod error;
pub mod forms;
pub mod models;

pub use error::Error;
pub use models::{Pet, User};
