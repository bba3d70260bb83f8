//! Database models.

mod pet;
mod user;

pub use pet::Pet;
pub use user::User;
