//! Password hashing and session key shared between signup and login.

mod password;
mod session;

pub use password::{hash_password, verify_password};
pub use session::SESSION_USER_ID_KEY;
