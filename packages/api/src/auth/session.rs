//! Session data contract.

/// Key under which the logged-in user's id is stored in the session.
///
/// The session holds at most this one key; login inserts it, logout removes
/// it, and signup never touches it.
pub const SESSION_USER_ID_KEY: &str = "user_id";
