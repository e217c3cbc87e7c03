//! Session key shared by every server function that reads or writes the
//! authenticated user.

/// Key for storing the user id in the session.
pub const SESSION_USER_ID_KEY: &str = "user_id";
