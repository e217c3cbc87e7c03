//! # User model for authenticated users
//!
//! The two representations of an account:
//!
//! ## [`User`] (server only)
//!
//! The complete `users` row. Derives [`sqlx::FromRow`] so it loads straight
//! from queries:
//!
//! - `id` — primary key (`UUID v4`, generated by the database).
//! - `email` — unique, stored lowercased.
//! - `name` — display name.
//! - `role` — `"n1"` (requester) or `"n2"` (resolver), stored as text.
//! - `predio` — the resolver's assigned building; `NULL` for requesters.
//! - `password_hash` — Argon2id PHC string; never leaves the server.
//! - `created_at` / `updated_at` — audit timestamps.
//!
//! [`User::to_info`] projects the row into a [`UserInfo`], failing when the
//! stored role is not one the application knows.
//!
//! ## [`UserInfo`]
//!
//! The client-safe subset that crosses the server/client boundary via server
//! functions. It omits the hash and timestamps, carries the role as a typed
//! [`Role`], and converts the `Uuid` to a `String` so it works in WASM.

use model::Role;
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use chrono::{DateTime, Utc};
#[cfg(feature = "server")]
use sqlx::FromRow;
#[cfg(feature = "server")]
use uuid::Uuid;

/// Full user record from the database.
#[cfg(feature = "server")]
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    pub predio: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(feature = "server")]
impl User {
    /// Convert to UserInfo for client consumption. `Err` carries the stored
    /// role value when it is not a known one.
    pub fn to_info(&self) -> Result<UserInfo, String> {
        let Some(role) = Role::parse(&self.role) else {
            return Err(self.role.clone());
        };
        Ok(UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
            role,
            predio: self.predio.clone(),
        })
    }
}

/// User information safe to send to the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub predio: Option<String>,
}
