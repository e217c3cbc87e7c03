//! Database rows and their client-safe projections.

#[cfg(feature = "server")]
mod chamado;
mod user;

#[cfg(feature = "server")]
pub use chamado::Chamado;
#[cfg(feature = "server")]
pub use user::User;
pub use user::UserInfo;
