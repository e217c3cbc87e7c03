//! # Database module — PostgreSQL connection pool management
//!
//! The shared PostgreSQL pool behind every server function. Entirely gated
//! behind `#[cfg(feature = "server")]` so client (WASM) builds never pull in
//! SQLx or Tokio networking code.
//!
//! The pool is a lazy, process-wide singleton backed by a
//! [`tokio::sync::OnceCell`]: the first call to [`get_pool`] reads
//! `DATABASE_URL` from the environment (via `dotenvy`), opens a pool of up to
//! 5 connections, and caches it for all subsequent callers.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::get_pool;
