//! # Shared domain types for the chamados tracker
//!
//! Everything in this crate compiles for both the WASM client and the server,
//! so it carries no I/O and no platform dependencies. It holds the record
//! types that cross the server/client boundary, the form drafts the screens
//! bind to, and the validation rules both sides apply — the client before any
//! network call, the server again before any write.

pub mod auth;
pub mod chamado;
pub mod predio;
pub mod role;

pub use auth::{
    validate_login, validate_register, LoginDraft, LoginErrors, RegisterDraft, RegisterErrors,
};
pub use chamado::{
    apply_resolution, blank_to_none, format_timestamp_br, predio_filtrado, validate_chamado,
    ChamadoDraft, ChamadoErrors, ChamadoInfo,
};
pub use predio::PREDIOS;
pub use role::Role;
