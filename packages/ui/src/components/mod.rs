//! Shared form and feedback components.
//!
//! Small wrappers over the raw elements so every screen styles its controls
//! the same way, plus the toast stack the screens report outcomes through.

mod button;
mod input;
mod label;
mod textarea;
mod toast;

pub use button::{Button, ButtonVariant};
pub use input::Input;
pub use label::Label;
pub use textarea::Textarea;
pub use toast::{use_toast, ToastApi, ToastOptions, ToastProvider};
