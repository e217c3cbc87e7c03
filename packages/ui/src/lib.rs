//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState, LogoutButton, RequireAuth};

pub use components::{use_toast, ToastOptions, ToastProvider};

/// The message a failed server call should show the user.
///
/// Failures raised by our own server functions carry a Portuguese message;
/// anything else (transport, serialization) gets a generic one.
pub fn server_error_message(error: &ServerFnError) -> String {
    match error {
        ServerFnError::ServerError { message, .. } => message.clone(),
        _ => "Erro de conexão com o servidor".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_message_keeps_application_text() {
        let error = ServerFnError::new("E-mail já está em uso");
        assert_eq!(server_error_message(&error), "E-mail já está em uso");
    }

    #[test]
    fn test_server_error_message_falls_back_to_generic_text() {
        // Anything that is not one of our own failures keeps the generic
        // connection message.
        let error = ServerFnError::Registration("endpoint not registered".to_string());
        assert_eq!(
            server_error_message(&error),
            "Erro de conexão com o servidor"
        );
    }
}
