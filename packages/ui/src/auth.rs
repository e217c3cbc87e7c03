//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns the session-presence signal: it asks the server who
//! is signed in when the app mounts and re-checks every 30 seconds, so an
//! expired session eventually flips the signal and the guard reacts.
//! [`RequireAuth`] wraps the screens that need a signed-in user.

use api::UserInfo;
use dioxus::prelude::*;

use crate::components::{use_toast, ToastOptions};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    /// True until the first session check answers.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    // Fetch the current user on mount
    let _ = use_resource(move || async move {
        match api::get_current_user().await {
            Ok(user) => {
                auth_state.set(AuthState {
                    user,
                    loading: false,
                });
            }
            Err(_) => {
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
            }
        }
    });

    // Periodic session re-check (every 30s)
    use_effect(move || {
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(std::time::Duration::from_secs(30)).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_secs(30)).await;

                // Don't check while the initial load is still in progress
                if auth_state().loading {
                    continue;
                }
                match api::get_current_user().await {
                    Ok(user) => {
                        if auth_state().user != user {
                            auth_state.set(AuthState {
                                user,
                                loading: false,
                            });
                        }
                    }
                    Err(e) => {
                        tracing::error!("Session check failed: {}", e);
                    }
                }
            }
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Gate for screens that need a signed-in user.
///
/// Shows a placeholder while the first session check is in flight, sends the
/// visitor to the login screen when nobody is signed in, and otherwise
/// renders the wrapped screen.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let auth = use_auth();

    if auth().loading {
        return rsx! {
            div { class: "guard-loading", "Carregando..." }
        };
    }

    if auth().user.is_none() {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Sair".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let toast = use_toast();

    let onclick = move |_| async move {
        match api::sign_out().await {
            Ok(()) => {
                auth_state.set(AuthState {
                    user: None,
                    loading: false,
                });
                // Back to the login screen
                #[cfg(target_arch = "wasm32")]
                {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
            }
            Err(e) => {
                // The session may still be alive; stay on the screen and
                // say so.
                toast.error(
                    crate::server_error_message(&e),
                    ToastOptions::new().duration_ms(6000),
                );
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
