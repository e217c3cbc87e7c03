//! Login screen: email + password, branching by role after sign-in.

use dioxus::prelude::*;
use model::{validate_login, LoginDraft, LoginErrors};
use ui::components::{Button, ButtonVariant, Input, Label};
use ui::{server_error_message, use_auth, use_toast, AuthState, ToastOptions};

use crate::{route_for_role, Route};

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let toast = use_toast();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(LoginErrors::default);
    let mut loading = use_signal(|| false);

    // Someone already signed in skips the form
    if !auth().loading {
        if let Some(user) = auth().user {
            nav.replace(route_for_role(user.role));
            return rsx! {};
        }
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let draft = LoginDraft {
                email: email(),
                password: password(),
            };

            let found = validate_login(&draft);
            let ok = found.is_empty();
            errors.set(found);
            if !ok {
                return;
            }

            loading.set(true);
            match api::sign_in(draft.email, draft.password).await {
                Ok(user) => {
                    let role = user.role;
                    auth.set(AuthState {
                        user: Some(user),
                        loading: false,
                    });
                    toast.success(
                        "Login realizado com sucesso!".to_string(),
                        ToastOptions::new(),
                    );
                    nav.replace(route_for_role(role));
                }
                Err(e) => {
                    loading.set(false);
                    toast.error(server_error_message(&e), ToastOptions::new().duration_ms(6000));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-screen",
            div {
                class: "auth-card",

                h1 { class: "auth-title", "Central de Chamados" }
                p { class: "auth-subtitle", "Entre para abrir e acompanhar chamados" }

                form {
                    class: "auth-form",
                    onsubmit: handle_login,

                    div {
                        class: "form-field",
                        Label { html_for: "login-email", class: "label--required", "E-mail" }
                        Input {
                            id: "login-email",
                            class: "w-full",
                            r#type: "email",
                            placeholder: "nome@exemplo.com",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                        if let Some(msg) = errors().email {
                            span { class: "field-error", "{msg}" }
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "login-password", class: "label--required", "Senha" }
                        Input {
                            id: "login-password",
                            class: "w-full",
                            r#type: "password",
                            placeholder: "Sua senha",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                        if let Some(msg) = errors().password {
                            span { class: "field-error", "{msg}" }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "w-full",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Entrando..." } else { "Entrar" }
                    }
                }

                p {
                    class: "auth-footer",
                    Link { to: Route::Registro {}, class: "auth-link", "Criar uma conta" }
                }
            }
        }
    }
}
