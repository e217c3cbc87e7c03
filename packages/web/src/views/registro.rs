//! Registration screen: profile fields plus role, and the assigned building
//! for resolvers.

use dioxus::prelude::*;
use model::{blank_to_none, validate_register, RegisterDraft, RegisterErrors, PREDIOS};
use ui::components::{Button, ButtonVariant, Input, Label};
use ui::{server_error_message, use_auth, use_toast, AuthState, ToastOptions};

use crate::{route_for_role, Route};

/// Register page component.
#[component]
pub fn Registro() -> Element {
    let mut auth = use_auth();
    let toast = use_toast();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut role = use_signal(String::new);
    let mut predio = use_signal(String::new);
    let mut errors = use_signal(RegisterErrors::default);
    let mut loading = use_signal(|| false);

    // Someone already signed in skips the form
    if !auth().loading {
        if let Some(user) = auth().user {
            nav.replace(route_for_role(user.role));
            return rsx! {};
        }
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let draft = RegisterDraft {
                name: name(),
                email: email(),
                password: password(),
                confirm: confirm(),
                role: role(),
                predio: predio(),
            };

            let found = validate_register(&draft);
            let ok = found.is_empty();
            errors.set(found);
            if !ok {
                return;
            }

            loading.set(true);
            // A requester never carries a building, even if one was picked
            // before switching the role back.
            let assigned = if draft.role == "n2" {
                blank_to_none(&draft.predio)
            } else {
                None
            };
            match api::sign_up(draft.email, draft.password, draft.name, draft.role, assigned)
                .await
            {
                Ok(user) => {
                    auth.set(AuthState {
                        user: Some(user),
                        loading: false,
                    });
                    toast.success(
                        "Conta criada com sucesso!".to_string(),
                        ToastOptions::new(),
                    );
                    nav.replace(Route::Login {});
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

                h1 { class: "auth-title", "Criar Conta" }
                p { class: "auth-subtitle", "Cadastre-se para usar a central de chamados" }

                form {
                    class: "auth-form",
                    onsubmit: handle_register,

                    div {
                        class: "form-field",
                        Label { html_for: "registro-name", class: "label--required", "Nome" }
                        Input {
                            id: "registro-name",
                            class: "w-full",
                            r#type: "text",
                            placeholder: "Seu nome",
                            value: name(),
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                        if let Some(msg) = errors().name {
                            span { class: "field-error", "{msg}" }
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "registro-email", class: "label--required", "E-mail" }
                        Input {
                            id: "registro-email",
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
                        Label { html_for: "registro-password", class: "label--required", "Senha" }
                        Input {
                            id: "registro-password",
                            class: "w-full",
                            r#type: "password",
                            placeholder: "Mínimo de 6 caracteres",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                        if let Some(msg) = errors().password {
                            span { class: "field-error", "{msg}" }
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "registro-confirm", class: "label--required", "Confirmar senha" }
                        Input {
                            id: "registro-confirm",
                            class: "w-full",
                            r#type: "password",
                            placeholder: "Repita a senha",
                            value: confirm(),
                            oninput: move |evt: FormEvent| confirm.set(evt.value()),
                        }
                        if let Some(msg) = errors().confirm {
                            span { class: "field-error", "{msg}" }
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "registro-role", class: "label--required", "Tipo de usuário" }
                        select {
                            id: "registro-role",
                            class: "select w-full",
                            value: role(),
                            onchange: move |evt| role.set(evt.value()),
                            option { value: "", "--Escolha o tipo--" }
                            option { value: "n1", "N1 - Solicitante" }
                            option { value: "n2", "N2 - Resolvedor" }
                        }
                        if let Some(msg) = errors().role {
                            span { class: "field-error", "{msg}" }
                        }
                    }

                    // Resolvers answer for one building
                    if role() == "n2" {
                        div {
                            class: "form-field",
                            Label { html_for: "registro-predio", class: "label--required", "Prédio" }
                            select {
                                id: "registro-predio",
                                class: "select w-full",
                                value: predio(),
                                onchange: move |evt| predio.set(evt.value()),
                                option { value: "", "--Escolha um prédio--" }
                                for nome in PREDIOS {
                                    option { key: "{nome}", value: "{nome}", "{nome}" }
                                }
                            }
                            if let Some(msg) = errors().predio {
                                span { class: "field-error", "{msg}" }
                            }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        class: "w-full",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Criando conta..." } else { "Cadastrar" }
                    }
                }

                p {
                    class: "auth-footer",
                    "Já tem uma conta? "
                    Link { to: Route::Login {}, class: "auth-link", "Entrar" }
                }
            }
        }
    }
}
