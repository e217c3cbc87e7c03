//! Ticket creation screen, reachable only with a session.

use dioxus::prelude::*;
use model::{validate_chamado, ChamadoDraft, ChamadoErrors, PREDIOS};
use ui::components::{Button, ButtonVariant, Input, Label, Textarea};
use ui::{use_toast, LogoutButton, RequireAuth, ToastOptions};

/// New-chamado page component.
#[component]
pub fn NovoChamado() -> Element {
    rsx! {
        RequireAuth {
            NovoChamadoForm {}
        }
    }
}

#[component]
fn NovoChamadoForm() -> Element {
    let toast = use_toast();
    let mut predio = use_signal(String::new);
    let mut titulo = use_signal(String::new);
    let mut solicitante = use_signal(String::new);
    let mut descricao = use_signal(String::new);
    let mut setor = use_signal(String::new);
    let mut sala = use_signal(String::new);
    let mut errors = use_signal(ChamadoErrors::default);
    let mut loading = use_signal(|| false);

    // Shared by the cancel button and the after-submit reset
    let mut limpar = move || {
        predio.set(String::new());
        titulo.set(String::new());
        solicitante.set(String::new());
        descricao.set(String::new());
        setor.set(String::new());
        sala.set(String::new());
        errors.set(ChamadoErrors::default());
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let draft = ChamadoDraft {
                predio: predio(),
                titulo: titulo(),
                solicitante: solicitante(),
                descricao: descricao(),
                setor: setor(),
                sala: sala(),
            };

            let found = validate_chamado(&draft);
            let ok = found.is_empty();
            errors.set(found);
            if !ok {
                return;
            }

            loading.set(true);
            match api::create_chamado(draft).await {
                Ok(_) => {
                    limpar();
                    toast.success(
                        "Chamado enviado com sucesso!".to_string(),
                        ToastOptions::new(),
                    );
                }
                Err(_) => {
                    // The form keeps its values so nothing typed is lost
                    toast.error(
                        "Erro ao enviar chamado.".to_string(),
                        ToastOptions::new().duration_ms(6000),
                    );
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "page",
            header {
                class: "topbar",
                h1 { class: "topbar-title", "Novo Chamado" }
                LogoutButton { class: "btn btn--outline" }
            }

            div {
                class: "page-body",
                div {
                    class: "page-heading",
                    h2 { class: "page-title", "Reportar um chamado" }
                    p { class: "page-subtitle", "Preencha o formulário abaixo para registrar um novo chamado." }
                }

                form {
                    class: "chamado-form",
                    onsubmit: handle_submit,

                    div {
                        class: "form-field",
                        Label { html_for: "chamado-predio", class: "label--required", "Prédio" }
                        select {
                            id: "chamado-predio",
                            class: "select w-full",
                            value: predio(),
                            onchange: move |evt| predio.set(evt.value()),
                            option { value: "", "Selecione o prédio" }
                            for nome in PREDIOS {
                                option { key: "{nome}", value: "{nome}", "{nome}" }
                            }
                        }
                        if let Some(msg) = errors().predio {
                            span { class: "field-error", "{msg}" }
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "chamado-titulo", class: "label--required", "Chamado" }
                        Input {
                            id: "chamado-titulo",
                            class: "w-full",
                            r#type: "text",
                            placeholder: "Título do chamado",
                            value: titulo(),
                            oninput: move |evt: FormEvent| titulo.set(evt.value()),
                        }
                        if let Some(msg) = errors().titulo {
                            span { class: "field-error", "{msg}" }
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "chamado-solicitante", class: "label--required", "Solicitante" }
                        Input {
                            id: "chamado-solicitante",
                            class: "w-full",
                            r#type: "text",
                            placeholder: "Nome do solicitante",
                            value: solicitante(),
                            oninput: move |evt: FormEvent| solicitante.set(evt.value()),
                        }
                        if let Some(msg) = errors().solicitante {
                            span { class: "field-error", "{msg}" }
                        }
                    }

                    div {
                        class: "form-row",
                        div {
                            class: "form-field",
                            Label { html_for: "chamado-setor", class: "label--required", "Setor" }
                            Input {
                                id: "chamado-setor",
                                class: "w-full",
                                r#type: "text",
                                placeholder: "Digite o setor",
                                value: setor(),
                                oninput: move |evt: FormEvent| setor.set(evt.value()),
                            }
                            if let Some(msg) = errors().setor {
                                span { class: "field-error", "{msg}" }
                            }
                        }

                        div {
                            class: "form-field",
                            Label { html_for: "chamado-sala", "Sala (opcional)" }
                            Input {
                                id: "chamado-sala",
                                class: "w-full",
                                r#type: "text",
                                placeholder: "Ex: 204",
                                value: sala(),
                                oninput: move |evt: FormEvent| sala.set(evt.value()),
                            }
                        }
                    }

                    div {
                        class: "form-field",
                        Label { html_for: "chamado-descricao", class: "label--required", "Descrição" }
                        Textarea {
                            id: "chamado-descricao",
                            class: "w-full",
                            placeholder: "Inclua todas as informações relevantes",
                            rows: 4,
                            value: descricao(),
                            oninput: move |evt: FormEvent| descricao.set(evt.value()),
                        }
                        if let Some(msg) = errors().descricao {
                            span { class: "field-error", "{msg}" }
                        }
                    }

                    div {
                        class: "form-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| limpar(),
                            "Cancelar"
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "Enviando..." } else { "Enviar" }
                        }
                    }
                }
            }
        }
    }
}
