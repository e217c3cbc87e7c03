//! Listing screen: chamados of one building, with in-place resolution.

use dioxus::prelude::*;
use model::{apply_resolution, format_timestamp_br, predio_filtrado, ChamadoInfo, PREDIOS};
use ui::components::{Button, ButtonVariant, Label};
use ui::icons::{FaBuilding, FaCheck};
use ui::{server_error_message, use_auth, use_toast, Icon, LogoutButton, RequireAuth, ToastOptions};

/// Chamado listing page component.
#[component]
pub fn ListaChamados() -> Element {
    rsx! {
        RequireAuth {
            ListaChamadosPanel {}
        }
    }
}

#[component]
fn ListaChamadosPanel() -> Element {
    let auth = use_auth();
    let toast = use_toast();
    // Resolvers start on their own building; the choice stays free after that
    let mut predio = use_signal(move || {
        auth().user.and_then(|user| user.predio).unwrap_or_default()
    });
    let mut chamados = use_signal(Vec::<ChamadoInfo>::new);
    let mut loading = use_signal(|| false);

    // Refetch whenever the building filter changes. An empty filter clears
    // the list without asking the server anything.
    use_effect(move || {
        let selected = predio();
        spawn(async move {
            let selected = match predio_filtrado(&selected) {
                Ok(predio) => predio,
                Err(vazia) => {
                    chamados.set(vazia);
                    return;
                }
            };
            loading.set(true);
            match api::list_chamados(selected).await {
                Ok(found) => chamados.set(found),
                Err(e) => {
                    chamados.set(Vec::new());
                    toast.error(server_error_message(&e), ToastOptions::new().duration_ms(6000));
                }
            }
            loading.set(false);
        });
    });

    let handle_resolver = move |id: String| {
        spawn(async move {
            match api::resolve_chamado(id).await {
                Ok(atualizado) => {
                    apply_resolution(chamados.write().as_mut_slice(), &atualizado);
                    toast.success(
                        "O chamado foi marcado como resolvido com sucesso!".to_string(),
                        ToastOptions::new(),
                    );
                }
                Err(_) => {
                    toast.error(
                        "Não foi possível marcar como resolvido.".to_string(),
                        ToastOptions::new().duration_ms(6000),
                    );
                }
            }
        });
    };

    rsx! {
        div {
            class: "page",
            header {
                class: "topbar",
                h1 { class: "topbar-title", "Chamados por Prédio" }
                div {
                    class: "topbar-actions",
                    if let Some(user) = auth().user {
                        span { class: "topbar-user", "{user.name}" }
                    }
                    LogoutButton { class: "btn btn--outline" }
                }
            }

            div {
                class: "page-body",
                div {
                    class: "lista-toolbar",
                    Label { html_for: "lista-predio", "Selecione o prédio" }
                    select {
                        id: "lista-predio",
                        class: "select",
                        value: predio(),
                        onchange: move |evt| predio.set(evt.value()),
                        option { value: "", "--Escolha um prédio--" }
                        for nome in PREDIOS {
                            option { key: "{nome}", value: "{nome}", "{nome}" }
                        }
                    }
                }

                if loading() {
                    p { class: "lista-status", "Carregando chamados..." }
                } else if !predio().is_empty() && chamados().is_empty() {
                    p { class: "lista-status", "Nenhum chamado encontrado." }
                } else {
                    div {
                        class: "chamados-list",
                        for chamado in chamados() {
                            ChamadoCard {
                                key: "{chamado.id}",
                                chamado: chamado.clone(),
                                on_resolver: handle_resolver,
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A single chamado, dimmed once resolved.
#[component]
fn ChamadoCard(chamado: ChamadoInfo, on_resolver: EventHandler<String>) -> Element {
    let card_class = if chamado.resolvido {
        "chamado-card chamado-card--resolvido"
    } else {
        "chamado-card"
    };
    let aberto_em = format_timestamp_br(&chamado.criado_em);
    let resolvido_em = chamado.resolvido_em.as_deref().map(format_timestamp_br);
    let chamado_id = chamado.id.clone();

    rsx! {
        div {
            class: "{card_class}",
            div {
                class: "chamado-card-header",
                h3 { class: "chamado-card-title", "{chamado.titulo}" }
                span {
                    class: "chamado-badge",
                    Icon { icon: FaBuilding, width: 12, height: 12 }
                    "{chamado.predio}"
                }
            }

            p { class: "chamado-desc", "{chamado.descricao}" }

            ul {
                class: "chamado-meta",
                li { strong { "Solicitante: " } "{chamado.solicitante}" }
                li { strong { "Setor: " } "{chamado.setor}" }
                if let Some(sala) = &chamado.sala {
                    li { strong { "Sala: " } "{sala}" }
                }
                li { strong { "Aberto em: " } "{aberto_em}" }
            }

            if chamado.resolvido {
                p {
                    class: "chamado-resolved-note",
                    if let Some(quando) = resolvido_em {
                        "Resolvido em: {quando}"
                    } else {
                        "Resolvido"
                    }
                }
            } else {
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| on_resolver.call(chamado_id.clone()),
                    Icon { icon: FaCheck, width: 14, height: 14 }
                    "Marcar como resolvido"
                }
            }
        }
    }
}
