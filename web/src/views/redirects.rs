//! Redirect management view: the authenticated screen where mappings are
//! listed, created, edited inline, and deleted.

use api::{ApiError, RedirectDraft, RedirectMapping};
use dioxus::prelude::*;
use ui::{can_submit, use_session, ErrorBanner, RedirectListState};

use super::api_client;
use crate::Route;

/// Redirect management page component.
///
/// All list and edit-mode transitions live in [`RedirectListState`]; this
/// component wires them to the API client and the router. A 401 from any
/// call ends the session and hands control back to the login screen.
#[component]
pub fn Redirects() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut state = use_signal(RedirectListState::new);
    let mut shortcode = use_signal(String::new);
    let mut target_url = use_signal(String::new);

    // Load the list on mount. Without a token there is nothing to fetch;
    // bounce to login even if this screen was reached by direct URL entry.
    let _loader = use_resource(move || async move {
        let Some(token) = session.token() else {
            state.write().missing_session();
            nav.replace(Route::Login {});
            return;
        };
        match api_client().list_redirects(&token).await {
            Ok(redirects) => state.write().load_succeeded(redirects),
            Err(err) if err.is_unauthorized() => {
                session.clear();
                state.write().session_expired();
                nav.replace(Route::Login {});
            }
            Err(err) => {
                tracing::error!("loading redirects failed: {err}");
                state
                    .write()
                    .load_failed(err.message_or("Error al cargar redirecciones"));
            }
        }
    });

    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let Some(token) = session.token() else {
                return;
            };
            state.write().clear_error();

            let draft = RedirectDraft {
                shortcode: shortcode(),
                target_url: target_url(),
            };
            match create_and_refetch(&token, &draft).await {
                Ok(redirects) => {
                    state.write().created(redirects);
                    shortcode.set(String::new());
                    target_url.set(String::new());
                }
                Err(err) if err.is_unauthorized() => {
                    session.clear();
                    state.write().session_expired();
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("creating redirect failed: {err}");
                    state
                        .write()
                        .create_failed(err.message_or("Error al crear redirección"));
                }
            }
        });
    };

    let handle_edit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            let Some(token) = session.token() else {
                return;
            };
            let Some(draft) = state().editing else {
                return;
            };
            match update_and_refetch(&token, &draft).await {
                Ok(redirects) => state.write().updated(redirects),
                Err(err) if err.is_unauthorized() => {
                    session.clear();
                    state.write().session_expired();
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("editing redirect {} failed: {err}", draft.id);
                    state
                        .write()
                        .update_failed(err.message_or("Error al editar redirección"));
                }
            }
        });
    };

    let handle_delete = move |id: i64| {
        spawn(async move {
            let Some(token) = session.token() else {
                return;
            };
            match api_client().delete_redirect(&token, id).await {
                // The server forgot the mapping; dropping the row locally is
                // enough, no re-fetch.
                Ok(()) => state.write().deleted(id),
                Err(err) if err.is_unauthorized() => {
                    session.clear();
                    state.write().session_expired();
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("deleting redirect {id} failed: {err}");
                    state
                        .write()
                        .delete_failed(err.message_or("Error al eliminar redirección"));
                }
            }
        });
    };

    let handle_logout = move |_| {
        session.clear();
        nav.replace(Route::Login {});
    };

    rsx! {
        div { class: "manage-page",
            div { class: "manage-card",
                header { class: "manage-header",
                    h1 { "Gestionar Redirecciones" }
                    button { class: "btn btn-danger", onclick: handle_logout, "Cerrar Sesión" }
                }

                if let Some(message) = state().error {
                    ErrorBanner { message }
                }

                form { class: "create-form", onsubmit: handle_create,
                    div { class: "create-fields",
                        div { class: "form-field",
                            label { r#for: "shortcode", "Nombre del Archivo" }
                            input {
                                id: "shortcode",
                                r#type: "text",
                                required: true,
                                value: shortcode(),
                                oninput: move |evt| shortcode.set(evt.value()),
                            }
                        }
                        div { class: "form-field",
                            label { r#for: "target_url", "URL destino" }
                            input {
                                id: "target_url",
                                r#type: "url",
                                required: true,
                                value: target_url(),
                                oninput: move |evt| target_url.set(evt.value()),
                            }
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: !can_submit(&shortcode(), &target_url()),
                        "Crear Redirección"
                    }
                }

                h2 { "Tus Redirecciones" }

                if state().redirects.is_empty() {
                    p { class: "empty-list", "No tienes redirecciones creadas aún." }
                } else {
                    table { class: "redirect-table",
                        thead {
                            tr {
                                th { "Nombre del Archivo" }
                                th { "URL destino" }
                                th { "Acciones" }
                            }
                        }
                        tbody {
                            for mapping in state().redirects {
                                tr { key: "{mapping.id}",
                                    td {
                                        // The same origin serves the actual
                                        // redirects, so the shortcode doubles
                                        // as a working link.
                                        a {
                                            href: "/{mapping.shortcode}",
                                            target: "_blank",
                                            rel: "noopener noreferrer",
                                            "{mapping.shortcode}"
                                        }
                                    }
                                    td { class: "target-cell", "{mapping.target_url}" }
                                    td {
                                        if let Some(draft) = state().editing.filter(|d| d.id == mapping.id) {
                                            form { class: "edit-form", onsubmit: handle_edit,
                                                input {
                                                    r#type: "text",
                                                    required: true,
                                                    value: draft.shortcode,
                                                    oninput: move |evt| {
                                                        if let Some(draft) = state.write().editing.as_mut() {
                                                            draft.shortcode = evt.value();
                                                        }
                                                    },
                                                }
                                                input {
                                                    r#type: "url",
                                                    required: true,
                                                    value: draft.target_url,
                                                    oninput: move |evt| {
                                                        if let Some(draft) = state.write().editing.as_mut() {
                                                            draft.target_url = evt.value();
                                                        }
                                                    },
                                                }
                                                button { class: "btn btn-save", r#type: "submit", "Guardar" }
                                                button {
                                                    class: "btn btn-cancel",
                                                    r#type: "button",
                                                    onclick: move |_| state.write().cancel_edit(),
                                                    "Cancelar"
                                                }
                                            }
                                        } else {
                                            button {
                                                class: "btn btn-edit",
                                                onclick: {
                                                    let mapping = mapping.clone();
                                                    move |_| state.write().begin_edit(&mapping)
                                                },
                                                "Editar"
                                            }
                                            button {
                                                class: "btn btn-danger",
                                                onclick: move |_| handle_delete(mapping.id),
                                                "Eliminar"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Create the draft, then pull the fresh list the screen will show.
async fn create_and_refetch(
    token: &str,
    draft: &RedirectDraft,
) -> Result<Vec<RedirectMapping>, ApiError> {
    let client = api_client();
    client.create_redirect(token, draft).await?;
    client.list_redirects(token).await
}

/// Apply an inline edit, then pull the fresh list the screen will show.
async fn update_and_refetch(
    token: &str,
    draft: &ui::EditDraft,
) -> Result<Vec<RedirectMapping>, ApiError> {
    let client = api_client();
    let fields = RedirectDraft {
        shortcode: draft.shortcode.clone(),
        target_url: draft.target_url.clone(),
    };
    client.update_redirect(token, draft.id, &fields).await?;
    client.list_redirects(token).await
}
