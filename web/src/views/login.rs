//! Login page view: exchanges credentials for a bearer token.

use api::ApiError;
use dioxus::prelude::*;
use ui::{use_session, ErrorBanner};

use super::api_client;
use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            // Drop any stale token before asking for a new one.
            session.clear();

            match api_client().login(&email(), &password()).await {
                Ok(token) => {
                    session.establish(token);
                    nav.replace(Route::Redirects {});
                }
                Err(err) => {
                    tracing::error!("login failed: {err}");
                    error.set(Some(login_error_message(&err)));
                }
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { "Iniciar Sesión" }

                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }

                form { onsubmit: handle_login,
                    div { class: "form-field",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            required: true,
                            value: email(),
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }

                    div { class: "form-field",
                        label { r#for: "password", "Contraseña" }
                        input {
                            id: "password",
                            r#type: "password",
                            required: true,
                            value: password(),
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }

                    button { class: "btn btn-primary btn-block", r#type: "submit",
                        "Iniciar Sesión"
                    }
                }
            }
        }
    }
}

/// Map a login failure onto the message the form shows.
fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Http { status: 401, .. } => "Credenciales incorrectas".to_string(),
        ApiError::Http {
            status: 400,
            detail,
        } => detail
            .clone()
            .unwrap_or_else(|| "Solicitud inválida".to_string()),
        ApiError::MissingToken => "Token no recibido del servidor".to_string(),
        other => other.message_or("Error inesperado al iniciar sesión"),
    }
}
