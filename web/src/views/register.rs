//! Registration page view: creates an account, then hands off to the
//! login page. No session is established here.

use api::ApiError;
use dioxus::prelude::*;
use ui::ErrorBanner;

use super::api_client;
use crate::Route;

/// Registration page component.
#[component]
pub fn Register() -> Element {
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            match api_client().register(&email(), &password()).await {
                Ok(()) => {
                    nav.replace(Route::Login {});
                }
                Err(err) => {
                    tracing::error!("registration failed: {err}");
                    error.set(Some(register_error_message(&err)));
                }
            }
        });
    };

    rsx! {
        div { class: "auth-page",
            div { class: "auth-card",
                h1 { "Registrarse" }

                if let Some(err) = error() {
                    ErrorBanner { message: err }
                }

                form { onsubmit: handle_register,
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

                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: email().is_empty() || password().is_empty(),
                        "Registrarse"
                    }
                }

                p { class: "auth-footer",
                    "¿Ya tienes cuenta? "
                    Link { to: Route::Login {}, "Inicia sesión" }
                }
            }
        }
    }
}

/// Map a registration failure onto the message the form shows.
fn register_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Http {
            status: 400 | 409, ..
        } => "El email ya está registrado.".to_string(),
        other => other.message_or("Error al registrarse"),
    }
}
