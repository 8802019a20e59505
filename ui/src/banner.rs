use dioxus::prelude::*;

/// Form-level error banner shared by the auth and management screens.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div { class: "error-banner", "{message}" }
    }
}
