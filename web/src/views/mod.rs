mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod redirects;
pub use redirects::Redirects;

mod guard;
pub use guard::RequireSession;

use api::{ApiClient, ApiConfig};

pub(crate) fn api_client() -> ApiClient {
    ApiClient::new(api_config())
}

/// One base URL for every endpoint: a compile-time override wins, the browser
/// falls back to same-origin `/api`, native builds to the development server.
fn api_config() -> ApiConfig {
    if let Some(base) = option_env!("REDIRECTOR_API_BASE") {
        if !base.is_empty() {
            return ApiConfig::new(base);
        }
    }
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return ApiConfig::new(format!("{origin}/api"));
            }
        }
    }
    ApiConfig::default()
}
