//! Client configuration.

/// Base URL used when nothing overrides it: the development server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Where the client sends its API calls.
///
/// One base URL covers every endpoint; the paths from the endpoint table are
/// joined onto it with [`ApiConfig::endpoint`]. In the browser the app
/// resolves this to same-origin `/api` at startup; the default here is the
/// local development server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Join an endpoint path onto the base URL, normalising the slash between
    /// them. Trailing slashes on the path are preserved: the list endpoint
    /// is addressed as `/redirects/`, mapping endpoints as `/redirects/{id}`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
