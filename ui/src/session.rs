//! Session context and hooks for the UI.

use dioxus::prelude::*;
use store::SessionStore;

/// Create the platform-appropriate token store:
/// - **Web** (WASM + `web` feature): `localStorage` via [`store::WebStore`]
/// - **Native** (tests, tooling): process-local [`store::MemoryStore`]
fn session_store() -> impl SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::WebStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::MemoryStore::new()
    }
}

/// Session state for the application: the bearer token, when one is held.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SessionState {
    token: Option<String>,
}

/// Handle to the session shared through context.
///
/// Created once by [`SessionProvider`]; established on login, torn down on
/// logout or server-signalled expiry. Writes go through the persistent store
/// first, so the session survives page reloads.
#[derive(Clone, Copy)]
pub struct Session {
    state: Signal<SessionState>,
}

impl Session {
    /// The current token, or `None` when signed out.
    pub fn token(&self) -> Option<String> {
        self.state.read().token.clone()
    }

    /// Whether a token is currently held.
    pub fn is_active(&self) -> bool {
        self.state.read().token.is_some()
    }

    /// Start a session: persist the token and update every subscriber.
    pub fn establish(&mut self, token: String) {
        tracing::debug!("session established");
        session_store().set(&token);
        self.state.set(SessionState { token: Some(token) });
    }

    /// End the session and remove the persisted token.
    pub fn clear(&mut self) {
        tracing::debug!("session cleared");
        session_store().clear();
        self.state.set(SessionState::default());
    }
}

/// Get the current session handle.
/// Reads re-run the caller when the session changes.
pub fn use_session() -> Session {
    use_context::<Session>()
}

/// Provider component that owns the session for the whole app.
/// Wrap the router with this component so every view can call [`use_session`].
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let state = use_signal(|| SessionState {
        token: session_store().get(),
    });
    use_context_provider(|| Session { state });

    rsx! {
        {children}
    }
}
