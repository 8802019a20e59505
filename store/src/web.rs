//! # localStorage session store — browser-side persistence
//!
//! [`WebStore`] is the [`SessionStore`] implementation used on the **web
//! platform**. It keeps the bearer token in the browser's `localStorage`
//! under [`TOKEN_KEY`], which is what lets a signed-in session survive page
//! reloads within the same browser profile.
//!
//! ## Connection management
//!
//! `WebStore` is a zero-size struct that looks the storage object up on every
//! operation. The browser hands back the same `localStorage` instance each
//! time, so there is nothing worth caching.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). A profile with storage disabled degrades to
//! "no session", so the user simply has to log in again rather than seeing
//! the client crash.

use crate::session::{SessionStore, TOKEN_KEY};

/// localStorage-backed SessionStore for web platform.
#[derive(Clone, Debug, Default)]
pub struct WebStore;

impl WebStore {
    pub fn new() -> Self {
        Self
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStore for WebStore {
    fn get(&self) -> Option<String> {
        storage()?
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) {
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
