//! Screen state for the redirect management view.
//!
//! The view itself is a Dioxus component in the web crate; every decision it
//! makes (how the list reacts to loads, mutations, and session expiry)
//! lives here as plain data so the transitions stay testable without a
//! browser.

use api::RedirectMapping;

/// Fixed message shown when the server reports the session is no longer valid.
pub const SESSION_EXPIRED: &str = "Sesión expirada. Por favor inicia sesión nuevamente.";

/// Lifecycle of one management-screen instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListPhase {
    /// Initial fetch still in flight; the screen already renders.
    Loading,
    /// List loaded and usable.
    Ready,
    /// No valid session; control is being handed back to the login view.
    Unauthenticated,
    /// Initial fetch failed; the screen stays up with an empty list.
    Failed,
}

/// In-progress inline edit of one mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditDraft {
    pub id: i64,
    pub shortcode: String,
    pub target_url: String,
}

/// Everything the management screen tracks between renders.
#[derive(Clone, Debug, PartialEq)]
pub struct RedirectListState {
    pub phase: ListPhase,
    /// The user's mappings, in server order.
    pub redirects: Vec<RedirectMapping>,
    pub error: Option<String>,
    /// At most one row is in edit mode; starting another abandons this one.
    pub editing: Option<EditDraft>,
}

impl Default for RedirectListState {
    fn default() -> Self {
        Self::new()
    }
}

impl RedirectListState {
    pub fn new() -> Self {
        Self {
            phase: ListPhase::Loading,
            redirects: Vec::new(),
            error: None,
            editing: None,
        }
    }

    /// A wholesale fetch delivered the server's list.
    pub fn load_succeeded(&mut self, redirects: Vec<RedirectMapping>) {
        self.phase = ListPhase::Ready;
        self.redirects = redirects;
    }

    /// The initial fetch failed for a reason other than expiry.
    pub fn load_failed(&mut self, message: String) {
        self.phase = ListPhase::Failed;
        self.redirects.clear();
        self.error = Some(message);
    }

    /// The screen came up without a token; nothing to show.
    pub fn missing_session(&mut self) {
        self.phase = ListPhase::Unauthenticated;
    }

    /// The server answered 401: the stored token is no longer valid.
    pub fn session_expired(&mut self) {
        self.phase = ListPhase::Unauthenticated;
        self.error = Some(SESSION_EXPIRED.to_string());
    }

    /// A create went through; `redirects` is the fresh server list.
    pub fn created(&mut self, redirects: Vec<RedirectMapping>) {
        self.redirects = redirects;
        self.error = None;
    }

    pub fn create_failed(&mut self, message: String) {
        self.error = Some(message);
    }

    /// Enter edit mode for `mapping`, pre-populated with its current values.
    /// An unsaved edit on another row is dropped without confirmation.
    pub fn begin_edit(&mut self, mapping: &RedirectMapping) {
        self.editing = Some(EditDraft {
            id: mapping.id,
            shortcode: mapping.shortcode.clone(),
            target_url: mapping.target_url.clone(),
        });
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// An edit was accepted; leave edit mode and take the fresh server list.
    pub fn updated(&mut self, redirects: Vec<RedirectMapping>) {
        self.redirects = redirects;
        self.editing = None;
        self.error = None;
    }

    /// The edit was rejected; stay in edit mode so the user can fix it.
    pub fn update_failed(&mut self, message: String) {
        self.error = Some(message);
    }

    /// A delete was accepted: drop the row locally, no re-fetch.
    pub fn deleted(&mut self, id: i64) {
        self.redirects.retain(|mapping| mapping.id != id);
    }

    pub fn delete_failed(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Both creation fields must be filled in before submit is allowed.
pub fn can_submit(shortcode: &str, target_url: &str) -> bool {
    !shortcode.is_empty() && !target_url.is_empty()
}
