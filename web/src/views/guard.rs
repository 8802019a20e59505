use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

/// Route-level gate for the authenticated section of the app.
///
/// Evaluated before any nested route renders: without a session it sends the
/// user to the login screen instead of letting a protected view mount.
#[component]
pub fn RequireSession() -> Element {
    let session = use_session();
    let nav = use_navigator();

    if !session.is_active() {
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}
