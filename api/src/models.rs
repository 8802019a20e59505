//! # Wire models for the redirect service
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`RedirectMapping`] | One stored `shortcode → target_url` mapping, as returned by the server. The `id` is server-assigned and identifies the mapping in update/delete calls. |
//! | [`RedirectDraft`] | The user-entered half of a mapping, sent as the JSON body of create and update calls. |
//! | [`RedirectList`] | Envelope of the list endpoint: `{"redirects": […]}`. A missing key deserialises to an empty list. |
//! | [`TokenResponse`] | Body of a successful login: `{"access_token": …}`. The token may still be absent, which the client reports as a missing-token error. |

use serde::{Deserialize, Serialize};

/// A single shortcode → target URL mapping owned by the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectMapping {
    /// Server-assigned identifier, stable across edits.
    pub id: i64,
    /// Short user-chosen key the redirect resolves from.
    pub shortcode: String,
    /// Absolute destination URL.
    pub target_url: String,
}

/// User-entered fields of a mapping, for create and update calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectDraft {
    pub shortcode: String,
    pub target_url: String,
}

/// Envelope returned by the list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RedirectList {
    #[serde(default)]
    pub redirects: Vec<RedirectMapping>,
}

/// Body of a successful login response.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}
