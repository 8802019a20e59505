//! Persistence contract for the session token.

/// Storage key under which the token survives page reloads.
pub const TOKEN_KEY: &str = "redirector.token";

/// Where the session token lives between page loads.
///
/// Holds at most one value: the bearer token of the signed-in user. There is
/// no client-side expiry logic; the token stays until `clear` or until the
/// server rejects it. Implementations swallow storage failures, degrading to
/// "no session" rather than crashing the client.
pub trait SessionStore {
    /// The stored token, or `None` when signed out.
    fn get(&self) -> Option<String>;

    /// Persist `token`, replacing any previous value.
    fn set(&self, token: &str);

    /// Forget the stored token.
    fn clear(&self);
}
