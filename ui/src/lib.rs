//! This crate contains the shared client state and widgets for the workspace.

mod session;
pub use session::{use_session, Session, SessionProvider, SessionState};

pub mod redirects;
pub use redirects::{can_submit, EditDraft, ListPhase, RedirectListState};

mod banner;
pub use banner::ErrorBanner;
