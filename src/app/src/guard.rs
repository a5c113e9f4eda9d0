//! Route guard for protected views.
//!
//! Presence of a non-empty token is the only condition checked here. Token
//! validity is up to the server on every request.

use crate::types::Session;
use crate::view::{AccessDeniedView, Page};

/// Outcome of the guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access<'a> {
    Granted { token: &'a str },
    Denied,
}

/// Check the session for a token
pub fn check(session: &Session) -> Access<'_> {
    match session.token() {
        Some(token) => Access::Granted { token },
        None => Access::Denied,
    }
}

/// Render `protected` if the session holds a token, the access-denied
/// fallback otherwise.
pub fn guarded<F>(session: &Session, protected: F) -> Page
where
    F: FnOnce() -> Page,
{
    match check(session) {
        Access::Granted { .. } => protected(),
        Access::Denied => Page::AccessDenied(AccessDeniedView::default()),
    }
}
