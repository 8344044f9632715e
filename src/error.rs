//! Error taxonomy for the console core.
//!
//! ERROR HANDLING
//! ==============
//! `ResolutionFailure` never leaves the auth provider: it is logged and the
//! identity degrades to absent. `RequestError` is always handed back to the
//! page that issued the administrative request so it can be displayed.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why the startup credential check did not produce an identity.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionFailure {
    /// The backend refused the stored credential.
    #[error("credential rejected: {0}")]
    Rejected(u16),
    /// The request never produced an HTTP response.
    #[error("credential check failed: {0}")]
    Transport(String),
    /// The backend answered with a body that is not an admin identity.
    #[error("malformed identity payload: {0}")]
    Malformed(String),
    /// The configured resolution timeout elapsed first.
    #[error("credential check timed out after {0} ms")]
    TimedOut(u32),
}

impl ResolutionFailure {
    /// Whether the stored credential should be discarded.
    #[must_use]
    pub fn invalidates_credential(&self) -> bool {
        matches!(self, Self::Rejected(401 | 403))
    }
}

/// Failure of an administrative operation (session list/revoke, cache stats/clear).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the declared envelope payload.
    #[error("malformed response: {0}")]
    Malformed(String),
    /// The response contradicts what the client already knows.
    #[error("inconsistent response: {0}")]
    Inconsistent(String),
    /// Network operations only exist in the browser build.
    #[error("not available on server")]
    Unavailable,
}
