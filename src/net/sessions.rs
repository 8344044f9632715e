//! Session inventory and bulk revocation for the signed-in admin.
//!
//! DESIGN
//! ======
//! The directory remembers the first session the backend ever marked as
//! current ("pinned"). A bulk revoke always lists first and always names the
//! pinned session as the one to keep, so a backend that flips `isCurrent`
//! between calls cannot make this browser sign itself out.

#[cfg(test)]
#[path = "sessions_test.rs"]
mod sessions_test;

use std::cell::RefCell;

use super::transport::{AdminTransport, ApiRequest, decode_payload};
use super::types::{Envelope, RevokeResult, SessionList};
use crate::error::RequestError;

const SESSIONS_PATH: &str = "sessions";
const REVOKE_OTHERS_PATH: &str = "sessions/revoke-others";

/// Listing and revocation of authenticated sessions.
pub struct SessionDirectory<T> {
    transport: T,
    pinned_current: RefCell<Option<String>>,
}

impl<T: AdminTransport> SessionDirectory<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            pinned_current: RefCell::new(None),
        }
    }

    /// Id of this browser's own session, once a listing has revealed it.
    pub fn pinned_current(&self) -> Option<String> {
        self.pinned_current.borrow().clone()
    }

    /// Fetch all sessions of the signed-in admin, in backend order.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` when the request fails, the backend answers
    /// with a non-success status, or the payload is malformed (including a
    /// `count` that disagrees with the number of sessions).
    pub async fn list_sessions(&self) -> Result<Envelope<SessionList>, RequestError> {
        let response = self
            .transport
            .send(ApiRequest::get(SESSIONS_PATH))
            .await
            .inspect_err(|e| log::warn!("session listing failed: {e}"))?;
        let envelope = decode_payload::<SessionList>(&response, "session listing")
            .inspect_err(|e| log::warn!("session listing rejected: {e}"))?;

        if let Some(listing) = &envelope.data {
            if listing.count != listing.sessions.len() {
                return Err(RequestError::Malformed(format!(
                    "session count {} does not match {} listed sessions",
                    listing.count,
                    listing.sessions.len()
                )));
            }
            self.pin_current(listing);
        }
        Ok(envelope)
    }

    /// Sign out every session except this browser's own.
    ///
    /// Always lists sessions right before the revoke, so the reported count
    /// is checked against what the backend held at that moment.
    ///
    /// # Errors
    ///
    /// Returns `RequestError::Inconsistent` when no current session is known
    /// or when the backend reports more revocations than the listing had
    /// other sessions; otherwise the same failures as [`Self::list_sessions`].
    pub async fn revoke_all_other_sessions(&self) -> Result<Envelope<RevokeResult>, RequestError> {
        let listing = self
            .list_sessions()
            .await?
            .data
            .ok_or_else(|| RequestError::Malformed("session listing without data".to_owned()))?;

        let Some(keep) = self.pinned_current() else {
            return Err(RequestError::Inconsistent(
                "the current session is not in the session listing".to_owned(),
            ));
        };
        let others = listing.sessions.iter().filter(|s| s.id != keep).count();

        let body = serde_json::json!({ "keepSessionId": keep });
        let response = self
            .transport
            .send(ApiRequest::post(REVOKE_OTHERS_PATH, Some(body)))
            .await
            .inspect_err(|e| log::warn!("session revoke failed: {e}"))?;
        let envelope = decode_payload::<RevokeResult>(&response, "session revoke")
            .inspect_err(|e| log::warn!("session revoke rejected: {e}"))?;

        let revoked = envelope.data.as_ref().map_or(0, |r| r.sessions_revoked);
        if revoked > others {
            return Err(RequestError::Inconsistent(format!(
                "backend revoked {revoked} sessions but only {others} other sessions were listed"
            )));
        }
        log::info!("revoked {revoked} other sessions");
        Ok(envelope)
    }

    fn pin_current(&self, listing: &SessionList) {
        let mut pinned = self.pinned_current.borrow_mut();
        if pinned.is_none() {
            *pinned = listing.current().map(|s| s.id.clone());
        } else if listing.current().is_some_and(|s| Some(&s.id) != pinned.as_ref()) {
            log::debug!("backend moved the current-session marker; keeping the pinned session");
        }
    }
}
