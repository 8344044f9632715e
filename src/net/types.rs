//! Wire DTOs for the admin backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Payloads the console
//! only displays (cache statistics) stay as raw `serde_json` values so new
//! metrics show up without a client release.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// The authenticated operator, as returned by `/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminIdentity {
    /// Unique admin identifier.
    pub id: String,
    /// Login name.
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Uniform response wrapper used by every administrative operation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: i32,
    pub message: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Replace the payload, keeping status and message.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            status: self.status,
            message: self.message,
            data: self.data.map(f),
        }
    }
}

/// One authenticated device/browser binding for the signed-in admin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub device_info: String,
    pub ip_address: String,
    pub user_agent: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub expires_at: OffsetDateTime,
    /// Marks the session issuing the present request.
    #[serde(default)]
    pub is_current: bool,
}

/// Payload of the session listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionList {
    pub sessions: Vec<Session>,
    pub count: usize,
}

impl SessionList {
    /// The session the backend marked as current, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Session> {
        self.sessions.iter().find(|s| s.is_current)
    }
}

/// Payload of the bulk revoke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevokeResult {
    pub sessions_revoked: usize,
}

/// Cache metrics, shape owned by the backing cache.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheStats(pub serde_json::Map<String, serde_json::Value>);

impl CacheStats {
    /// Metrics sorted by name, rendered for display.
    pub fn display_rows(&self) -> impl Iterator<Item = (&str, String)> {
        self.0.iter().map(|(name, value)| {
            let shown = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (name.as_str(), shown)
        })
    }
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Successful login: bearer credential plus the identity it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub admin: AdminIdentity,
}
