//! Server-side cache inspection and clearing.

#[cfg(test)]
#[path = "cache_test.rs"]
mod cache_test;

use super::transport::{AdminTransport, ApiRequest, decode_envelope, decode_payload};
use super::types::{CacheStats, Envelope};
use crate::error::RequestError;

const STATS_PATH: &str = "cache/stats";
const CLEAR_PATH: &str = "cache/clear";

/// Cache statistics and full clears. No selective clearing.
pub struct CacheAdmin<T> {
    transport: T,
}

impl<T: AdminTransport> CacheAdmin<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch cache statistics exactly as the backend reports them.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` on transport failure, non-success status, or a
    /// response without a stats object.
    pub async fn get_stats(&self) -> Result<Envelope<CacheStats>, RequestError> {
        let response = self
            .transport
            .send(ApiRequest::get(STATS_PATH))
            .await
            .inspect_err(|e| log::warn!("cache stats failed: {e}"))?;
        decode_payload(&response, "cache stats").inspect_err(|e| log::warn!("cache stats rejected: {e}"))
    }

    /// Drop every cache entry. Succeeds on an already-empty cache.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` on transport failure or non-success status.
    pub async fn clear_all(&self) -> Result<Envelope<()>, RequestError> {
        let response = self
            .transport
            .send(ApiRequest::post(CLEAR_PATH, None))
            .await
            .inspect_err(|e| log::warn!("cache clear failed: {e}"))?;
        let envelope = decode_envelope::<serde_json::Value>(&response)
            .inspect_err(|e| log::warn!("cache clear rejected: {e}"))?;
        if envelope.data.is_some() {
            log::debug!("ignoring payload on cache clear response");
        }
        log::info!("cache cleared: {}", envelope.message);
        Ok(Envelope {
            status: envelope.status,
            message: envelope.message,
            data: None,
        })
    }
}
