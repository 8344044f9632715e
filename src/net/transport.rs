//! Transport seam between the console core and the admin backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionDirectory`, `CacheAdmin` and the auth helpers only see
//! `AdminTransport`. The browser build plugs in `HttpTransport` (`gloo-net`);
//! tests plug in a scripted fake. Envelope decoding lives here so every
//! operation maps HTTP failures to `RequestError` the same way.
//!
//! Client-side (hydrate): real HTTP calls.
//! Server-side (SSR): every request fails with `RequestError::Unavailable`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use super::types::Envelope;
use crate::config::ConsoleConfig;
use crate::error::RequestError;
use crate::util::credential::LocalStorageCredential;

/// HTTP verbs the console uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A request relative to the configured API base.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: Method::Get, path: path.into(), body: None }
    }

    pub fn post(path: impl Into<String>, body: Option<serde_json::Value>) -> Self {
        Self { method: Method::Post, path: path.into(), body }
    }
}

/// Raw HTTP outcome: status code plus body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request to the admin backend.
///
/// Implementations only fail with `RequestError::Transport` (or
/// `Unavailable`); status handling is left to the caller.
pub trait AdminTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, RequestError>>;
}

impl<T: AdminTransport + ?Sized> AdminTransport for Rc<T> {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, RequestError>> {
        (**self).send(request)
    }
}

/// Decode a response into an envelope, mapping non-2xx statuses to
/// `RequestError::Status`.
///
/// # Errors
///
/// Returns `Status` for non-success responses and `Malformed` when the body
/// is not an envelope of the expected payload.
pub fn decode_envelope<T: DeserializeOwned>(response: &ApiResponse) -> Result<Envelope<T>, RequestError> {
    if !response.is_success() {
        return Err(RequestError::Status {
            status: response.status,
            message: failure_message(response),
        });
    }
    serde_json::from_str(&response.body).map_err(|e| RequestError::Malformed(e.to_string()))
}

/// Decode an envelope whose `data` must be present.
///
/// # Errors
///
/// Same as [`decode_envelope`], plus `Malformed` when `data` is `null`.
pub fn decode_payload<T: DeserializeOwned>(response: &ApiResponse, what: &str) -> Result<Envelope<T>, RequestError> {
    let envelope = decode_envelope::<T>(response)?;
    if envelope.data.is_none() {
        return Err(RequestError::Malformed(format!("{what} response without data")));
    }
    Ok(envelope)
}

/// Best human-readable message for a failed response.
fn failure_message(response: &ApiResponse) -> String {
    if let Ok(envelope) = serde_json::from_str::<Envelope<serde_json::Value>>(&response.body) {
        if !envelope.message.is_empty() {
            return envelope.message;
        }
    }
    let text = response.body.trim();
    if text.is_empty() || text.len() > 200 {
        format!("HTTP {}", response.status)
    } else {
        text.to_owned()
    }
}

/// Browser transport: `gloo-net` requests with the stored bearer credential.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    config: ConsoleConfig,
    credential: LocalStorageCredential,
}

impl HttpTransport {
    #[must_use]
    pub fn new(config: ConsoleConfig) -> Self {
        let credential = LocalStorageCredential::new(config.credential_key.clone());
        Self { config, credential }
    }

    #[must_use]
    pub fn credential(&self) -> &LocalStorageCredential {
        &self.credential
    }

    async fn perform(&self, request: ApiRequest) -> Result<ApiResponse, RequestError> {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::credential::CredentialStore;
            use gloo_net::http::Request;

            let url = self.config.endpoint(&request.path);
            let mut builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
            };
            if let Some(token) = self.credential.load() {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let sent = match request.body {
                Some(body) => {
                    builder
                        .json(&body)
                        .map_err(|e| RequestError::Transport(e.to_string()))?
                        .send()
                        .await
                }
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| RequestError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| RequestError::Transport(e.to_string()))?;
            Ok(ApiResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, request);
            Err(RequestError::Unavailable)
        }
    }
}

impl AdminTransport for HttpTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, RequestError>> {
        Box::pin(self.perform(request))
    }
}
