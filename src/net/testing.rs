//! Scripted transport for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use futures::future::LocalBoxFuture;

use super::transport::{AdminTransport, ApiRequest, ApiResponse};
use crate::error::RequestError;

/// Replays queued responses in order and records every request.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<ApiResponse, RequestError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(&self, status: u16, body: &str) -> &Self {
        self.replies.borrow_mut().push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(&self, error: RequestError) -> &Self {
        self.replies.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl AdminTransport for ScriptedTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, RequestError>> {
        self.requests.borrow_mut().push(request);
        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(RequestError::Transport("no scripted reply".to_owned())));
        Box::pin(async move { reply })
    }
}

/// Session JSON in the backend's shape.
pub fn session_json(id: &str, is_current: bool) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "deviceInfo": format!("device {id}"),
        "ipAddress": "192.0.2.10",
        "userAgent": "Mozilla/5.0",
        "createdAt": "2026-10-19T08:00:00Z",
        "expiresAt": "2026-10-26T08:00:00Z",
        "isCurrent": is_current,
    })
}

/// A 200 listing envelope for the given `(id, is_current)` pairs.
pub fn listing_body(sessions: &[(&str, bool)]) -> String {
    let items: Vec<_> = sessions.iter().map(|(id, cur)| session_json(id, *cur)).collect();
    serde_json::json!({
        "status": 200,
        "message": "OK",
        "data": { "sessions": items, "count": sessions.len() },
    })
    .to_string()
}

/// A 200 bulk-revoke envelope.
pub fn revoked_body(count: usize) -> String {
    serde_json::json!({
        "status": 200,
        "message": "OK",
        "data": { "sessionsRevoked": count },
    })
    .to_string()
}
