use std::rc::Rc;

use super::*;
use crate::net::testing::ScriptedTransport;
use crate::net::transport::Method;

const CLEARED: &str = r#"{"status":200,"message":"Cache cleared","data":null}"#;

fn admin() -> (Rc<ScriptedTransport>, CacheAdmin<Rc<ScriptedTransport>>) {
    let transport = Rc::new(ScriptedTransport::new());
    let admin = CacheAdmin::new(Rc::clone(&transport));
    (transport, admin)
}

#[tokio::test]
async fn stats_are_returned_unchanged() {
    let (transport, admin) = admin();
    let stats = serde_json::json!({
        "keys": 42,
        "memory": "1.2M",
        "hitRate": 0.93,
        "nested": { "evicted": [1, 2] },
    });
    transport.reply(200, &serde_json::json!({ "status": 200, "message": "OK", "data": stats }).to_string());

    let env = admin.get_stats().await.unwrap();
    assert_eq!(serde_json::to_value(env.data.unwrap()).unwrap(), stats);
    assert_eq!(transport.requests()[0], ApiRequest::get("cache/stats"));
}

#[tokio::test]
async fn stats_without_data_are_malformed() {
    let (transport, admin) = admin();
    transport.reply(200, r#"{"status":200,"message":"OK","data":null}"#);

    let err = admin.get_stats().await.unwrap_err();
    assert!(matches!(err, RequestError::Malformed(_)));
}

#[tokio::test]
async fn clear_returns_null_data() {
    let (transport, admin) = admin();
    transport.reply(200, CLEARED);

    let env = admin.clear_all().await.unwrap();
    assert_eq!(env, Envelope { status: 200, message: "Cache cleared".to_owned(), data: None });
    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "cache/clear");
}

#[tokio::test]
async fn clear_twice_is_idempotent() {
    let (transport, admin) = admin();
    transport.reply(200, CLEARED);
    transport.reply(200, CLEARED);

    let first = admin.clear_all().await.unwrap();
    let second = admin.clear_all().await.unwrap();
    assert!(first.data.is_none());
    assert!(second.data.is_none());
    assert_eq!(first, second);
}

#[tokio::test]
async fn clear_failure_is_returned_to_caller() {
    let (transport, admin) = admin();
    transport.reply(503, r#"{"status":503,"message":"cache offline","data":null}"#);

    let err = admin.clear_all().await.unwrap_err();
    assert_eq!(err, RequestError::Status { status: 503, message: "cache offline".to_owned() });
}
