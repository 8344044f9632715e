use super::*;
use crate::net::types::RevokeResult;

#[test]
fn success_range_is_2xx() {
    assert!(ApiResponse::new(200, "").is_success());
    assert!(ApiResponse::new(204, "").is_success());
    assert!(!ApiResponse::new(302, "").is_success());
    assert!(!ApiResponse::new(500, "").is_success());
}

#[test]
fn decode_envelope_parses_success_body() {
    let resp = ApiResponse::new(200, r#"{"status":200,"message":"OK","data":{"sessionsRevoked":1}}"#);
    let env = decode_envelope::<RevokeResult>(&resp).unwrap();
    assert_eq!(env.data, Some(RevokeResult { sessions_revoked: 1 }));
}

#[test]
fn decode_envelope_uses_envelope_message_on_failure() {
    let resp = ApiResponse::new(403, r#"{"status":403,"message":"Forbidden","data":null}"#);
    let err = decode_envelope::<RevokeResult>(&resp).unwrap_err();
    assert_eq!(err, RequestError::Status { status: 403, message: "Forbidden".to_owned() });
}

#[test]
fn decode_envelope_falls_back_to_plain_body_then_status() {
    let plain = decode_envelope::<RevokeResult>(&ApiResponse::new(502, "bad gateway")).unwrap_err();
    assert_eq!(plain, RequestError::Status { status: 502, message: "bad gateway".to_owned() });

    let empty = decode_envelope::<RevokeResult>(&ApiResponse::new(500, "  ")).unwrap_err();
    assert_eq!(empty, RequestError::Status { status: 500, message: "HTTP 500".to_owned() });
}

#[test]
fn decode_envelope_rejects_non_envelope_success_body() {
    let err = decode_envelope::<RevokeResult>(&ApiResponse::new(200, "<html>")).unwrap_err();
    assert!(matches!(err, RequestError::Malformed(_)));
}

#[test]
fn decode_payload_requires_data() {
    let resp = ApiResponse::new(200, r#"{"status":200,"message":"OK","data":null}"#);
    let err = decode_payload::<RevokeResult>(&resp, "revoke").unwrap_err();
    assert_eq!(err, RequestError::Malformed("revoke response without data".to_owned()));
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn http_transport_is_unavailable_off_browser() {
    let transport = HttpTransport::new(ConsoleConfig::default());
    let err = transport.send(ApiRequest::get("sessions")).await.unwrap_err();
    assert_eq!(err, RequestError::Unavailable);
}
