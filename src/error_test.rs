use super::*;

#[test]
fn rejected_401_and_403_invalidate_credential() {
    assert!(ResolutionFailure::Rejected(401).invalidates_credential());
    assert!(ResolutionFailure::Rejected(403).invalidates_credential());
}

#[test]
fn server_errors_and_timeouts_keep_credential() {
    assert!(!ResolutionFailure::Rejected(500).invalidates_credential());
    assert!(!ResolutionFailure::Transport("offline".to_owned()).invalidates_credential());
    assert!(!ResolutionFailure::TimedOut(5000).invalidates_credential());
}

#[test]
fn status_error_message_includes_code_and_backend_message() {
    let err = RequestError::Status { status: 503, message: "cache offline".to_owned() };
    assert_eq!(err.to_string(), "request failed (503): cache offline");
}

#[test]
fn unavailable_message_matches_server_stub_wording() {
    assert_eq!(RequestError::Unavailable.to_string(), "not available on server");
}
