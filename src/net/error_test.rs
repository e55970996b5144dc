use super::*;

#[test]
fn user_message_prefers_server_message() {
    let err = ApiError::Status {
        status: 403,
        message: Some("This community is private".to_owned()),
    };
    assert_eq!(err.user_message(), "This community is private");
}

#[test]
fn user_message_falls_back_to_status_line() {
    let err = ApiError::Status { status: 500, message: None };
    assert_eq!(err.user_message(), "Request failed (500)");
}

#[test]
fn user_message_passes_network_text_through() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.user_message(), "connection refused");
}

#[test]
fn status_is_only_present_for_status_errors() {
    assert_eq!(ApiError::Status { status: 404, message: None }.status(), Some(404));
    assert_eq!(ApiError::Network("x".to_owned()).status(), None);
    assert_eq!(ApiError::Decode("x".to_owned()).status(), None);
}

#[test]
fn unauthorized_matches_401_only() {
    assert!(ApiError::Status { status: 401, message: None }.is_unauthorized());
    assert!(!ApiError::Status { status: 403, message: None }.is_unauthorized());
    assert!(!ApiError::Network("offline".to_owned()).is_unauthorized());
}

#[test]
fn display_includes_status_code() {
    let err = ApiError::Status { status: 429, message: None };
    assert_eq!(err.to_string(), "request failed (429)");
}
