use super::*;

// =============================================================
// Missing default-permission lists
// =============================================================

#[test]
fn missing_defaults_read_as_empty() {
    let result = empty_when_missing(Err(ApiError::Status {
        status: 404,
        message: None,
    }));
    assert_eq!(result.unwrap(), Vec::<AppDefaultPermission>::new());
}

#[test]
fn other_failures_pass_through() {
    let result = empty_when_missing(Err(ApiError::Status {
        status: 403,
        message: Some("forbidden".into()),
    }));
    assert_eq!(result.unwrap_err().status(), Some(403));
}

#[test]
fn network_failures_pass_through() {
    let result = empty_when_missing(Err(ApiError::Network("offline".into())));
    assert!(matches!(result, Err(ApiError::Network(_))));
}

#[test]
fn present_rows_are_untouched() {
    let rows = vec![AppDefaultPermission::for_collection("app.bsky.feed.post")];
    let result = empty_when_missing(Ok(rows.clone()));
    assert_eq!(result.unwrap(), rows);
}
