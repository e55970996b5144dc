use super::*;

// =============================================================
// action parsing
// =============================================================

#[test]
fn derive_flags_join_action() {
    let q = JoinQuery::derive(Some("join"), None);
    assert!(q.join_requested);
    assert_eq!(q.return_to, None);
}

#[test]
fn derive_ignores_other_actions() {
    assert!(!JoinQuery::derive(Some("leave"), None).join_requested);
    assert!(!JoinQuery::derive(Some(""), None).join_requested);
    assert!(!JoinQuery::derive(None, None).join_requested);
}

#[test]
fn derive_is_case_sensitive_about_action() {
    assert!(!JoinQuery::derive(Some("Join"), None).join_requested);
}

// =============================================================
// return_to sanitization
// =============================================================

#[test]
fn derive_keeps_safe_return_to() {
    let q = JoinQuery::derive(Some("join"), Some("/communities/did:plc:abc"));
    assert_eq!(q.return_to.as_deref(), Some("/communities/did:plc:abc"));
}

#[test]
fn derive_drops_external_return_to() {
    let q = JoinQuery::derive(Some("join"), Some("https://evil.example/phish"));
    assert_eq!(q.return_to, None);
}

#[test]
fn derive_drops_protocol_relative_return_to() {
    let q = JoinQuery::derive(Some("join"), Some("//evil.com"));
    assert_eq!(q.return_to, None);
}

#[test]
fn derive_sanitizes_return_to_without_join_action() {
    // return_to stays usable even when no join was requested.
    let q = JoinQuery::derive(None, Some("/apps"));
    assert!(!q.join_requested);
    assert_eq!(q.return_to.as_deref(), Some("/apps"));
}

#[test]
fn default_is_inert() {
    let q = JoinQuery::default();
    assert!(!q.join_requested);
    assert_eq!(q.return_to, None);
}
