use super::*;

// =============================================================
// Accepted paths
// =============================================================

#[test]
fn accepts_simple_relative_path() {
    assert_eq!(sanitize_redirect_url("/communities").as_deref(), Some("/communities"));
}

#[test]
fn accepts_path_with_did_colons_and_query() {
    assert_eq!(
        sanitize_redirect_url("/communities/did:plc:abc/settings?x=1").as_deref(),
        Some("/communities/did:plc:abc/settings?x=1")
    );
}

#[test]
fn trims_surrounding_whitespace() {
    assert_eq!(sanitize_redirect_url("  /ok  ").as_deref(), Some("/ok"));
}

#[test]
fn accepts_root_path() {
    assert_eq!(sanitize_redirect_url("/").as_deref(), Some("/"));
}

// =============================================================
// Rejected targets
// =============================================================

#[test]
fn rejects_empty_input() {
    assert_eq!(sanitize_redirect_url(""), None);
    assert_eq!(sanitize_redirect_url("   "), None);
}

#[test]
fn rejects_protocol_relative_url() {
    assert_eq!(sanitize_redirect_url("//evil.com"), None);
}

#[test]
fn rejects_javascript_scheme() {
    assert_eq!(sanitize_redirect_url("javascript:alert(1)"), None);
}

#[test]
fn rejects_absolute_url() {
    assert_eq!(sanitize_redirect_url("https://evil.com/path"), None);
}

#[test]
fn rejects_data_scheme() {
    assert_eq!(sanitize_redirect_url("data:text/html,<script></script>"), None);
}

#[test]
fn rejects_relative_path_without_leading_slash() {
    assert_eq!(sanitize_redirect_url("communities/did:plc:abc"), None);
}

#[test]
fn rejects_protocol_relative_after_trim() {
    assert_eq!(sanitize_redirect_url("  //evil.com  "), None);
}
