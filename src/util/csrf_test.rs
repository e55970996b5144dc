use super::*;

// =============================================================
// Cookie parsing
// =============================================================

#[test]
fn finds_token_among_other_cookies() {
    let cookies = "a=1; csrf-token=abc123; b=2";
    assert_eq!(token_from_cookies(cookies).as_deref(), Some("abc123"));
}

#[test]
fn finds_token_when_only_cookie() {
    assert_eq!(token_from_cookies("csrf-token=xyz").as_deref(), Some("xyz"));
}

#[test]
fn keeps_equals_signs_inside_value() {
    // Base64-ish tokens may carry padding.
    assert_eq!(token_from_cookies("csrf-token=abc==").as_deref(), Some("abc=="));
}

#[test]
fn returns_none_when_cookie_absent() {
    assert_eq!(token_from_cookies("a=1; b=2"), None);
    assert_eq!(token_from_cookies(""), None);
}

#[test]
fn returns_none_for_empty_value() {
    assert_eq!(token_from_cookies("csrf-token="), None);
}

#[test]
fn does_not_match_prefixed_cookie_names() {
    assert_eq!(token_from_cookies("not-csrf-token=abc"), None);
}

// =============================================================
// Method gating
// =============================================================

#[test]
fn mutating_methods_require_token() {
    assert!(method_requires_token("POST"));
    assert!(method_requires_token("PUT"));
    assert!(method_requires_token("DELETE"));
    assert!(method_requires_token("PATCH"));
}

#[test]
fn safe_methods_skip_token() {
    assert!(!method_requires_token("GET"));
    assert!(!method_requires_token("HEAD"));
    assert!(!method_requires_token("OPTIONS"));
}

#[test]
fn read_token_is_none_outside_browser() {
    #[cfg(not(feature = "hydrate"))]
    assert_eq!(read_token(), None);
}
