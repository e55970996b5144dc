use super::*;

// =============================================================
// Reversed-domain prefix
// =============================================================

#[test]
fn reverses_three_part_domain() {
    assert_eq!(reversed_domain_prefix("myapp.example.com").as_deref(), Some("com.example.myapp."));
}

#[test]
fn reverses_two_part_domain() {
    assert_eq!(reversed_domain_prefix("example.com").as_deref(), Some("com.example."));
}

#[test]
fn empty_domain_has_no_prefix() {
    assert_eq!(reversed_domain_prefix(""), None);
    assert_eq!(reversed_domain_prefix("   "), None);
}

// =============================================================
// Domain matching
// =============================================================

#[test]
fn collection_under_domain_matches() {
    assert!(collection_matches_domain("com.example.myapp.feed.post", "myapp.example.com"));
}

#[test]
fn collection_outside_domain_does_not_match() {
    assert!(!collection_matches_domain("com.other.feed.post", "myapp.example.com"));
}

#[test]
fn bare_prefix_without_segment_still_matches_prefix_rule() {
    // The client only enforces the prefix; deeper NSID shape is the
    // backend's concern.
    assert!(collection_matches_domain("com.example.myapp.x", "myapp.example.com"));
}

#[test]
fn nothing_matches_an_empty_domain() {
    assert!(!collection_matches_domain("com.example.myapp.feed", ""));
}

// =============================================================
// New-entry validation
// =============================================================

#[test]
fn accepts_and_trims_valid_collection() {
    let out = validate_new_collection("  com.example.myapp.feed.post  ", "myapp.example.com", &[]);
    assert_eq!(out.as_deref(), Ok("com.example.myapp.feed.post"));
}

#[test]
fn rejects_foreign_prefix_with_domain_hint() {
    let out = validate_new_collection("org.else.feed", "myapp.example.com", &[]);
    assert_eq!(
        out,
        Err("Collection must start with \"com.example.myapp.\" to match your app domain".to_owned())
    );
}

#[test]
fn rejects_duplicate_collection() {
    let existing = vec!["com.example.myapp.feed.post".to_owned()];
    let out = validate_new_collection("com.example.myapp.feed.post", "myapp.example.com", &existing);
    assert_eq!(out, Err("This collection already exists".to_owned()));
}

#[test]
fn duplicate_check_applies_to_trimmed_candidate() {
    let existing = vec!["com.example.myapp.feed.post".to_owned()];
    let out = validate_new_collection(" com.example.myapp.feed.post ", "myapp.example.com", &existing);
    assert_eq!(out, Err("This collection already exists".to_owned()));
}
