use super::*;

fn member(display_name: Option<&str>, handle: Option<&str>) -> Member {
    Member {
        did: "did:plc:member".to_owned(),
        handle: handle.map(str::to_owned),
        display_name: display_name.map(str::to_owned),
        avatar: None,
        is_admin: false,
        confirmed_at: None,
        roles: Vec::new(),
    }
}

// =============================================================
// Avatar validation
// =============================================================

#[test]
fn accepts_a_small_image() {
    assert_eq!(validate_avatar_file(512.0 * 1024.0, "image/png"), Ok(()));
}

#[test]
fn rejects_non_image_files() {
    let err = validate_avatar_file(100.0, "application/pdf").unwrap_err();
    assert_eq!(err, "File must be an image");
}

#[test]
fn rejects_images_over_the_size_cap() {
    let err = validate_avatar_file(MAX_AVATAR_BYTES + 1.0, "image/jpeg").unwrap_err();
    assert_eq!(err, "Image must be smaller than 1MB");
}

#[test]
fn size_cap_is_inclusive() {
    assert_eq!(validate_avatar_file(MAX_AVATAR_BYTES, "image/gif"), Ok(()));
}

// =============================================================
// Type badge
// =============================================================

#[test]
fn badges_each_community_type() {
    assert_eq!(type_badge(Some(CommunityType::Open)), "Open");
    assert_eq!(type_badge(Some(CommunityType::AdminApproved)), "Admin approval");
    assert_eq!(type_badge(Some(CommunityType::Private)), "Private");
}

#[test]
fn missing_type_reads_as_open() {
    assert_eq!(type_badge(None), "Open");
}

// =============================================================
// Member labels
// =============================================================

#[test]
fn member_label_prefers_display_name() {
    let label = member_label(&member(Some("Alice"), Some("alice.example.com")));
    assert_eq!(label, "Alice");
}

#[test]
fn member_label_falls_back_to_handle() {
    let label = member_label(&member(None, Some("alice.example.com")));
    assert_eq!(label, "alice.example.com");
}

#[test]
fn empty_display_name_is_skipped() {
    let label = member_label(&member(Some(""), Some("alice.example.com")));
    assert_eq!(label, "alice.example.com");
}

#[test]
fn member_label_bottoms_out_at_the_did() {
    assert_eq!(member_label(&member(None, None)), "did:plc:member");
}
