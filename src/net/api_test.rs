use super::*;

// =============================================================
// Base URL
// =============================================================

#[test]
fn join_base_prefixes_configured_origin() {
    assert_eq!(
        join_base(Some("https://api.opensocial.example"), "/users/me"),
        "https://api.opensocial.example/users/me"
    );
}

#[test]
fn join_base_strips_trailing_slash_from_origin() {
    assert_eq!(
        join_base(Some("https://api.opensocial.example/"), "/users/me"),
        "https://api.opensocial.example/users/me"
    );
}

#[test]
fn join_base_leaves_paths_relative_without_origin() {
    assert_eq!(join_base(None, "/communities/did:plc:abc"), "/communities/did:plc:abc");
    assert_eq!(join_base(Some(""), "/logout"), "/logout");
}

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn community_endpoints_embed_the_did() {
    assert_eq!(community_endpoint("did:plc:abc"), "/communities/did:plc:abc");
    assert_eq!(community_join_endpoint("did:plc:abc"), "/communities/did:plc:abc/join");
    assert_eq!(
        community_members_endpoint("did:plc:abc"),
        "/communities/did:plc:abc/members"
    );
    assert_eq!(
        community_avatar_endpoint("did:plc:abc"),
        "/communities/did:plc:abc/avatar"
    );
    assert_eq!(
        community_settings_endpoint("did:plc:abc"),
        "/communities/did:plc:abc/settings"
    );
}

#[test]
fn app_visibility_endpoints_nest_app_under_community() {
    assert_eq!(community_apps_endpoint("did:plc:abc"), "/communities/did:plc:abc/apps");
    assert_eq!(
        community_app_endpoint("did:plc:abc", "app-1"),
        "/communities/did:plc:abc/apps/app-1"
    );
    assert_eq!(
        community_app_permissions_endpoint("did:plc:abc", "app-1"),
        "/communities/did:plc:abc/apps/app-1/permissions"
    );
}

#[test]
fn role_endpoints_embed_the_role_name() {
    assert_eq!(community_roles_endpoint("did:plc:abc"), "/communities/did:plc:abc/roles");
    assert_eq!(
        community_role_endpoint("did:plc:abc", "moderator"),
        "/communities/did:plc:abc/roles/moderator"
    );
}

#[test]
fn audit_log_endpoint_omits_cursor_on_first_page() {
    assert_eq!(
        audit_log_endpoint("did:plc:abc", None),
        "/communities/did:plc:abc/audit-log?limit=25"
    );
}

#[test]
fn audit_log_endpoint_escapes_the_cursor() {
    assert_eq!(
        audit_log_endpoint("did:plc:abc", Some("2025-06-01T10:00:00+00:00")),
        "/communities/did:plc:abc/audit-log?limit=25&cursor=2025-06-01T10%3A00%3A00%2B00%3A00"
    );
}

#[test]
fn registry_endpoints_embed_the_app_id() {
    assert_eq!(registered_app_endpoint("app-1"), "/api/v1/apps/app-1");
    assert_eq!(rotate_key_endpoint("app-1"), "/api/v1/apps/app-1/rotate-key");
    assert_eq!(
        app_default_permissions_endpoint("app-1"),
        "/api/v1/apps/app-1/default-permissions"
    );
}
