use super::*;

// =============================================================
// Casing conventions
// =============================================================

#[test]
fn user_deserializes_camel_case_fields() {
    let user: User = serde_json::from_str(
        r#"{"did":"did:plc:abc","handle":"alice.test","displayName":"Alice","avatar":null,"description":null}"#,
    )
    .unwrap();
    assert_eq!(user.did, "did:plc:abc");
    assert_eq!(user.display_name.as_deref(), Some("Alice"));
}

#[test]
fn app_info_deserializes_snake_case_fields() {
    let app: AppInfo = serde_json::from_str(
        r#"{
            "app_id": "app-1",
            "name": "My App",
            "domain": "myapp.example.com",
            "api_key": "sk-123",
            "status": "active",
            "created_at": "2024-01-15T00:00:00Z",
            "updated_at": "2024-01-16T00:00:00Z"
        }"#,
    )
    .unwrap();
    assert_eq!(app.app_id, "app-1");
    assert_eq!(app.api_key, "sk-123");
}

#[test]
fn membership_round_trips_community_payload() {
    let raw = r#"{
        "uri": "at://did:plc:me/membership/1",
        "communityDid": "did:plc:comm",
        "joinedAt": "2024-03-01T12:00:00Z",
        "status": "pending",
        "community": {
            "did": "did:plc:comm",
            "displayName": "Rust Circle",
            "description": null,
            "avatar": null,
            "banner": null,
            "type": "admin-approved"
        },
        "isOnlyAdmin": null
    }"#;
    let membership: Membership = serde_json::from_str(raw).unwrap();
    assert_eq!(membership.status, MembershipStatus::Pending);
    assert_eq!(membership.community.community_type, Some(CommunityType::AdminApproved));
}

// =============================================================
// Enum wire values
// =============================================================

#[test]
fn community_type_uses_kebab_case() {
    assert_eq!(serde_json::to_string(&CommunityType::AdminApproved).unwrap(), "\"admin-approved\"");
    assert_eq!(serde_json::to_string(&CommunityType::Open).unwrap(), "\"open\"");
    assert_eq!(serde_json::to_string(&CommunityType::Private).unwrap(), "\"private\"");
}

#[test]
fn join_status_uses_snake_case() {
    let resp: JoinResponse = serde_json::from_str(r#"{"status":"already_member"}"#).unwrap();
    assert_eq!(resp.status, JoinStatus::AlreadyMember);
    let resp: JoinResponse = serde_json::from_str(r#"{"status":"joined"}"#).unwrap();
    assert_eq!(resp.status, JoinStatus::Joined);
    let resp: JoinResponse = serde_json::from_str(r#"{"status":"pending"}"#).unwrap();
    assert_eq!(resp.status, JoinStatus::Pending);
}

#[test]
fn app_visibility_default_uses_snake_case() {
    assert_eq!(
        serde_json::to_string(&AppVisibilityDefault::ApprovalRequired).unwrap(),
        "\"approval_required\""
    );
}

// =============================================================
// Detail payload defaults
// =============================================================

#[test]
fn community_detail_defaults_relationship_flags() {
    // Anonymous-caller payloads may omit the relationship flags entirely.
    let raw = r#"{
        "community": {
            "did": "did:plc:comm",
            "displayName": "Rust Circle",
            "description": "A community",
            "avatar": null,
            "banner": null,
            "type": "open"
        },
        "memberCount": 12
    }"#;
    let detail: CommunityDetail = serde_json::from_str(raw).unwrap();
    assert!(!detail.is_authenticated);
    assert!(!detail.is_member);
    assert!(!detail.is_admin);
    assert_eq!(detail.user_role, None);
    assert_eq!(detail.member_count, 12);
}

#[test]
fn community_detail_reads_relationship_flags() {
    let raw = r#"{
        "community": {
            "did": "did:plc:comm",
            "displayName": "Rust Circle",
            "description": null,
            "avatar": null,
            "banner": null,
            "type": "open",
            "guidelines": "Be kind.",
            "memberCount": 12,
            "admins": ["did:plc:admin"]
        },
        "memberCount": 12,
        "isAuthenticated": true,
        "isMember": true,
        "isAdmin": false,
        "userRole": "Moderator"
    }"#;
    let detail: CommunityDetail = serde_json::from_str(raw).unwrap();
    assert!(detail.is_authenticated);
    assert!(detail.is_member);
    assert_eq!(detail.user_role.as_deref(), Some("Moderator"));
    assert_eq!(detail.community.guidelines.as_deref(), Some("Be kind."));
}

#[test]
fn member_defaults_roles_and_admin_flag() {
    let member: Member = serde_json::from_str(r#"{"did":"did:plc:m1"}"#).unwrap();
    assert!(!member.is_admin);
    assert!(member.roles.is_empty());
    assert_eq!(member.handle, None);
}

// =============================================================
// Default permission seeding
// =============================================================

#[test]
fn new_collection_permission_is_member_except_delete() {
    let perm = AppDefaultPermission::for_collection("com.example.myapp.feed.post");
    assert_eq!(perm.collection, "com.example.myapp.feed.post");
    assert_eq!(perm.default_can_create, "member");
    assert_eq!(perm.default_can_read, "member");
    assert_eq!(perm.default_can_update, "member");
    assert_eq!(perm.default_can_delete, "admin");
}

#[test]
fn default_permission_serializes_camel_case() {
    let perm = AppDefaultPermission::for_collection("com.example.myapp.feed.post");
    let json = serde_json::to_value(&perm).unwrap();
    assert_eq!(json["defaultCanDelete"], "admin");
    assert!(json.get("default_can_delete").is_none());
}

#[test]
fn default_level_accessors_cover_every_operation() {
    let mut perm = AppDefaultPermission::for_collection("com.example.myapp.feed.post");
    assert_eq!(perm.level(PermissionOp::Create), "member");
    assert_eq!(perm.level(PermissionOp::Delete), "admin");

    perm.set_level(PermissionOp::Read, "admin");
    assert_eq!(perm.level(PermissionOp::Read), "admin");
    // Only the targeted slot moves.
    assert_eq!(perm.level(PermissionOp::Create), "member");
    assert_eq!(perm.level(PermissionOp::Update), "member");
}

#[test]
fn override_level_accessors_cover_every_operation() {
    let mut perm = CollectionPermission::for_collection("com.example.myapp.feed.post");
    assert_eq!(perm.level(PermissionOp::Create), "member");
    assert_eq!(perm.level(PermissionOp::Delete), "admin");

    perm.set_level(PermissionOp::Delete, "member");
    assert_eq!(perm.level(PermissionOp::Delete), "member");
    assert_eq!(perm.level(PermissionOp::Read), "member");
}

// =============================================================
// Partial updates
// =============================================================

#[test]
fn permission_patch_carries_only_the_changed_field() {
    let patch = CollectionPermissionPatch::for_op("com.example.myapp.feed.post", PermissionOp::Read, "admin");
    let json = serde_json::to_value(&patch).unwrap();
    assert_eq!(json["collection"], "com.example.myapp.feed.post");
    assert_eq!(json["canRead"], "admin");
    assert!(json.get("canCreate").is_none());
    assert!(json.get("canUpdate").is_none());
    assert!(json.get("canDelete").is_none());
}

#[test]
fn default_permission_patch_carries_only_the_changed_field() {
    let patch = AppDefaultPermissionPatch::for_op("com.example.myapp.feed.post", PermissionOp::Delete, "member");
    let json = serde_json::to_value(&patch).unwrap();
    assert_eq!(json["defaultCanDelete"], "member");
    assert!(json.get("defaultCanCreate").is_none());
}

#[test]
fn role_patch_omits_untouched_toggle() {
    let patch = RolePatch {
        visible: Some(false),
        ..RolePatch::default()
    };
    let json = serde_json::to_value(patch).unwrap();
    assert_eq!(json["visible"], false);
    assert!(json.get("canViewAuditLog").is_none());
}

#[test]
fn full_collection_patch_carries_every_level() {
    let row = CollectionPermission::for_collection("com.example.myapp.feed.post");
    let patch = CollectionPermissionPatch::from_full(&row);
    let json = serde_json::to_value(&patch).unwrap();
    assert_eq!(json["canCreate"], "member");
    assert_eq!(json["canRead"], "member");
    assert_eq!(json["canUpdate"], "member");
    assert_eq!(json["canDelete"], "admin");
}

#[test]
fn unsaved_settings_default_to_open() {
    let settings = CommunitySettings::defaults("did:plc:abc");
    assert_eq!(settings.community_did, "did:plc:abc");
    assert_eq!(settings.community_type, Some(CommunityType::Open));
    assert_eq!(settings.app_visibility_default, AppVisibilityDefault::Open);
    assert!(settings.blocked_app_ids.is_empty());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn create_community_request_maps_approval_flag_to_type() {
    let req = CreateCommunityRequest::existing("did:plc:abc", "app-pass", "Rust Meetup", "", true);
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["type"], "existing");
    assert_eq!(json["communityType"], "admin-approved");
    assert_eq!(json["appPassword"], "app-pass");

    let open = CreateCommunityRequest::existing("did:plc:abc", "app-pass", "Rust Meetup", "", false);
    let json = serde_json::to_value(&open).unwrap();
    assert_eq!(json["communityType"], "open");
}

#[test]
fn register_app_request_omits_empty_default_permissions() {
    let req = RegisterAppRequest {
        name: "My App".to_owned(),
        domain: "myapp.example.com".to_owned(),
        default_permissions: None,
    };
    let json = serde_json::to_value(&req).unwrap();
    assert!(json.get("defaultPermissions").is_none());

    let seeded = RegisterAppRequest {
        default_permissions: Some(vec![AppDefaultPermission::for_collection("com.example.myapp.post")]),
        ..req
    };
    let json = serde_json::to_value(&seeded).unwrap();
    assert_eq!(json["defaultPermissions"][0]["collection"], "com.example.myapp.post");
}

#[test]
fn community_apps_payload_reads_camel_case_registry() {
    let json = r#"{
        "apps": [{
            "appId": "app-1",
            "status": "enabled",
            "createdAt": "2025-01-01T00:00:00Z",
            "updatedAt": "2025-01-02T00:00:00Z"
        }],
        "allApps": [{"app_id": "app-1", "name": "My App", "domain": "myapp.example.com"}]
    }"#;
    let apps: CommunityApps = serde_json::from_str(json).unwrap();
    assert_eq!(apps.apps.len(), 1);
    assert_eq!(apps.apps[0].status, AppVisibilityStatus::Enabled);
    assert_eq!(apps.all_apps[0].domain, "myapp.example.com");
}
