//! Shared DTOs for the backend HTTP/JSON boundary.
//!
//! DESIGN
//! ======
//! These types mirror backend payloads field for field so serde can stay
//! schema-driven. Community endpoints speak camelCase; the app registry
//! speaks snake_case, and the serde renames below pin down which is which.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated user as returned by `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Decentralized identifier, e.g. `did:plc:abc123`.
    pub did: String,
    /// Protocol handle, e.g. `alice.example.com`.
    pub handle: String,
    /// Profile display name, if set.
    pub display_name: Option<String>,
    /// Avatar image URL, if set.
    pub avatar: Option<String>,
    /// Profile description, if set.
    pub description: Option<String>,
}

/// Join policy of a community.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommunityType {
    /// Anyone can join immediately.
    Open,
    /// Join requests are held for admin approval.
    AdminApproved,
    /// Invite only; no self-service joining.
    Private,
}

/// A community profile. Optional fields are only populated by the detail
/// endpoint; list payloads carry the core identity fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    /// Community account DID.
    pub did: String,
    /// Display name.
    pub display_name: String,
    /// Description, if set.
    pub description: Option<String>,
    /// Avatar image URL, if set.
    pub avatar: Option<String>,
    /// Banner image URL, if set.
    pub banner: Option<String>,
    /// Join policy; absent on older records, treated as open by the UI.
    #[serde(rename = "type")]
    pub community_type: Option<CommunityType>,
    /// Admin DIDs (detail payloads only).
    pub admins: Option<Vec<String>>,
    /// Member count (detail payloads only).
    pub member_count: Option<i64>,
    /// Markdown community guidelines (detail payloads only).
    pub guidelines: Option<String>,
}

/// `GET /communities/{did}` payload: the community plus the caller's
/// relationship to it. `is_authenticated` and `is_member` gate the join
/// flow's automatic entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityDetail {
    pub community: Community,
    /// Total members, counted server-side.
    pub member_count: i64,
    /// Whether the request carried a valid session.
    #[serde(default)]
    pub is_authenticated: bool,
    /// Whether the caller already belongs to this community.
    #[serde(default)]
    pub is_member: bool,
    /// Whether the caller administers this community.
    #[serde(default)]
    pub is_admin: bool,
    /// The caller's custom role display name, if any.
    pub user_role: Option<String>,
}

/// Outcome reported by `POST /communities/{did}/join`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinStatus {
    /// Membership is active immediately.
    Joined,
    /// Request recorded; awaiting admin approval.
    Pending,
    /// The caller was a member before this request.
    AlreadyMember,
}

/// Body of a successful join response.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinResponse {
    pub status: JoinStatus,
}

/// Membership lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    Active,
    Pending,
}

/// One of the caller's community memberships, from
/// `GET /users/me/communities`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
    /// Record URI of the membership.
    pub uri: String,
    /// DID of the community joined.
    pub community_did: String,
    /// ISO 8601 timestamp the membership was created.
    pub joined_at: String,
    pub status: MembershipStatus,
    /// The community the membership points at.
    pub community: Community,
    /// True when leaving would orphan the community (caller is its only
    /// admin).
    pub is_only_admin: Option<bool>,
}

/// A community member, from `GET /communities/{did}/members`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub did: String,
    pub handle: Option<String>,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
    /// When the membership was confirmed, if it has been.
    pub confirmed_at: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    /// Visible custom roles held by this member.
    #[serde(default)]
    pub roles: Vec<MemberRole>,
}

/// A role tag shown on a member row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRole {
    pub name: String,
    pub display_name: String,
}

/// Default treatment of apps that have not been explicitly reviewed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppVisibilityDefault {
    /// Apps are allowed until an admin disables them.
    Open,
    /// Apps are held until an admin enables them.
    ApprovalRequired,
}

/// Per-community moderation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunitySettings {
    pub community_did: String,
    pub community_type: Option<CommunityType>,
    pub app_visibility_default: AppVisibilityDefault,
    pub blocked_app_ids: Vec<String>,
}

impl CommunitySettings {
    /// Settings for a community that has never saved any: open membership
    /// and apps allowed by default.
    pub fn defaults(community_did: &str) -> Self {
        Self {
            community_did: community_did.to_owned(),
            community_type: Some(CommunityType::Open),
            app_visibility_default: AppVisibilityDefault::Open,
            blocked_app_ids: Vec::new(),
        }
    }
}

/// Review status of an app within one community.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppVisibilityStatus {
    Enabled,
    Disabled,
    Pending,
}

/// An app's reviewed visibility override in a community.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppVisibility {
    pub app_id: String,
    pub app_name: Option<String>,
    pub app_domain: Option<String>,
    pub status: AppVisibilityStatus,
    /// DID of the admin who reviewed the app, if reviewed.
    pub reviewed_by: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Registry summary of an app, used alongside visibility overrides.
/// The registry speaks snake_case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSummary {
    pub app_id: String,
    pub name: String,
    pub domain: String,
}

/// Collection-level permission override for an app in a community.
/// Permission values are level names (`"member"` or `"admin"`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPermission {
    pub collection: String,
    pub can_create: String,
    pub can_read: String,
    pub can_update: String,
    pub can_delete: String,
}

impl CollectionPermission {
    /// Starting levels for a newly added override, matching the seed used
    /// for app defaults.
    pub fn for_collection(collection: &str) -> Self {
        Self {
            collection: collection.to_owned(),
            can_create: "member".to_owned(),
            can_read: "member".to_owned(),
            can_update: "member".to_owned(),
            can_delete: "admin".to_owned(),
        }
    }

    /// Level name for one operation.
    pub fn level(&self, op: PermissionOp) -> &str {
        match op {
            PermissionOp::Create => &self.can_create,
            PermissionOp::Read => &self.can_read,
            PermissionOp::Update => &self.can_update,
            PermissionOp::Delete => &self.can_delete,
        }
    }

    /// Set one operation's level, leaving the others untouched.
    pub fn set_level(&mut self, op: PermissionOp, level: &str) {
        let slot = match op {
            PermissionOp::Create => &mut self.can_create,
            PermissionOp::Read => &mut self.can_read,
            PermissionOp::Update => &mut self.can_update,
            PermissionOp::Delete => &mut self.can_delete,
        };
        *slot = level.to_owned();
    }
}

/// A custom role defined by a community.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityRole {
    /// Machine name: lowercase, `[a-z0-9_-]` only.
    pub name: String,
    pub display_name: String,
    pub description: Option<String>,
    /// Whether the role badge is shown to all members.
    pub visible: bool,
    /// Whether holders may read the audit log.
    pub can_view_audit_log: bool,
    pub created_at: String,
}

/// One administrative action recorded in a community's audit log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub id: i64,
    /// Dotted action name, e.g. `member.approve`.
    pub action: String,
    pub admin_did: String,
    pub target_did: Option<String>,
    pub reason: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub created_at: String,
}

/// A registered developer app, from `GET /api/v1/apps` (snake_case).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub app_id: String,
    pub name: String,
    pub domain: String,
    pub api_key: String,
    /// `"active"` or `"inactive"`.
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Default collection permissions an app requests at registration time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDefaultPermission {
    pub collection: String,
    pub default_can_create: String,
    pub default_can_read: String,
    pub default_can_update: String,
    pub default_can_delete: String,
}

impl AppDefaultPermission {
    /// Starting levels for a newly added collection: members may create,
    /// read, and update; deletion is admin-only.
    pub fn for_collection(collection: &str) -> Self {
        Self {
            collection: collection.to_owned(),
            default_can_create: "member".to_owned(),
            default_can_read: "member".to_owned(),
            default_can_update: "member".to_owned(),
            default_can_delete: "admin".to_owned(),
        }
    }

    /// Default level name for one operation.
    pub fn level(&self, op: PermissionOp) -> &str {
        match op {
            PermissionOp::Create => &self.default_can_create,
            PermissionOp::Read => &self.default_can_read,
            PermissionOp::Update => &self.default_can_update,
            PermissionOp::Delete => &self.default_can_delete,
        }
    }

    /// Set one operation's default level, leaving the others untouched.
    pub fn set_level(&mut self, op: PermissionOp, level: &str) {
        let slot = match op {
            PermissionOp::Create => &mut self.default_can_create,
            PermissionOp::Read => &mut self.default_can_read,
            PermissionOp::Update => &mut self.default_can_update,
            PermissionOp::Delete => &mut self.default_can_delete,
        };
        *slot = level.to_owned();
    }
}

/// Permission levels assignable to collection operations.
pub const PERMISSION_LEVELS: [&str; 2] = ["member", "admin"];

/// One of the four collection operations a permission level applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionOp {
    Create,
    Read,
    Update,
    Delete,
}

impl PermissionOp {
    pub const ALL: [Self; 4] = [Self::Create, Self::Read, Self::Update, Self::Delete];

    /// Column label shown above the level selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Read => "Read",
            Self::Update => "Update",
            Self::Delete => "Delete",
        }
    }
}

/// Partial update for a community-level collection permission: the
/// collection key plus exactly the field being changed.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionPermissionPatch {
    pub collection: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_create: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_read: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_update: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_delete: Option<String>,
}

impl CollectionPermissionPatch {
    /// Patch setting a single operation's level.
    pub fn for_op(collection: &str, op: PermissionOp, level: &str) -> Self {
        let mut patch = Self {
            collection: collection.to_owned(),
            ..Self::default()
        };
        let slot = match op {
            PermissionOp::Create => &mut patch.can_create,
            PermissionOp::Read => &mut patch.can_read,
            PermissionOp::Update => &mut patch.can_update,
            PermissionOp::Delete => &mut patch.can_delete,
        };
        *slot = Some(level.to_owned());
        patch
    }

    /// Patch carrying every level, used to create an override in one
    /// request.
    pub fn from_full(perm: &CollectionPermission) -> Self {
        Self {
            collection: perm.collection.clone(),
            can_create: Some(perm.can_create.clone()),
            can_read: Some(perm.can_read.clone()),
            can_update: Some(perm.can_update.clone()),
            can_delete: Some(perm.can_delete.clone()),
        }
    }
}

/// Partial update for an app's default collection permission.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDefaultPermissionPatch {
    pub collection: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_can_create: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_can_read: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_can_update: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_can_delete: Option<String>,
}

impl AppDefaultPermissionPatch {
    /// Patch setting a single operation's default level.
    pub fn for_op(collection: &str, op: PermissionOp, level: &str) -> Self {
        let mut patch = Self {
            collection: collection.to_owned(),
            ..Self::default()
        };
        let slot = match op {
            PermissionOp::Create => &mut patch.default_can_create,
            PermissionOp::Read => &mut patch.default_can_read,
            PermissionOp::Update => &mut patch.default_can_update,
            PermissionOp::Delete => &mut patch.default_can_delete,
        };
        *slot = Some(level.to_owned());
        patch
    }
}

/// Body of `POST /users/me/communities`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommunityRequest {
    /// Provisioning mode; this UI always attaches an existing account.
    #[serde(rename = "type")]
    pub source: String,
    pub did: String,
    pub app_password: String,
    pub display_name: String,
    pub description: String,
    pub community_type: CommunityType,
}

impl CreateCommunityRequest {
    /// Request attaching an existing protocol account as a community.
    pub fn existing(did: &str, app_password: &str, display_name: &str, description: &str, require_approval: bool) -> Self {
        Self {
            source: "existing".to_owned(),
            did: did.to_owned(),
            app_password: app_password.to_owned(),
            display_name: display_name.to_owned(),
            description: description.to_owned(),
            community_type: if require_approval {
                CommunityType::AdminApproved
            } else {
                CommunityType::Open
            },
        }
    }
}

/// Body of `POST /api/v1/apps/register`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAppRequest {
    pub name: String,
    pub domain: String,
    /// Collections to seed default permissions for; omitted when empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_permissions: Option<Vec<AppDefaultPermission>>,
}

/// Credentials returned once at registration (snake_case).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegisteredApp {
    pub app_id: String,
    pub name: String,
    pub domain: String,
    pub api_key: String,
}

/// Body of `POST /communities/{did}/roles`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleRequest {
    pub name: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub visible: bool,
    pub can_view_audit_log: bool,
}

/// Partial update for a role's toggles.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_view_audit_log: Option<bool>,
}

/// Body of `PUT /communities/{did}/settings`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub community_type: Option<CommunityType>,
    pub app_visibility_default: AppVisibilityDefault,
    pub blocked_app_ids: Vec<String>,
}

/// `GET /communities/{did}/apps` payload: explicit visibility overrides
/// plus the full registry of active apps to merge them against.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityApps {
    pub apps: Vec<AppVisibility>,
    pub all_apps: Vec<AppSummary>,
}

/// One page of audit log entries plus the cursor for the next page, if
/// more exist.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuditLogPage {
    pub entries: Vec<AuditLogEntry>,
    pub cursor: Option<String>,
}
