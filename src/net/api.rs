//! REST API client for the OpenSocial backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with session
//! cookies included on every request and a CSRF token header attached to
//! every mutating one. Server-side (SSR): stubs, since these endpoints are
//! only meaningful in the browser.
//!
//! The backend origin is baked in at compile time via `OPENSOCIAL_API_URL`;
//! when unset, paths stay relative and the dev server proxy handles them.
//!
//! ERROR HANDLING
//! ==============
//! Failures surface as [`ApiError`]. Callers render `user_message()` inline
//! rather than panicking, so an unreachable backend degrades to error text
//! instead of breaking hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    AppDefaultPermission, AppDefaultPermissionPatch, AppInfo, AppVisibilityStatus, AuditLogPage,
    CollectionPermission, CollectionPermissionPatch, CommunityApps, CommunityDetail,
    CommunityRole, CommunitySettings, CreateCommunityRequest, CreateRoleRequest, JoinResponse,
    Member, Membership, RegisterAppRequest, RegisteredApp, RolePatch, UpdateSettingsRequest, User,
};

/// Compile-time override for the backend origin. Unset in development,
/// where the dev server proxies API paths to the backend on one origin.
const API_BASE: Option<&str> = option_env!("OPENSOCIAL_API_URL");

/// Audit log page size requested per fetch.
#[cfg(any(test, feature = "hydrate"))]
const AUDIT_PAGE_SIZE: u32 = 25;

fn join_base(base: Option<&str>, path: &str) -> String {
    match base {
        Some(origin) if !origin.is_empty() => {
            let origin = origin.strip_suffix('/').unwrap_or(origin);
            format!("{origin}{path}")
        }
        _ => path.to_owned(),
    }
}

/// Absolute (or proxy-relative) URL for an API path. Also used for plain
/// HTML form actions that must post to the backend directly.
pub fn api_url(path: &str) -> String {
    join_base(API_BASE, path)
}

// =============================================================
// Endpoint paths
// =============================================================

#[cfg(any(test, feature = "hydrate"))]
fn community_endpoint(did: &str) -> String {
    format!("/communities/{did}")
}

#[cfg(any(test, feature = "hydrate"))]
fn community_join_endpoint(did: &str) -> String {
    format!("/communities/{did}/join")
}

#[cfg(any(test, feature = "hydrate"))]
fn community_members_endpoint(did: &str) -> String {
    format!("/communities/{did}/members")
}

#[cfg(any(test, feature = "hydrate"))]
fn community_avatar_endpoint(did: &str) -> String {
    format!("/communities/{did}/avatar")
}

#[cfg(any(test, feature = "hydrate"))]
fn community_settings_endpoint(did: &str) -> String {
    format!("/communities/{did}/settings")
}

#[cfg(any(test, feature = "hydrate"))]
fn community_apps_endpoint(did: &str) -> String {
    format!("/communities/{did}/apps")
}

#[cfg(any(test, feature = "hydrate"))]
fn community_app_endpoint(did: &str, app_id: &str) -> String {
    format!("/communities/{did}/apps/{app_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn community_app_permissions_endpoint(did: &str, app_id: &str) -> String {
    format!("/communities/{did}/apps/{app_id}/permissions")
}

#[cfg(any(test, feature = "hydrate"))]
fn community_roles_endpoint(did: &str) -> String {
    format!("/communities/{did}/roles")
}

#[cfg(any(test, feature = "hydrate"))]
fn community_role_endpoint(did: &str, name: &str) -> String {
    format!("/communities/{did}/roles/{name}")
}

#[cfg(any(test, feature = "hydrate"))]
fn audit_log_endpoint(did: &str, cursor: Option<&str>) -> String {
    let base = format!("/communities/{did}/audit-log?limit={AUDIT_PAGE_SIZE}");
    match cursor {
        Some(cursor) => format!("{base}&cursor={}", urlencoding::encode(cursor)),
        None => base,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn audit_log_access_endpoint(did: &str) -> String {
    format!("/communities/{did}/audit-log/access")
}

#[cfg(any(test, feature = "hydrate"))]
fn registered_app_endpoint(app_id: &str) -> String {
    format!("/api/v1/apps/{app_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn rotate_key_endpoint(app_id: &str) -> String {
    format!("/api/v1/apps/{app_id}/rotate-key")
}

#[cfg(any(test, feature = "hydrate"))]
fn app_default_permissions_endpoint(app_id: &str) -> String {
    format!("/api/v1/apps/{app_id}/default-permissions")
}

// =============================================================
// Request plumbing
// =============================================================

/// Request builder with session cookies included and, for mutating
/// methods, the CSRF token header attached.
#[cfg(feature = "hydrate")]
fn builder(method: &str, path: &str) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;

    let url = api_url(path);
    let builder = match method {
        "POST" => Request::post(&url),
        "PUT" => Request::put(&url),
        "DELETE" => Request::delete(&url),
        _ => Request::get(&url),
    };
    let builder = builder.credentials(web_sys::RequestCredentials::Include);
    if crate::util::csrf::method_requires_token(method) {
        if let Some(token) = crate::util::csrf::read_token() {
            return builder.header(crate::util::csrf::CSRF_HEADER, &token);
        }
    }
    builder
}

#[cfg(feature = "hydrate")]
async fn check(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: Option<String>,
    }
    // Error bodies are `{ "error": "..." }` when the server has something
    // to say; anything else falls back to a status-only message.
    let message = resp.json::<ErrorBody>().await.ok().and_then(|body| body.error);
    Err(ApiError::Status { status, message })
}

#[cfg(feature = "hydrate")]
async fn send(builder: gloo_net::http::RequestBuilder) -> Result<gloo_net::http::Response, ApiError> {
    let resp = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(resp).await
}

#[cfg(feature = "hydrate")]
async fn send_json<B>(
    builder: gloo_net::http::RequestBuilder,
    body: &B,
) -> Result<gloo_net::http::Response, ApiError>
where
    B: serde::Serialize + ?Sized,
{
    let request = builder
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(resp).await
}

#[cfg(feature = "hydrate")]
async fn decode<T>(resp: gloo_net::http::Response) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================
// Session
// =============================================================

/// Fetch the currently authenticated user from `/users/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = builder("GET", "/users/me").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// End the session via `POST /logout`. Best effort; the caller clears
/// local session state regardless.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = send(builder("POST", "/logout")).await;
    }
}

// =============================================================
// Communities
// =============================================================

/// Fetch the signed-in user's community memberships.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn fetch_memberships() -> Result<Vec<Membership>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Body {
            memberships: Vec<Membership>,
        }
        let resp = send(builder("GET", "/users/me/communities")).await?;
        let body: Body = decode(resp).await?;
        Ok(body.memberships)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Attach an existing protocol account as a new community.
///
/// # Errors
///
/// Returns an error if provisioning fails; the server message names the
/// reason (bad credentials, already attached, ...).
pub async fn create_community(req: &CreateCommunityRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(builder("POST", "/users/me/communities"), req).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch one community's profile plus the caller's standing in it.
///
/// # Errors
///
/// Returns an error if the community is unknown or the request fails.
pub async fn fetch_community(did: &str) -> Result<CommunityDetail, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(builder("GET", &community_endpoint(did))).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = did;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch a community's member list.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn fetch_community_members(did: &str) -> Result<Vec<Member>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Body {
            members: Vec<Member>,
        }
        let resp = send(builder("GET", &community_members_endpoint(did))).await?;
        let body: Body = decode(resp).await?;
        Ok(body.members)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = did;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Ask to join a community. The response status distinguishes an
/// immediate join from a pending approval request.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn join_community(did: &str) -> Result<JoinResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(builder("POST", &community_join_endpoint(did))).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = did;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Upload a community avatar image as multipart form data.
///
/// # Errors
///
/// Returns an error if the form cannot be assembled or the server
/// rejects the upload.
#[cfg(feature = "hydrate")]
pub async fn upload_community_avatar(did: &str, file: &web_sys::File) -> Result<(), ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("could not assemble upload form".to_owned()))?;
    form.append_with_blob("avatar", file)
        .map_err(|_| ApiError::Network("could not assemble upload form".to_owned()))?;
    let request = builder("POST", &community_avatar_endpoint(did))
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(resp).await?;
    Ok(())
}

// =============================================================
// Community settings
// =============================================================

/// Fetch a community's settings document.
///
/// # Errors
///
/// Returns an error if the request fails; callers typically fall back to
/// defaults for communities that have never saved settings.
pub async fn fetch_community_settings(did: &str) -> Result<CommunitySettings, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Body {
            settings: CommunitySettings,
        }
        let resp = send(builder("GET", &community_settings_endpoint(did))).await?;
        let body: Body = decode(resp).await?;
        Ok(body.settings)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = did;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Save a community's settings document.
///
/// # Errors
///
/// Returns an error if the request fails or the caller is not an admin.
pub async fn update_community_settings(
    did: &str,
    req: &UpdateSettingsRequest,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(builder("PUT", &community_settings_endpoint(did)), req).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, req);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch per-community app visibility overrides plus the app registry
/// they apply to.
///
/// # Errors
///
/// Returns an error if the request fails or the caller is not an admin.
pub async fn fetch_community_apps(did: &str) -> Result<CommunityApps, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(builder("GET", &community_apps_endpoint(did))).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = did;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Set one app's visibility status within a community.
///
/// # Errors
///
/// Returns an error if the request fails or the caller is not an admin.
pub async fn set_community_app_status(
    did: &str,
    app_id: &str,
    status: AppVisibilityStatus,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "status": status });
        send_json(builder("PUT", &community_app_endpoint(did, app_id)), &payload).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, app_id, status);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch an app's per-community collection permission overrides.
///
/// # Errors
///
/// Returns an error if the request fails or the caller is not an admin.
pub async fn fetch_app_permissions(
    did: &str,
    app_id: &str,
) -> Result<Vec<CollectionPermission>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Body {
            permissions: Vec<CollectionPermission>,
        }
        let resp = send(builder("GET", &community_app_permissions_endpoint(did, app_id))).await?;
        let body: Body = decode(resp).await?;
        Ok(body.permissions)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, app_id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Change one permission level for one collection of one app.
///
/// # Errors
///
/// Returns an error if the request fails or the caller is not an admin.
pub async fn update_app_permission(
    did: &str,
    app_id: &str,
    patch: &CollectionPermissionPatch,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(builder("PUT", &community_app_permissions_endpoint(did, app_id)), patch).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, app_id, patch);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Drop a collection's permission override, reverting it to the app's
/// defaults.
///
/// # Errors
///
/// Returns an error if the request fails or the caller is not an admin.
pub async fn remove_app_permission(
    did: &str,
    app_id: &str,
    collection: &str,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "collection": collection });
        send_json(
            builder("DELETE", &community_app_permissions_endpoint(did, app_id)),
            &payload,
        )
        .await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, app_id, collection);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch a community's member roles.
///
/// # Errors
///
/// Returns an error if the request fails or the caller is not an admin.
pub async fn fetch_community_roles(did: &str) -> Result<Vec<CommunityRole>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Body {
            roles: Vec<CommunityRole>,
        }
        let resp = send(builder("GET", &community_roles_endpoint(did))).await?;
        let body: Body = decode(resp).await?;
        Ok(body.roles)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = did;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create a member role.
///
/// # Errors
///
/// Returns an error if the request fails; the server message names the
/// reason (duplicate name, reserved name, ...).
pub async fn create_community_role(did: &str, req: &CreateRoleRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(builder("POST", &community_roles_endpoint(did)), req).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, req);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Toggle a role's flags.
///
/// # Errors
///
/// Returns an error if the request fails or the caller is not an admin.
pub async fn update_community_role(did: &str, name: &str, patch: RolePatch) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(builder("PUT", &community_role_endpoint(did, name)), &patch).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, name, patch);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Delete a role and all of its assignments.
///
/// # Errors
///
/// Returns an error if the request fails or the caller is not an admin.
pub async fn delete_community_role(did: &str, name: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(builder("DELETE", &community_role_endpoint(did, name))).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, name);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch one page of the community's audit log.
///
/// # Errors
///
/// Returns an error if the request fails or the caller may not view the
/// log.
pub async fn fetch_audit_log(did: &str, cursor: Option<&str>) -> Result<AuditLogPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = send(builder("GET", &audit_log_endpoint(did, cursor))).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, cursor);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Whether the caller may view the community's audit log. Treats any
/// failure as "no".
pub async fn fetch_audit_log_access(did: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Body {
            can_view_audit_log: bool,
        }
        let Ok(resp) = send(builder("GET", &audit_log_access_endpoint(did))).await else {
            return false;
        };
        decode::<Body>(resp)
            .await
            .map(|body| body.can_view_audit_log)
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = did;
        false
    }
}

// =============================================================
// App registry
// =============================================================

/// Fetch the apps registered by the signed-in developer.
///
/// # Errors
///
/// Returns an error if the request fails; a 401 means the caller is not
/// signed in.
pub async fn fetch_registered_apps() -> Result<Vec<AppInfo>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Body {
            apps: Vec<AppInfo>,
        }
        let resp = send(builder("GET", "/api/v1/apps")).await?;
        let body: Body = decode(resp).await?;
        Ok(body.apps)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Register a new app. The returned credentials include the API key,
/// shown exactly once.
///
/// # Errors
///
/// Returns an error if the request fails; the server message names the
/// reason (duplicate domain, invalid domain, ...).
pub async fn register_app(req: &RegisterAppRequest) -> Result<RegisteredApp, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Body {
            app: RegisteredApp,
        }
        let resp = send_json(builder("POST", "/api/v1/apps/register"), req).await?;
        let body: Body = decode(resp).await?;
        Ok(body.app)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Rotate an app's API key, returning the replacement key.
///
/// # Errors
///
/// Returns an error if the request fails or the app is not the caller's.
pub async fn rotate_app_key(app_id: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Body {
            api_key: String,
        }
        let resp = send(builder("POST", &rotate_key_endpoint(app_id))).await?;
        let body: Body = decode(resp).await?;
        Ok(body.api_key)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = app_id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Deactivate an app, invalidating its API key.
///
/// # Errors
///
/// Returns an error if the request fails or the app is not the caller's.
pub async fn deactivate_app(app_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(builder("DELETE", &registered_app_endpoint(app_id))).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = app_id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch an app's default collection permissions.
///
/// # Errors
///
/// Returns an error if the request fails; a 404 means none are defined
/// yet and callers treat it as an empty list.
pub async fn fetch_app_default_permissions(
    app_id: &str,
) -> Result<Vec<AppDefaultPermission>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct Body {
            permissions: Vec<AppDefaultPermission>,
        }
        let resp = send(builder("GET", &app_default_permissions_endpoint(app_id))).await?;
        let body: Body = decode(resp).await?;
        Ok(body.permissions)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = app_id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Add a default permission row for a new collection.
///
/// # Errors
///
/// Returns an error if the request fails or the app is not the caller's.
pub async fn add_app_default_permission(
    app_id: &str,
    permission: &AppDefaultPermission,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(builder("POST", &app_default_permissions_endpoint(app_id)), permission).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (app_id, permission);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Change one default permission level for one collection.
///
/// # Errors
///
/// Returns an error if the request fails or the app is not the caller's.
pub async fn update_app_default_permission(
    app_id: &str,
    patch: &AppDefaultPermissionPatch,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_json(builder("PUT", &app_default_permissions_endpoint(app_id)), patch).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (app_id, patch);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Remove a collection's default permission row.
///
/// # Errors
///
/// Returns an error if the request fails or the app is not the caller's.
pub async fn remove_app_default_permission(app_id: &str, collection: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "collection": collection });
        send_json(builder("DELETE", &app_default_permissions_endpoint(app_id)), &payload).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (app_id, collection);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
