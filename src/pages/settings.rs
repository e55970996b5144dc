//! Admin settings for one community: moderation policy, app review,
//! member roles, and the audit log.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached from the community page's Settings link. The shell refuses to
//! render the tabs unless the fetched detail says the viewer is an admin;
//! every backing endpoint re-checks on the server. Each tab owns its data
//! and loads it on first render, so switching tabs shows fresh state.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::empty_state::EmptyState;
use crate::net::types::{
    AppSummary, AppVisibility, AppVisibilityDefault, AppVisibilityStatus, AuditLogEntry,
    CollectionPermission, CommunityDetail, CommunityRole, CommunitySettings, CommunityType,
    PERMISSION_LEVELS, PermissionOp, RolePatch,
};
use crate::util::collections::validate_new_collection;
use crate::util::dialog;
use crate::util::format::display_date;

#[cfg(feature = "hydrate")]
use crate::net::types::{CollectionPermissionPatch, CreateRoleRequest, UpdateSettingsRequest};

/// One section of the settings page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SettingsTab {
    General,
    Apps,
    Roles,
    AuditLog,
}

impl SettingsTab {
    const ALL: [Self; 4] = [Self::General, Self::Apps, Self::Roles, Self::AuditLog];

    fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Apps => "Apps",
            Self::Roles => "Roles",
            Self::AuditLog => "Audit Log",
        }
    }
}

// =============================================================
// Pure helpers
// =============================================================

/// An app as listed on the Apps tab: registry identity plus the
/// community's explicit status, if one has been set.
#[derive(Clone, Debug, PartialEq)]
struct AppRow {
    app_id: String,
    name: String,
    domain: String,
    status: Option<AppVisibilityStatus>,
}

/// Merge the app registry with this community's visibility overrides.
///
/// Registry order is kept; apps that only exist as overrides (registered
/// apps since deactivated) are appended so their status stays editable.
fn merged_app_rows(all: &[AppSummary], overrides: &[AppVisibility]) -> Vec<AppRow> {
    let mut rows: Vec<AppRow> = all
        .iter()
        .map(|app| AppRow {
            app_id: app.app_id.clone(),
            name: app.name.clone(),
            domain: app.domain.clone(),
            status: overrides
                .iter()
                .find(|o| o.app_id == app.app_id)
                .map(|o| o.status),
        })
        .collect();
    for o in overrides {
        if !rows.iter().any(|row| row.app_id == o.app_id) {
            rows.push(AppRow {
                app_id: o.app_id.clone(),
                name: o.app_name.clone().unwrap_or_else(|| o.app_id.clone()),
                domain: o.app_domain.clone().unwrap_or_default(),
                status: Some(o.status),
            });
        }
    }
    rows
}

fn status_label(status: AppVisibilityStatus) -> &'static str {
    match status {
        AppVisibilityStatus::Enabled => "Enabled",
        AppVisibilityStatus::Disabled => "Disabled",
        AppVisibilityStatus::Pending => "Pending review",
    }
}

/// Chip text for apps with no explicit override.
fn default_status_label(default: AppVisibilityDefault) -> &'static str {
    match default {
        AppVisibilityDefault::Open => "Default (allowed)",
        AppVisibilityDefault::ApprovalRequired => "Default (needs approval)",
    }
}

fn type_value(community_type: Option<CommunityType>) -> &'static str {
    match community_type {
        Some(CommunityType::AdminApproved) => "admin-approved",
        Some(CommunityType::Private) => "private",
        Some(CommunityType::Open) | None => "open",
    }
}

fn type_from_value(value: &str) -> CommunityType {
    match value {
        "admin-approved" => CommunityType::AdminApproved,
        "private" => CommunityType::Private,
        _ => CommunityType::Open,
    }
}

fn visibility_value(default: AppVisibilityDefault) -> &'static str {
    match default {
        AppVisibilityDefault::Open => "open",
        AppVisibilityDefault::ApprovalRequired => "approval_required",
    }
}

fn visibility_from_value(value: &str) -> AppVisibilityDefault {
    if value == "approval_required" {
        AppVisibilityDefault::ApprovalRequired
    } else {
        AppVisibilityDefault::Open
    }
}

/// Squash free-form input into a valid role name: lowercase, with
/// whitespace collapsed to hyphens and anything outside `[a-z0-9_-]`
/// dropped.
fn normalize_role_name(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-')
        .collect()
}

/// Render a dotted action name for display.
fn format_audit_action(action: &str) -> String {
    action.replace('.', " › ")
}

// =============================================================
// Shell
// =============================================================

fn fetch_admin_context(
    did: String,
    detail: RwSignal<Option<CommunityDetail>>,
    detail_error: RwSignal<Option<String>>,
    settings: RwSignal<Option<CommunitySettings>>,
    alive: Arc<AtomicBool>,
) {
    #[cfg(feature = "hydrate")]
    {
        let detail_did = did.clone();
        let detail_alive = alive.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_community(&detail_did).await;
            if !detail_alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match result {
                Ok(payload) => detail.set(Some(payload)),
                Err(err) => detail_error.set(Some(err.user_message())),
            }
        });
        leptos::task::spawn_local(async move {
            // Communities that never saved settings have none stored; the
            // form starts from the defaults instead of failing.
            let result = crate::net::api::fetch_community_settings(&did).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match result {
                Ok(payload) => settings.set(Some(payload)),
                Err(_) => settings.set(Some(CommunitySettings::defaults(&did))),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, detail, detail_error, settings, alive);
    }
}

/// Settings shell: loads the admin context, gates on `is_admin`, and
/// dispatches to the selected tab.
#[component]
pub fn CommunitySettingsPage() -> impl IntoView {
    let params = use_params_map();
    let did = move || params.with(|p| p.get("did").unwrap_or_default());

    let tab = RwSignal::new(SettingsTab::General);
    let detail = RwSignal::new(None::<CommunityDetail>);
    let detail_error = RwSignal::new(None::<String>);
    let settings = RwSignal::new(None::<CommunitySettings>);

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let loaded_for = RwSignal::new(None::<String>);
    {
        let alive = alive.clone();
        Effect::new(move || {
            let current = did();
            if current.is_empty() {
                return;
            }
            if loaded_for.get() == Some(current.clone()) {
                return;
            }
            loaded_for.set(Some(current.clone()));
            detail.set(None);
            detail_error.set(None);
            settings.set(None);
            tab.set(SettingsTab::General);
            fetch_admin_context(current, detail, detail_error, settings, alive.clone());
        });
    }

    let body = move || {
        if let Some(d) = detail.get() {
            let did_value = d.community.did.clone();
            let back_href = format!("/communities/{did_value}");
            if !d.is_admin {
                return view! {
                    <section class="settings-page__gate">
                        <h1>"Community Settings"</h1>
                        <p>"Only community admins can manage settings."</p>
                        <a class="settings-page__back" href=back_href>"Back to community"</a>
                    </section>
                }
                .into_any();
            }
            let name = d.community.display_name.clone();
            let tab_bar = SettingsTab::ALL
                .into_iter()
                .map(|entry| {
                    view! {
                        <button
                            class="settings-page__tab"
                            class:is-active=move || tab.get() == entry
                            on:click=move |_| tab.set(entry)
                        >
                            {entry.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>();
            let tab_body = {
                let did_value = did_value.clone();
                move || match tab.get() {
                    SettingsTab::General => {
                        view! { <GeneralTab did=did_value.clone() settings=settings/> }.into_any()
                    }
                    SettingsTab::Apps => {
                        view! { <AppsTab did=did_value.clone() settings=settings/> }.into_any()
                    }
                    SettingsTab::Roles => {
                        view! { <RolesTab did=did_value.clone()/> }.into_any()
                    }
                    SettingsTab::AuditLog => {
                        view! { <AuditTab did=did_value.clone()/> }.into_any()
                    }
                }
            };
            view! {
                <header class="settings-page__header">
                    <h1>"Community Settings"</h1>
                    <p class="settings-page__community">{name}</p>
                    <a class="settings-page__back" href=back_href>
                        "Back to community"
                    </a>
                </header>
                <nav class="settings-page__tabs">{tab_bar}</nav>
                <div class="settings-page__body">{tab_body}</div>
            }
            .into_any()
        } else if let Some(message) = detail_error.get() {
            view! { <p class="settings-page__error">{message}</p> }.into_any()
        } else {
            view! { <p class="settings-page__loading">"Loading settings..."</p> }.into_any()
        }
    };

    view! { <div class="settings-page">{body}</div> }
}

// =============================================================
// General tab
// =============================================================

const TYPE_OPTIONS: [(&str, &str); 3] = [
    ("open", "Open: anyone can join"),
    ("admin-approved", "Admin approval required"),
    ("private", "Private: invite only"),
];

const VISIBILITY_OPTIONS: [(&str, &str); 2] = [
    ("open", "Allowed until disabled"),
    ("approval_required", "Held until an admin approves"),
];

fn save_settings(
    did: String,
    settings: RwSignal<Option<CommunitySettings>>,
    saving: RwSignal<bool>,
    saved: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    alive: Arc<AtomicBool>,
) {
    let Some(current) = settings.get_untracked() else {
        return;
    };
    if saving.get_untracked() {
        return;
    }
    saving.set(true);
    saved.set(false);
    error.set(None);
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            // Blocked app ids ride along unchanged; the Apps tab manages
            // them through the status endpoint.
            let req = UpdateSettingsRequest {
                community_type: current.community_type,
                app_visibility_default: current.app_visibility_default,
                blocked_app_ids: current.blocked_app_ids,
            };
            let result = crate::net::api::update_community_settings(&did, &req).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            saving.set(false);
            match result {
                Ok(()) => saved.set(true),
                Err(err) => error.set(Some(err.user_message())),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, current, alive);
        saving.set(false);
    }
}

#[component]
fn GeneralTab(did: String, settings: RwSignal<Option<CommunitySettings>>) -> impl IntoView {
    let saving = RwSignal::new(false);
    let saved = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_save = {
        let did = did.clone();
        let alive = alive.clone();
        move |_| save_settings(did.clone(), settings, saving, saved, error, alive.clone())
    };

    view! {
        <section class="settings-general">
            <Show
                when=move || settings.with(Option::is_some)
                fallback=|| view! { <p class="settings-page__loading">"Loading settings..."</p> }
            >
                <label class="settings-general__field">
                    "Membership policy"
                    <select
                        class="settings-general__select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            settings
                                .update(|s| {
                                    if let Some(s) = s {
                                        s.community_type = Some(type_from_value(&value));
                                    }
                                });
                            saved.set(false);
                        }
                    >
                        {move || {
                            let current = settings
                                .with(|s| s.as_ref().map_or("open", |s| type_value(s.community_type)));
                            TYPE_OPTIONS
                                .into_iter()
                                .map(|(value, label)| {
                                    view! {
                                        <option value=value selected={value == current}>{label}</option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <label class="settings-general__field">
                    "Unreviewed apps"
                    <select
                        class="settings-general__select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            settings
                                .update(|s| {
                                    if let Some(s) = s {
                                        s.app_visibility_default = visibility_from_value(&value);
                                    }
                                });
                            saved.set(false);
                        }
                    >
                        {move || {
                            let current = settings
                                .with(|s| {
                                    s.as_ref().map_or("open", |s| visibility_value(s.app_visibility_default))
                                });
                            VISIBILITY_OPTIONS
                                .into_iter()
                                .map(|(value, label)| {
                                    view! {
                                        <option value=value selected={value == current}>{label}</option>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </select>
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="settings-general__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || saved.get()>
                    <p class="settings-general__saved">"Settings saved."</p>
                </Show>
                <button
                    class="btn btn--primary"
                    disabled=move || saving.get()
                    on:click=on_save.clone()
                >
                    {move || if saving.get() { "Saving..." } else { "Save Settings" }}
                </button>
            </Show>
        </section>
    }
}

// =============================================================
// Apps tab
// =============================================================

#[derive(Clone, Debug, Default, PartialEq)]
struct AppsTabState {
    overrides: Vec<AppVisibility>,
    registry: Vec<AppSummary>,
    loading: bool,
    error: Option<String>,
    /// App id with a status change in flight, if any.
    busy_app: Option<String>,
}

/// Collection permission overrides for the one expanded app.
#[derive(Clone, Debug, Default, PartialEq)]
struct PermsPanelState {
    rows: Vec<CollectionPermission>,
    loading: bool,
    error: Option<String>,
}

fn load_apps(did: String, state: RwSignal<AppsTabState>, alive: Arc<AtomicBool>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_community_apps(&did).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            state.update(|s| {
                s.loading = false;
                match result {
                    Ok(payload) => {
                        s.overrides = payload.apps;
                        s.registry = payload.all_apps;
                        s.error = None;
                    }
                    Err(err) => s.error = Some(err.user_message()),
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, state, alive);
    }
}

fn set_app_status(
    did: String,
    app_id: String,
    status: AppVisibilityStatus,
    state: RwSignal<AppsTabState>,
    alive: Arc<AtomicBool>,
) {
    #[cfg(feature = "hydrate")]
    {
        state.update(|s| s.busy_app = Some(app_id.clone()));
        leptos::task::spawn_local(async move {
            let result = crate::net::api::set_community_app_status(&did, &app_id, status).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match result {
                Ok(()) => {
                    state.update(|s| {
                        s.busy_app = None;
                        s.loading = true;
                    });
                    load_apps(did, state, alive);
                }
                Err(err) => state.update(|s| {
                    s.busy_app = None;
                    s.error = Some(err.user_message());
                }),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, app_id, status, state, alive);
    }
}

fn load_permissions(
    did: String,
    app_id: String,
    panel: RwSignal<PermsPanelState>,
    alive: Arc<AtomicBool>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_app_permissions(&did, &app_id).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            panel.update(|p| {
                p.loading = false;
                match result {
                    Ok(rows) => {
                        p.rows = rows;
                        p.error = None;
                    }
                    Err(err) => p.error = Some(err.user_message()),
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, app_id, panel, alive);
    }
}

fn push_permission_change(
    did: String,
    app_id: String,
    collection: String,
    op: PermissionOp,
    level: String,
    panel: RwSignal<PermsPanelState>,
    alive: Arc<AtomicBool>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let patch = CollectionPermissionPatch::for_op(&collection, op, &level);
            let result = crate::net::api::update_app_permission(&did, &app_id, &patch).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match result {
                Ok(()) => panel.update(|p| {
                    if let Some(row) = p.rows.iter_mut().find(|r| r.collection == collection) {
                        row.set_level(op, &level);
                    }
                }),
                Err(err) => {
                    // Reload so the selects snap back to the stored levels.
                    panel.update(|p| {
                        p.error = Some(err.user_message());
                        p.loading = true;
                    });
                    load_permissions(did, app_id, panel, alive);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, app_id, collection, op, level, panel, alive);
    }
}

fn create_collection_override(
    did: String,
    app_id: String,
    collection: String,
    panel: RwSignal<PermsPanelState>,
    alive: Arc<AtomicBool>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let row = CollectionPermission::for_collection(&collection);
            let patch = CollectionPermissionPatch::from_full(&row);
            let result = crate::net::api::update_app_permission(&did, &app_id, &patch).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            panel.update(|p| match result {
                Ok(()) => p.rows.push(row),
                Err(err) => p.error = Some(err.user_message()),
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, app_id, collection, panel, alive);
    }
}

fn remove_collection_override(
    did: String,
    app_id: String,
    collection: String,
    panel: RwSignal<PermsPanelState>,
    alive: Arc<AtomicBool>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::remove_app_permission(&did, &app_id, &collection).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            panel.update(|p| match result {
                Ok(()) => p.rows.retain(|r| r.collection != collection),
                Err(err) => p.error = Some(err.user_message()),
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, app_id, collection, panel, alive);
    }
}

#[component]
fn AppsTab(did: String, settings: RwSignal<Option<CommunitySettings>>) -> impl IntoView {
    let state = RwSignal::new(AppsTabState {
        loading: true,
        ..AppsTabState::default()
    });
    let expanded = RwSignal::new(None::<String>);
    let panel = RwSignal::new(PermsPanelState::default());
    let new_collection = RwSignal::new(String::new());
    let collection_error = RwSignal::new(None::<String>);

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let requested = RwSignal::new(false);
    {
        let did = did.clone();
        let alive = alive.clone();
        Effect::new(move || {
            if requested.get() {
                return;
            }
            requested.set(true);
            load_apps(did.clone(), state, alive.clone());
        });
    }

    let rows = {
        let did = did.clone();
        let alive = alive.clone();
        move || {
            if state.with(|s| s.loading) {
                return view! { <p class="settings-page__loading">"Loading apps..."</p> }.into_any();
            }
            let list = state.with(|s| merged_app_rows(&s.registry, &s.overrides));
            if list.is_empty() {
                return view! {
                    <EmptyState
                        title="No apps yet"
                        message="Apps appear here once they register with the network."
                    />
                }
                .into_any();
            }
            let busy = state.with(|s| s.busy_app.clone());
            let default_label = settings.with(|s| {
                s.as_ref().map_or(default_status_label(AppVisibilityDefault::Open), |s| {
                    default_status_label(s.app_visibility_default)
                })
            });
            list.into_iter()
                .map(|row| {
                    let row_id = row.app_id.clone();
                    let row_domain = row.domain.clone();
                    let row_busy = busy.as_deref() == Some(row.app_id.as_str());
                    let pending = row.status == Some(AppVisibilityStatus::Pending);
                    let show_enable = row.status != Some(AppVisibilityStatus::Enabled);
                    let show_disable = row.status != Some(AppVisibilityStatus::Disabled);
                    let status_text = row
                        .status
                        .map_or_else(|| default_label.to_owned(), |s| status_label(s).to_owned());

                    let on_enable = {
                        let did = did.clone();
                        let row_id = row_id.clone();
                        let alive = alive.clone();
                        move |_| {
                            set_app_status(
                                did.clone(),
                                row_id.clone(),
                                AppVisibilityStatus::Enabled,
                                state,
                                alive.clone(),
                            );
                        }
                    };
                    let on_disable = {
                        let did = did.clone();
                        let row_id = row_id.clone();
                        let alive = alive.clone();
                        move |_| {
                            set_app_status(
                                did.clone(),
                                row_id.clone(),
                                AppVisibilityStatus::Disabled,
                                state,
                                alive.clone(),
                            );
                        }
                    };
                    let on_toggle = {
                        let did = did.clone();
                        let row_id = row_id.clone();
                        let alive = alive.clone();
                        move |_| {
                            if expanded.get().as_deref() == Some(row_id.as_str()) {
                                expanded.set(None);
                                return;
                            }
                            expanded.set(Some(row_id.clone()));
                            new_collection.set(String::new());
                            collection_error.set(None);
                            panel.set(PermsPanelState {
                                loading: true,
                                ..PermsPanelState::default()
                            });
                            load_permissions(did.clone(), row_id.clone(), panel, alive.clone());
                        }
                    };
                    let perms_panel = {
                        let did = did.clone();
                        let app_id = row_id.clone();
                        let domain = row_domain.clone();
                        let alive = alive.clone();
                        move || {
                            (expanded.get().as_deref() == Some(app_id.as_str())).then(|| {
                                permissions_panel(
                                    did.clone(),
                                    app_id.clone(),
                                    domain.clone(),
                                    panel,
                                    new_collection,
                                    collection_error,
                                    alive.clone(),
                                )
                            })
                        }
                    };

                    view! {
                        <div class="settings-apps__row">
                            <div class="settings-apps__head">
                                <div class="settings-apps__identity">
                                    <span class="settings-apps__name">{row.name.clone()}</span>
                                    <span class="settings-apps__domain">{row.domain.clone()}</span>
                                </div>
                                <span class="chip chip--status">{status_text}</span>
                                <div class="settings-apps__actions">
                                    {show_enable
                                        .then(|| {
                                            let label = if pending { "Approve" } else { "Enable" };
                                            view! {
                                                <button
                                                    class="btn btn--small"
                                                    disabled=row_busy
                                                    on:click=on_enable
                                                >
                                                    {label}
                                                </button>
                                            }
                                        })}
                                    {show_disable
                                        .then(|| {
                                            view! {
                                                <button
                                                    class="btn btn--small"
                                                    disabled=row_busy
                                                    on:click=on_disable
                                                >
                                                    "Disable"
                                                </button>
                                            }
                                        })}
                                    <button class="btn btn--small" on:click=on_toggle>
                                        "Permissions"
                                    </button>
                                </div>
                            </div>
                            {perms_panel}
                        </div>
                    }
                })
                .collect::<Vec<_>>()
                .into_any()
        }
    };

    view! {
        <section class="settings-apps">
            {move || {
                state
                    .with(|s| s.error.clone())
                    .map(|message| view! { <p class="settings-apps__error">{message}</p> })
            }}
            {rows}
        </section>
    }
}

/// Expanded per-app panel: the collection permission grid plus the
/// add-collection form.
fn permissions_panel(
    did: String,
    app_id: String,
    domain: String,
    panel: RwSignal<PermsPanelState>,
    new_collection: RwSignal<String>,
    collection_error: RwSignal<Option<String>>,
    alive: Arc<AtomicBool>,
) -> impl IntoView {
    let grid = {
        let did = did.clone();
        let app_id = app_id.clone();
        let alive = alive.clone();
        move || {
            panel
                .with(|p| p.rows.clone())
                .into_iter()
                .map(|perm| {
                    let collection = perm.collection.clone();
                    let op_selects = PermissionOp::ALL
                        .into_iter()
                        .map(|op| {
                            let current = perm.level(op).to_owned();
                            let did = did.clone();
                            let app_id = app_id.clone();
                            let collection = collection.clone();
                            let alive = alive.clone();
                            view! {
                                <label class="settings-apps__perm">
                                    {op.label()}
                                    <select
                                        class="settings-apps__perm-select"
                                        on:change=move |ev| {
                                            push_permission_change(
                                                did.clone(),
                                                app_id.clone(),
                                                collection.clone(),
                                                op,
                                                event_target_value(&ev),
                                                panel,
                                                alive.clone(),
                                            );
                                        }
                                    >
                                        {PERMISSION_LEVELS
                                            .iter()
                                            .map(|level| {
                                                let level = *level;
                                                view! {
                                                    <option value=level selected={level == current}>
                                                        {level}
                                                    </option>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </select>
                                </label>
                            }
                        })
                        .collect::<Vec<_>>();
                    let on_remove = {
                        let did = did.clone();
                        let app_id = app_id.clone();
                        let collection = collection.clone();
                        let alive = alive.clone();
                        move |_| {
                            let prompt = format!(
                                "Remove the override for {collection}? The app's defaults will apply."
                            );
                            if !dialog::confirm(&prompt) {
                                return;
                            }
                            remove_collection_override(
                                did.clone(),
                                app_id.clone(),
                                collection.clone(),
                                panel,
                                alive.clone(),
                            );
                        }
                    };
                    view! {
                        <div class="settings-apps__collection">
                            <div class="settings-apps__collection-head">
                                <code class="settings-apps__collection-name">{collection.clone()}</code>
                                <button class="btn btn--small" on:click=on_remove>
                                    "Remove"
                                </button>
                            </div>
                            <div class="settings-apps__perm-grid">{op_selects}</div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()
        }
    };

    let on_add = {
        let alive = alive.clone();
        move |_: ()| {
            let candidate = new_collection.get();
            let existing =
                panel.with(|p| p.rows.iter().map(|r| r.collection.clone()).collect::<Vec<_>>());
            match validate_new_collection(&candidate, &domain, &existing) {
                Ok(name) => {
                    collection_error.set(None);
                    new_collection.set(String::new());
                    create_collection_override(
                        did.clone(),
                        app_id.clone(),
                        name,
                        panel,
                        alive.clone(),
                    );
                }
                Err(message) => collection_error.set(Some(message)),
            }
        }
    };

    view! {
        <div class="settings-apps__perms">
            <Show
                when=move || !panel.with(|p| p.loading)
                fallback=|| view! { <p class="settings-page__loading">"Loading permissions..."</p> }
            >
                <Show when=move || panel.with(|p| p.error.is_some())>
                    <p class="settings-apps__error">
                        {move || panel.with(|p| p.error.clone()).unwrap_or_default()}
                    </p>
                </Show>
                {grid.clone()}
                <div class="settings-apps__collection-add">
                    <input
                        class="settings-apps__input"
                        type="text"
                        placeholder="com.example.myapp.post"
                        prop:value=move || new_collection.get()
                        on:input=move |ev| new_collection.set(event_target_value(&ev))
                        on:keydown={
                            let on_add = on_add.clone();
                            move |ev: leptos::ev::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    on_add(());
                                }
                            }
                        }
                    />
                    <button
                        class="btn"
                        on:click={
                            let on_add = on_add.clone();
                            move |_| on_add(())
                        }
                    >
                        "Add"
                    </button>
                </div>
                <Show when=move || collection_error.get().is_some()>
                    <p class="settings-apps__error">
                        {move || collection_error.get().unwrap_or_default()}
                    </p>
                </Show>
            </Show>
        </div>
    }
}

// =============================================================
// Roles tab
// =============================================================

#[derive(Clone, Debug, Default, PartialEq)]
struct RolesTabState {
    roles: Vec<CommunityRole>,
    loading: bool,
    error: Option<String>,
}

fn load_roles(did: String, state: RwSignal<RolesTabState>, alive: Arc<AtomicBool>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_community_roles(&did).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            state.update(|s| {
                s.loading = false;
                match result {
                    Ok(roles) => {
                        s.roles = roles;
                        s.error = None;
                    }
                    Err(err) => s.error = Some(err.user_message()),
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, state, alive);
    }
}

fn push_role_toggle(
    did: String,
    name: String,
    patch: RolePatch,
    state: RwSignal<RolesTabState>,
    alive: Arc<AtomicBool>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::update_community_role(&did, &name, patch).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match result {
                Ok(()) => state.update(|s| {
                    if let Some(role) = s.roles.iter_mut().find(|r| r.name == name) {
                        if let Some(visible) = patch.visible {
                            role.visible = visible;
                        }
                        if let Some(audit) = patch.can_view_audit_log {
                            role.can_view_audit_log = audit;
                        }
                    }
                }),
                Err(err) => {
                    // Reload so the checkboxes snap back to the stored flags.
                    state.update(|s| {
                        s.error = Some(err.user_message());
                        s.loading = true;
                    });
                    load_roles(did, state, alive);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, name, patch, state, alive);
    }
}

fn remove_role(did: String, name: String, state: RwSignal<RolesTabState>, alive: Arc<AtomicBool>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_community_role(&did, &name).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            state.update(|s| match result {
                Ok(()) => s.roles.retain(|r| r.name != name),
                Err(err) => s.error = Some(err.user_message()),
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, name, state, alive);
    }
}

#[component]
fn RolesTab(did: String) -> impl IntoView {
    let state = RwSignal::new(RolesTabState {
        loading: true,
        ..RolesTabState::default()
    });
    let display_input = RwSignal::new(String::new());
    let name_input = RwSignal::new(String::new());
    let description_input = RwSignal::new(String::new());
    let visible_input = RwSignal::new(true);
    let audit_input = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let create_error = RwSignal::new(None::<String>);

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let requested = RwSignal::new(false);
    {
        let did = did.clone();
        let alive = alive.clone();
        Effect::new(move || {
            if requested.get() {
                return;
            }
            requested.set(true);
            load_roles(did.clone(), state, alive.clone());
        });
    }

    let submit = {
        let did = did.clone();
        let alive = alive.clone();
        Callback::new(move |()| {
            if busy.get() {
                return;
            }
            let display = display_input.get().trim().to_owned();
            let name = normalize_role_name(&name_input.get());
            if display.is_empty() || name.is_empty() {
                create_error.set(Some("Name and display name are required".to_owned()));
                return;
            }
            busy.set(true);
            create_error.set(None);
            #[cfg(feature = "hydrate")]
            {
                let did = did.clone();
                let alive = alive.clone();
                leptos::task::spawn_local(async move {
                    let description = description_input.get_untracked().trim().to_owned();
                    let req = CreateRoleRequest {
                        name,
                        display_name: display,
                        description: if description.is_empty() { None } else { Some(description) },
                        visible: visible_input.get_untracked(),
                        can_view_audit_log: audit_input.get_untracked(),
                    };
                    let result = crate::net::api::create_community_role(&did, &req).await;
                    if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                        return;
                    }
                    busy.set(false);
                    match result {
                        Ok(()) => {
                            display_input.set(String::new());
                            name_input.set(String::new());
                            description_input.set(String::new());
                            visible_input.set(true);
                            audit_input.set(false);
                            state.update(|s| s.loading = true);
                            load_roles(did, state, alive);
                        }
                        Err(err) => create_error.set(Some(err.user_message())),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (display, name, &did, &alive);
                busy.set(false);
            }
        })
    };

    let rows = {
        let did = did.clone();
        let alive = alive.clone();
        move || {
            if state.with(|s| s.loading) {
                return view! { <p class="settings-page__loading">"Loading roles..."</p> }.into_any();
            }
            let roles = state.with(|s| s.roles.clone());
            if roles.is_empty() {
                return view! {
                    <EmptyState
                        title="No roles yet"
                        message="Create a role to group members and grant audit access."
                    />
                }
                .into_any();
            }
            roles
                .into_iter()
                .map(|role| {
                    let on_visible = {
                        let did = did.clone();
                        let name = role.name.clone();
                        let alive = alive.clone();
                        move |ev: leptos::ev::Event| {
                            let patch = RolePatch {
                                visible: Some(event_target_checked(&ev)),
                                ..RolePatch::default()
                            };
                            push_role_toggle(did.clone(), name.clone(), patch, state, alive.clone());
                        }
                    };
                    let on_audit = {
                        let did = did.clone();
                        let name = role.name.clone();
                        let alive = alive.clone();
                        move |ev: leptos::ev::Event| {
                            let patch = RolePatch {
                                can_view_audit_log: Some(event_target_checked(&ev)),
                                ..RolePatch::default()
                            };
                            push_role_toggle(did.clone(), name.clone(), patch, state, alive.clone());
                        }
                    };
                    let on_delete = {
                        let did = did.clone();
                        let name = role.name.clone();
                        let display = role.display_name.clone();
                        let alive = alive.clone();
                        move |_| {
                            let prompt = format!(
                                "Delete role \"{display}\"? All assignments will be removed."
                            );
                            if !dialog::confirm(&prompt) {
                                return;
                            }
                            remove_role(did.clone(), name.clone(), state, alive.clone());
                        }
                    };
                    view! {
                        <div class="settings-roles__row">
                            <div class="settings-roles__identity">
                                <span class="settings-roles__display">{role.display_name.clone()}</span>
                                <code class="settings-roles__name">{role.name.clone()}</code>
                                {role
                                    .description
                                    .clone()
                                    .map(|d| view! { <p class="settings-roles__description">{d}</p> })}
                            </div>
                            <label class="settings-roles__toggle">
                                <input type="checkbox" prop:checked=role.visible on:change=on_visible/>
                                "Visible to members"
                            </label>
                            <label class="settings-roles__toggle">
                                <input
                                    type="checkbox"
                                    prop:checked=role.can_view_audit_log
                                    on:change=on_audit
                                />
                                "Can view audit log"
                            </label>
                            <button class="btn btn--small settings-roles__delete" on:click=on_delete>
                                "Delete"
                            </button>
                        </div>
                    }
                })
                .collect::<Vec<_>>()
                .into_any()
        }
    };

    view! {
        <section class="settings-roles">
            {move || {
                state
                    .with(|s| s.error.clone())
                    .map(|message| view! { <p class="settings-roles__error">{message}</p> })
            }}
            {rows}
            <div class="settings-roles__create">
                <span class="settings-roles__create-title">"Create Role"</span>
                <label class="settings-roles__field">
                    "Display Name"
                    <input
                        class="settings-roles__input"
                        type="text"
                        placeholder="Event Host"
                        prop:value=move || display_input.get()
                        on:input=move |ev| display_input.set(event_target_value(&ev))
                    />
                </label>
                <label class="settings-roles__field">
                    "Name"
                    <input
                        class="settings-roles__input"
                        type="text"
                        placeholder="event-host"
                        prop:value=move || name_input.get()
                        on:input=move |ev| {
                            name_input.set(normalize_role_name(&event_target_value(&ev)));
                        }
                    />
                </label>
                <label class="settings-roles__field">
                    "Description"
                    <input
                        class="settings-roles__input"
                        type="text"
                        prop:value=move || description_input.get()
                        on:input=move |ev| description_input.set(event_target_value(&ev))
                    />
                </label>
                <label class="settings-roles__toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || visible_input.get()
                        on:change=move |ev| visible_input.set(event_target_checked(&ev))
                    />
                    "Visible to members"
                </label>
                <label class="settings-roles__toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || audit_input.get()
                        on:change=move |ev| audit_input.set(event_target_checked(&ev))
                    />
                    "Can view audit log"
                </label>
                <Show when=move || create_error.get().is_some()>
                    <p class="settings-roles__error">
                        {move || create_error.get().unwrap_or_default()}
                    </p>
                </Show>
                <button
                    class="btn btn--primary"
                    disabled=move || busy.get()
                    on:click=move |_| submit.run(())
                >
                    {move || if busy.get() { "Creating..." } else { "Create Role" }}
                </button>
            </div>
        </section>
    }
}

// =============================================================
// Audit tab
// =============================================================

#[derive(Clone, Debug, Default, PartialEq)]
struct AuditTabState {
    /// None until the access check answers.
    allowed: Option<bool>,
    entries: Vec<AuditLogEntry>,
    cursor: Option<String>,
    loading: bool,
    loading_more: bool,
    error: Option<String>,
}

fn load_audit_head(did: String, state: RwSignal<AuditTabState>, alive: Arc<AtomicBool>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let can = crate::net::api::fetch_audit_log_access(&did).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            state.update(|s| {
                s.allowed = Some(can);
                if !can {
                    s.loading = false;
                }
            });
            if !can {
                return;
            }
            let result = crate::net::api::fetch_audit_log(&did, None).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            state.update(|s| {
                s.loading = false;
                match result {
                    Ok(page) => {
                        s.entries = page.entries;
                        s.cursor = page.cursor;
                    }
                    Err(err) => s.error = Some(err.user_message()),
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, state, alive);
    }
}

fn load_audit_more(did: String, state: RwSignal<AuditTabState>, alive: Arc<AtomicBool>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(cursor) = state.with_untracked(|s| s.cursor.clone()) else {
            return;
        };
        if state.with_untracked(|s| s.loading_more) {
            return;
        }
        state.update(|s| s.loading_more = true);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_audit_log(&did, Some(&cursor)).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            state.update(|s| {
                s.loading_more = false;
                match result {
                    Ok(page) => {
                        s.entries.extend(page.entries);
                        s.cursor = page.cursor;
                    }
                    Err(err) => s.error = Some(err.user_message()),
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, state, alive);
    }
}

#[component]
fn AuditTab(did: String) -> impl IntoView {
    let state = RwSignal::new(AuditTabState {
        loading: true,
        ..AuditTabState::default()
    });

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let requested = RwSignal::new(false);
    {
        let did = did.clone();
        let alive = alive.clone();
        Effect::new(move || {
            if requested.get() {
                return;
            }
            requested.set(true);
            load_audit_head(did.clone(), state, alive.clone());
        });
    }

    let body = {
        let did = did.clone();
        let alive = alive.clone();
        move || match state.with(|s| (s.allowed, s.loading)) {
            (None, _) | (Some(true), true) => {
                view! { <p class="settings-page__loading">"Loading audit log..."</p> }.into_any()
            }
            (Some(false), _) => view! {
                <p class="settings-audit__denied">
                    "You do not have permission to view the audit log."
                </p>
            }
            .into_any(),
            (Some(true), false) => {
                let entries = state.with(|s| s.entries.clone());
                let error = state.with(|s| s.error.clone());
                let has_more = state.with(|s| s.cursor.is_some());
                let loading_more = state.with(|s| s.loading_more);
                let more = has_more.then(|| {
                    let did = did.clone();
                    let alive = alive.clone();
                    view! {
                        <button
                            class="btn settings-audit__more"
                            disabled=loading_more
                            on:click=move |_| load_audit_more(did.clone(), state, alive.clone())
                        >
                            {if loading_more { "Loading..." } else { "Load More" }}
                        </button>
                    }
                });
                let list = if entries.is_empty() {
                    view! {
                        <EmptyState
                            title="No activity yet"
                            message="Administrative actions will appear here."
                        />
                    }
                    .into_any()
                } else {
                    view! {
                        <ul class="settings-audit__list">
                            {entries
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <li class="settings-audit__entry">
                                            <div class="settings-audit__summary">
                                                <span class="settings-audit__action">
                                                    {format_audit_action(&entry.action)}
                                                </span>
                                                <span class="settings-audit__date">
                                                    {display_date(&entry.created_at)}
                                                </span>
                                            </div>
                                            <div class="settings-audit__detail">
                                                <span class="settings-audit__admin">
                                                    {entry.admin_did.clone()}
                                                </span>
                                                {entry
                                                    .target_did
                                                    .clone()
                                                    .map(|target| {
                                                        view! {
                                                            <span class="settings-audit__target">{target}</span>
                                                        }
                                                    })}
                                            </div>
                                            {entry
                                                .reason
                                                .clone()
                                                .map(|reason| {
                                                    view! {
                                                        <p class="settings-audit__reason">{reason}</p>
                                                    }
                                                })}
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                    .into_any()
                };
                view! {
                    {error.map(|message| view! { <p class="settings-audit__error">{message}</p> })}
                    {list}
                    {more}
                }
                .into_any()
            }
        }
    };

    view! { <section class="settings-audit">{body}</section> }
}
