//! Developer app registry: the caller's registered apps and their
//! credentials.
//!
//! SYSTEM CONTEXT
//! ==============
//! Registry endpoints are account-scoped rather than community-scoped,
//! so this page gates on the session response (a 401 shows a login
//! prompt instead of redirecting). API keys appear exactly twice: at
//! registration and after a rotation, each time with a save-it-now
//! warning.

#[cfg(test)]
#[path = "apps_test.rs"]
mod apps_test;

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use leptos::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::register_app_modal::RegisterAppModal;
use crate::net::types::{AppDefaultPermission, AppInfo, PERMISSION_LEVELS, PermissionOp};
use crate::util::collections::validate_new_collection;
use crate::util::dialog;
use crate::util::format::display_date;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
#[cfg(feature = "hydrate")]
use crate::net::types::AppDefaultPermissionPatch;

/// Apps that predate the default-permission endpoints answer 404 there;
/// that just means nothing is defined yet.
#[cfg(any(test, feature = "hydrate"))]
fn empty_when_missing(
    result: Result<Vec<AppDefaultPermission>, ApiError>,
) -> Result<Vec<AppDefaultPermission>, ApiError> {
    match result {
        Err(err) if err.status() == Some(404) => Ok(Vec::new()),
        other => other,
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
struct AppsPageState {
    apps: Vec<AppInfo>,
    loading: bool,
    error: Option<String>,
    /// The registry said the caller has no session.
    unauthorized: bool,
    /// App id with a rotation or deactivation in flight.
    busy_app: Option<String>,
    /// App name and fresh key from the latest rotation, until dismissed.
    rotated: Option<(String, String)>,
}

/// Default collection permissions for the one expanded app.
#[derive(Clone, Debug, Default, PartialEq)]
struct DefaultsPanelState {
    rows: Vec<AppDefaultPermission>,
    loading: bool,
    error: Option<String>,
}

fn load_apps(state: RwSignal<AppsPageState>, alive: Arc<AtomicBool>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_registered_apps().await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            state.update(|s| {
                s.loading = false;
                match result {
                    Ok(apps) => {
                        s.apps = apps;
                        s.error = None;
                        s.unauthorized = false;
                    }
                    Err(err) if err.is_unauthorized() => s.unauthorized = true,
                    Err(err) => s.error = Some(err.user_message()),
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (state, alive);
    }
}

fn rotate_key(app_id: String, name: String, state: RwSignal<AppsPageState>, alive: Arc<AtomicBool>) {
    #[cfg(feature = "hydrate")]
    {
        state.update(|s| s.busy_app = Some(app_id.clone()));
        leptos::task::spawn_local(async move {
            let result = crate::net::api::rotate_app_key(&app_id).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            state.update(|s| {
                s.busy_app = None;
                match result {
                    Ok(key) => s.rotated = Some((name, key)),
                    Err(err) => s.error = Some(err.user_message()),
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (app_id, name, state, alive);
    }
}

fn deactivate(app_id: String, state: RwSignal<AppsPageState>, alive: Arc<AtomicBool>) {
    #[cfg(feature = "hydrate")]
    {
        state.update(|s| s.busy_app = Some(app_id.clone()));
        leptos::task::spawn_local(async move {
            let result = crate::net::api::deactivate_app(&app_id).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match result {
                Ok(()) => {
                    state.update(|s| {
                        s.busy_app = None;
                        s.loading = true;
                    });
                    load_apps(state, alive);
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
        let _ = (app_id, state, alive);
    }
}

fn load_defaults(app_id: String, panel: RwSignal<DefaultsPanelState>, alive: Arc<AtomicBool>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result =
                empty_when_missing(crate::net::api::fetch_app_default_permissions(&app_id).await);
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
        let _ = (app_id, panel, alive);
    }
}

fn push_default_change(
    app_id: String,
    collection: String,
    op: PermissionOp,
    level: String,
    panel: RwSignal<DefaultsPanelState>,
    alive: Arc<AtomicBool>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let patch = AppDefaultPermissionPatch::for_op(&collection, op, &level);
            let result = crate::net::api::update_app_default_permission(&app_id, &patch).await;
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
                    load_defaults(app_id, panel, alive);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (app_id, collection, op, level, panel, alive);
    }
}

fn create_default(
    app_id: String,
    collection: String,
    panel: RwSignal<DefaultsPanelState>,
    alive: Arc<AtomicBool>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let row = AppDefaultPermission::for_collection(&collection);
            let result = crate::net::api::add_app_default_permission(&app_id, &row).await;
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
        let _ = (app_id, collection, panel, alive);
    }
}

fn remove_default(
    app_id: String,
    collection: String,
    panel: RwSignal<DefaultsPanelState>,
    alive: Arc<AtomicBool>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result =
                crate::net::api::remove_app_default_permission(&app_id, &collection).await;
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
        let _ = (app_id, collection, panel, alive);
    }
}

/// Registered apps list with credential management.
#[component]
pub fn AppsPage() -> impl IntoView {
    let state = RwSignal::new(AppsPageState {
        loading: true,
        ..AppsPageState::default()
    });
    let expanded = RwSignal::new(None::<String>);
    let panel = RwSignal::new(DefaultsPanelState::default());
    let new_collection = RwSignal::new(String::new());
    let collection_error = RwSignal::new(None::<String>);
    let show_register = RwSignal::new(false);

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let requested = RwSignal::new(false);
    {
        let alive = alive.clone();
        Effect::new(move || {
            if requested.get() {
                return;
            }
            requested.set(true);
            load_apps(state, alive.clone());
        });
    }

    let on_registered = {
        let alive = alive.clone();
        Callback::new(move |()| {
            state.update(|s| s.loading = true);
            load_apps(state, alive.clone());
        })
    };

    let body = {
        let alive = alive.clone();
        move || {
            if state.with(|s| s.loading) {
                return view! { <p class="apps-page__loading">"Loading apps..."</p> }.into_any();
            }
            if state.with(|s| s.unauthorized) {
                return view! {
                    <section class="apps-page__gate">
                        <EmptyState
                            title="Not logged in"
                            message="Log in to manage your registered apps."
                        />
                        <a class="btn btn--primary" href="/login">"Log In"</a>
                    </section>
                }
                .into_any();
            }
            let apps = state.with(|s| s.apps.clone());
            if apps.is_empty() {
                return view! {
                    <EmptyState
                        title="No apps yet"
                        message="Register an app to get an API key for the network."
                    />
                }
                .into_any();
            }
            let busy = state.with(|s| s.busy_app.clone());
            apps.into_iter()
                .map(|app| {
                    let app_id = app.app_id.clone();
                    let app_domain = app.domain.clone();
                    let active = app.status == "active";
                    let row_busy = busy.as_deref() == Some(app.app_id.as_str());

                    let on_rotate = {
                        let app_id = app_id.clone();
                        let name = app.name.clone();
                        let alive = alive.clone();
                        move |_| {
                            if !dialog::confirm(
                                "Rotate API key? The old key will stop working immediately.",
                            ) {
                                return;
                            }
                            rotate_key(app_id.clone(), name.clone(), state, alive.clone());
                        }
                    };
                    let on_deactivate = {
                        let app_id = app_id.clone();
                        let alive = alive.clone();
                        move |_| {
                            if !dialog::confirm(
                                "Deactivate this app? Its API key will stop working.",
                            ) {
                                return;
                            }
                            deactivate(app_id.clone(), state, alive.clone());
                        }
                    };
                    let on_toggle = {
                        let app_id = app_id.clone();
                        let alive = alive.clone();
                        move |_| {
                            if expanded.get().as_deref() == Some(app_id.as_str()) {
                                expanded.set(None);
                                return;
                            }
                            expanded.set(Some(app_id.clone()));
                            new_collection.set(String::new());
                            collection_error.set(None);
                            panel.set(DefaultsPanelState {
                                loading: true,
                                ..DefaultsPanelState::default()
                            });
                            load_defaults(app_id.clone(), panel, alive.clone());
                        }
                    };
                    let defaults_section = {
                        let app_id = app_id.clone();
                        let domain = app_domain.clone();
                        let alive = alive.clone();
                        move || {
                            (expanded.get().as_deref() == Some(app_id.as_str())).then(|| {
                                defaults_panel(
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
                        <div class="apps-page__row">
                            <div class="apps-page__head">
                                <div class="apps-page__identity">
                                    <span class="apps-page__name">{app.name.clone()}</span>
                                    <span class="apps-page__domain">{app.domain.clone()}</span>
                                    <code class="apps-page__app-id">{app.app_id.clone()}</code>
                                </div>
                                <span class="chip chip--status">
                                    {if active { "Active" } else { "Inactive" }}
                                </span>
                                <span class="apps-page__created">
                                    {format!("Registered {}", display_date(&app.created_at))}
                                </span>
                                <div class="apps-page__actions">
                                    {active
                                        .then(|| {
                                            view! {
                                                <button
                                                    class="btn btn--small"
                                                    disabled=row_busy
                                                    on:click=on_rotate
                                                >
                                                    "Rotate Key"
                                                </button>
                                                <button
                                                    class="btn btn--small btn--danger"
                                                    disabled=row_busy
                                                    on:click=on_deactivate
                                                >
                                                    "Deactivate"
                                                </button>
                                            }
                                        })}
                                    <button class="btn btn--small" on:click=on_toggle>
                                        "Default Permissions"
                                    </button>
                                </div>
                            </div>
                            {defaults_section}
                        </div>
                    }
                })
                .collect::<Vec<_>>()
                .into_any()
        }
    };

    view! {
        <div class="apps-page">
            <header class="apps-page__header">
                <h1>"Developer Apps"</h1>
                <button class="btn btn--primary" on:click=move |_| show_register.set(true)>
                    "+ Register App"
                </button>
            </header>
            {move || {
                state
                    .with(|s| s.rotated.clone())
                    .map(|(name, key)| {
                        view! {
                            <div class="apps-page__rotated">
                                <p class="apps-page__rotated-hint">
                                    {format!(
                                        "New API key for {name}. Save it now; it will not be shown again.",
                                    )}
                                </p>
                                <code class="apps-page__api-key">{key}</code>
                                <button
                                    class="btn btn--small"
                                    on:click=move |_| state.update(|s| s.rotated = None)
                                >
                                    "Dismiss"
                                </button>
                            </div>
                        }
                    })
            }}
            {move || {
                state
                    .with(|s| s.error.clone())
                    .map(|message| view! { <p class="apps-page__error">{message}</p> })
            }}
            {body}
            <Show when=move || show_register.get()>
                <RegisterAppModal
                    on_cancel=Callback::new(move |()| show_register.set(false))
                    on_registered=on_registered
                />
            </Show>
        </div>
    }
}

/// Expanded per-app panel: the default permission grid plus the
/// add-collection form.
fn defaults_panel(
    app_id: String,
    domain: String,
    panel: RwSignal<DefaultsPanelState>,
    new_collection: RwSignal<String>,
    collection_error: RwSignal<Option<String>>,
    alive: Arc<AtomicBool>,
) -> impl IntoView {
    let grid = {
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
                            let app_id = app_id.clone();
                            let collection = collection.clone();
                            let alive = alive.clone();
                            view! {
                                <label class="apps-page__perm">
                                    {op.label()}
                                    <select
                                        class="apps-page__perm-select"
                                        on:change=move |ev| {
                                            push_default_change(
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
                        let app_id = app_id.clone();
                        let collection = collection.clone();
                        let alive = alive.clone();
                        move |_| {
                            let prompt = format!(
                                "Remove the default for {collection}? Communities keep their own overrides."
                            );
                            if !dialog::confirm(&prompt) {
                                return;
                            }
                            remove_default(
                                app_id.clone(),
                                collection.clone(),
                                panel,
                                alive.clone(),
                            );
                        }
                    };
                    view! {
                        <div class="apps-page__collection">
                            <div class="apps-page__collection-head">
                                <code class="apps-page__collection-name">{collection.clone()}</code>
                                <button class="btn btn--small" on:click=on_remove>
                                    "Remove"
                                </button>
                            </div>
                            <div class="apps-page__perm-grid">{op_selects}</div>
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
                    create_default(app_id.clone(), name, panel, alive.clone());
                }
                Err(message) => collection_error.set(Some(message)),
            }
        }
    };

    view! {
        <div class="apps-page__defaults">
            <Show
                when=move || !panel.with(|p| p.loading)
                fallback=|| view! { <p class="apps-page__loading">"Loading permissions..."</p> }
            >
                <Show when=move || panel.with(|p| p.error.is_some())>
                    <p class="apps-page__error">
                        {move || panel.with(|p| p.error.clone()).unwrap_or_default()}
                    </p>
                </Show>
                {grid.clone()}
                <div class="apps-page__collection-add">
                    <input
                        class="apps-page__input"
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
                    <p class="apps-page__error">
                        {move || collection_error.get().unwrap_or_default()}
                    </p>
                </Show>
            </Show>
        </div>
    }
}
