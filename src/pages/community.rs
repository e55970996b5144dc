//! Community page: profile, member list, and the join flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reachable by members, admins, anonymous viewers, and external apps
//! that deep-link in with `?action=join&return_to=...`. The page owns a
//! [`JoinFlow`] signal driving the join state machine; the community
//! detail and member list load concurrently and neither blocks the
//! other. Asynchronous completions check a liveness flag before writing
//! state, so responses landing after navigation are discarded.

#[cfg(test)]
#[path = "community_test.rs"]
mod community_test;

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map, use_query_map};

use crate::net::types::{CommunityDetail, CommunityType, Member};
use crate::state::join::{
    JoinFlow, JoinStage, PostJoinAction, join_affordance, post_join_action, settled_message,
};
use crate::util::format::{avatar_initial, markdown_to_html};
use crate::util::query::JoinQuery;

#[cfg(feature = "hydrate")]
use crate::net::types::JoinStatus;
#[cfg(feature = "hydrate")]
use crate::state::join::RETURN_DELAY_MS;

#[cfg(any(test, feature = "hydrate"))]
const MAX_AVATAR_BYTES: f64 = 1024.0 * 1024.0;

/// Client-side check before an avatar upload is attempted.
#[cfg(any(test, feature = "hydrate"))]
fn validate_avatar_file(size: f64, mime: &str) -> Result<(), String> {
    if !mime.starts_with("image/") {
        return Err("File must be an image".to_owned());
    }
    if size > MAX_AVATAR_BYTES {
        return Err("Image must be smaller than 1MB".to_owned());
    }
    Ok(())
}

/// Display label for a member: profile name, then handle, then DID.
fn member_label(member: &Member) -> String {
    member
        .display_name
        .clone()
        .filter(|name| !name.is_empty())
        .or_else(|| member.handle.clone().filter(|handle| !handle.is_empty()))
        .unwrap_or_else(|| member.did.clone())
}

/// Chip text for the community's join policy.
fn type_badge(community_type: Option<CommunityType>) -> &'static str {
    match community_type {
        Some(CommunityType::AdminApproved) => "Admin approval",
        Some(CommunityType::Private) => "Private",
        Some(CommunityType::Open) | None => "Open",
    }
}

/// Path plus query of the current location, for the pending-redirect
/// store.
#[cfg(feature = "hydrate")]
fn current_path() -> Option<String> {
    let location = web_sys::window()?.location();
    let path = location.pathname().ok()?;
    let search = location.search().ok().unwrap_or_default();
    Some(format!("{path}{search}"))
}

/// Kick off the page's two fetches. They run concurrently and may land
/// in either order.
fn fetch_page(
    did: String,
    detail: RwSignal<Option<CommunityDetail>>,
    detail_error: RwSignal<Option<String>>,
    members: RwSignal<Vec<Member>>,
    members_loading: RwSignal<bool>,
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
            let result = crate::net::api::fetch_community_members(&did).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            // Some communities hide the member list from outsiders; the
            // page renders without it.
            match result {
                Ok(list) => members.set(list),
                Err(err) => leptos::logging::warn!("member list unavailable: {err}"),
            }
            members_loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, detail, detail_error, members, members_loading, alive);
    }
}

/// Issue the join request backing a `joining` transition and settle the
/// flow with the outcome.
fn issue_join(
    did: String,
    flow: RwSignal<JoinFlow>,
    detail: RwSignal<Option<CommunityDetail>>,
    alive: Arc<AtomicBool>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::join_community(&did).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match result {
                Ok(resp) => {
                    flow.update(|f| f.resolve(resp.status));
                    if matches!(resp.status, JoinStatus::Joined | JoinStatus::AlreadyMember) {
                        detail.update(|d| {
                            if let Some(d) = d {
                                d.is_member = true;
                            }
                        });
                    }
                }
                Err(err) => flow.update(|f| f.fail(err.user_message())),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (did, flow, detail, alive);
    }
}

/// Navigate the full browser context back to the caller once the
/// confirmation has been on screen long enough to read.
fn schedule_return(target: String, alive: Arc<AtomicBool>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(RETURN_DELAY_MS)).await;
            if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&target);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, alive);
    }
}

/// Community profile and join flow, keyed on the `:did` route param.
#[component]
pub fn CommunityPage() -> impl IntoView {
    let params = use_params_map();
    let query_map = use_query_map();
    let navigate = use_navigate();

    let did = move || params.with(|p| p.get("did").unwrap_or_default());
    let join_query = Memo::new(move |_| {
        query_map.with(|q| JoinQuery::derive(q.get("action").as_deref(), q.get("return_to").as_deref()))
    });

    let detail = RwSignal::new(None::<CommunityDetail>);
    let detail_error = RwSignal::new(None::<String>);
    let members = RwSignal::new(Vec::<Member>::new());
    let members_loading = RwSignal::new(true);
    let flow = RwSignal::new(JoinFlow::new());
    let redirect_scheduled = RwSignal::new(false);
    let avatar_busy = RwSignal::new(false);
    let avatar_error = RwSignal::new(None::<String>);

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    // Load (and on DID change, reload) the page data. Navigating between
    // communities restarts the join flow from idle.
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
            members.set(Vec::new());
            members_loading.set(true);
            flow.set(JoinFlow::new());
            redirect_scheduled.set(false);
            avatar_error.set(None);
            fetch_page(current, detail, detail_error, members, members_loading, alive.clone());
        });
    }

    // Automatic join entry. Gated on the fetched detail so it cannot race
    // ahead of the authentication/membership check; the flow latches
    // after the first firing.
    {
        let alive = alive.clone();
        Effect::new(move || {
            let Some(current) = detail.get() else {
                return;
            };
            let query = join_query.get();
            let did_value = current.community.did.clone();
            let fired = flow
                .try_update(|f| f.try_auto_begin(&query, &current))
                .unwrap_or(false);
            if fired {
                issue_join(did_value, flow, detail, alive.clone());
            }
        });
    }

    // Bounce back to the caller after a confirmed outcome. One-shot.
    {
        let alive = alive.clone();
        Effect::new(move || {
            let stage = flow.with(|f| f.stage().clone());
            let query = join_query.get();
            if let PostJoinAction::RedirectAfterDelay { target } =
                post_join_action(&stage, query.return_to.as_deref())
            {
                if redirect_scheduled.get_untracked() {
                    return;
                }
                redirect_scheduled.set(true);
                schedule_return(target, alive.clone());
            }
        });
    }

    let content = {
        let navigate = navigate.clone();
        let alive = alive.clone();
        move || {
            if let Some(d) = detail.get() {
                let community = d.community;
                let did_value = community.did.clone();
                let name = community.display_name.clone();
                let description = community.description.clone().unwrap_or_default();
                let avatar = community.avatar.clone();
                let banner = community.banner.clone();
                let community_type = community.community_type;
                let guidelines_html = community
                    .guidelines
                    .as_ref()
                    .filter(|g| !g.trim().is_empty())
                    .map(|g| markdown_to_html(g));
                let member_count = d.member_count;
                let is_member = d.is_member;
                let is_admin = d.is_admin;
                let is_authenticated = d.is_authenticated;
                let user_role = d.user_role.clone();
                let initial = avatar_initial(&name);
                let settings_href = format!("/communities/{did_value}/settings");

                let on_avatar_change = {
                    let did_value = did_value.clone();
                    let alive = alive.clone();
                    move |ev: leptos::ev::Event| {
                        #[cfg(feature = "hydrate")]
                        {
                            use wasm_bindgen::JsCast as _;
                            let Some(input) = ev
                                .target()
                                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                            else {
                                return;
                            };
                            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                                return;
                            };
                            // Let the same file be picked again later.
                            input.set_value("");
                            if let Err(message) = validate_avatar_file(file.size(), &file.type_()) {
                                avatar_error.set(Some(message));
                                return;
                            }
                            if avatar_busy.get_untracked() {
                                return;
                            }
                            avatar_error.set(None);
                            avatar_busy.set(true);
                            let did_value = did_value.clone();
                            let alive = alive.clone();
                            leptos::task::spawn_local(async move {
                                let result =
                                    crate::net::api::upload_community_avatar(&did_value, &file)
                                        .await;
                                if !alive.load(std::sync::atomic::Ordering::Relaxed) {
                                    return;
                                }
                                avatar_busy.set(false);
                                match result {
                                    Ok(()) => {
                                        if let Ok(fresh) =
                                            crate::net::api::fetch_community(&did_value).await
                                        {
                                            if alive.load(std::sync::atomic::Ordering::Relaxed) {
                                                detail.set(Some(fresh));
                                            }
                                        }
                                    }
                                    Err(err) => avatar_error.set(Some(err.user_message())),
                                }
                            });
                        }
                        #[cfg(not(feature = "hydrate"))]
                        {
                            let _ = (ev, &did_value, &alive);
                        }
                    }
                };

                let join_panel = {
                    let did_value = did_value.clone();
                    let panel_name = name.clone();
                    let navigate = navigate.clone();
                    let alive = alive.clone();
                    move || {
                        let stage = flow.with(|f| f.stage().clone());
                        let query = join_query.get();

                        let on_join = {
                            let did_value = did_value.clone();
                            let alive = alive.clone();
                            move |_| {
                                let began = flow.try_update(JoinFlow::begin).unwrap_or(false);
                                if began {
                                    issue_join(did_value.clone(), flow, detail, alive.clone());
                                }
                            }
                        };
                        let on_login_join = {
                            let navigate = navigate.clone();
                            move |_| {
                                #[cfg(feature = "hydrate")]
                                {
                                    if let Some(path) = current_path() {
                                        crate::util::resume::remember(&path);
                                    }
                                }
                                navigate("/login", NavigateOptions::default());
                            }
                        };
                        let on_enter = {
                            let did_value = did_value.clone();
                            let navigate = navigate.clone();
                            move |_| {
                                flow.set(JoinFlow::new());
                                navigate(
                                    &format!("/communities/{did_value}"),
                                    NavigateOptions::default(),
                                );
                            }
                        };

                        match stage {
                            JoinStage::Idle => {
                                if is_member {
                                    ().into_any()
                                } else {
                                    match join_affordance(community_type) {
                                        Some(label) if is_authenticated => view! {
                                            <div class="join-panel">
                                                <button class="btn btn--primary join-panel__join" on:click=on_join>
                                                    {label}
                                                </button>
                                            </div>
                                        }
                                        .into_any(),
                                        Some(label) => view! {
                                            <div class="join-panel">
                                                <button class="btn btn--primary join-panel__join" on:click=on_login_join>
                                                    {format!("Log in to {label}")}
                                                </button>
                                            </div>
                                        }
                                        .into_any(),
                                        None => view! {
                                            <p class="join-panel__private">
                                                "This community is invite-only."
                                            </p>
                                        }
                                        .into_any(),
                                    }
                                }
                            }
                            JoinStage::Joining => view! {
                                <div class="join-panel">
                                    <button class="btn btn--primary join-panel__join" disabled=true>
                                        "Joining..."
                                    </button>
                                </div>
                            }
                            .into_any(),
                            JoinStage::Error(message) => view! {
                                <div class="join-panel join-panel--error">
                                    <p class="join-panel__error">{message}</p>
                                    <button class="btn join-panel__retry" on:click=on_join>
                                        "Try Again"
                                    </button>
                                </div>
                            }
                            .into_any(),
                            settled => {
                                let message =
                                    settled_message(&settled, &panel_name).unwrap_or_default();
                                let action = match post_join_action(
                                    &settled,
                                    query.return_to.as_deref(),
                                ) {
                                    PostJoinAction::RedirectAfterDelay { .. } => view! {
                                        <p class="join-panel__note">"Returning you to the app..."</p>
                                    }
                                    .into_any(),
                                    PostJoinAction::OfferReturn { target } => view! {
                                        <a class="btn join-panel__return" href=target>
                                            "Return to App"
                                        </a>
                                    }
                                    .into_any(),
                                    PostJoinAction::EnterCommunity => view! {
                                        <button class="btn btn--primary" on:click=on_enter>
                                            "Enter Community"
                                        </button>
                                    }
                                    .into_any(),
                                    PostJoinAction::Stay => ().into_any(),
                                };
                                view! {
                                    <div class="join-panel join-panel--settled">
                                        <p class="join-panel__message">{message}</p>
                                        {action}
                                    </div>
                                }
                                .into_any()
                            }
                        }
                    }
                };

                view! {
                    {banner.map(|url| view! { <img class="community-page__banner" src=url alt=""/> })}
                    <header class="community-page__header">
                        <div class="community-page__avatar">
                            {match avatar {
                                Some(url) => view! { <img class="community-page__avatar-img" src=url alt=""/> }.into_any(),
                                None => view! { <span class="community-page__avatar-initial">{initial}</span> }.into_any(),
                            }}
                            {is_admin
                                .then(|| {
                                    view! {
                                        <label class="community-page__avatar-upload" class:is-busy=move || avatar_busy.get()>
                                            {move || if avatar_busy.get() { "Uploading..." } else { "Change avatar" }}
                                            <input
                                                class="community-page__avatar-input"
                                                type="file"
                                                accept="image/*"
                                                disabled=move || avatar_busy.get()
                                                on:change=on_avatar_change
                                            />
                                        </label>
                                    }
                                })}
                        </div>
                        <div class="community-page__identity">
                            <h1 class="community-page__name">{name.clone()}</h1>
                            <div class="community-page__badges">
                                <span class="chip chip--type">{type_badge(community_type)}</span>
                                {is_member.then(|| view! { <span class="chip chip--member">"Member"</span> })}
                                {is_admin.then(|| view! { <span class="chip chip--admin">"Admin"</span> })}
                                {user_role.map(|role| view! { <span class="chip chip--role">{role}</span> })}
                            </div>
                            <p class="community-page__member-count">{member_count} " members"</p>
                        </div>
                        {is_admin
                            .then(|| {
                                view! {
                                    <a class="btn community-page__settings" href=settings_href.clone()>
                                        "Settings"
                                    </a>
                                }
                            })}
                    </header>
                    <Show when=move || avatar_error.get().is_some()>
                        <p class="community-page__avatar-error">
                            {move || avatar_error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    {(!description.is_empty())
                        .then(|| view! { <p class="community-page__description">{description.clone()}</p> })}

                    {join_panel}

                    {guidelines_html
                        .map(|html| {
                            view! {
                                <section class="community-page__guidelines">
                                    <h2>"Community Guidelines"</h2>
                                    <div class="community-page__guidelines-body" inner_html=html></div>
                                </section>
                            }
                        })}

                    <section class="community-page__members">
                        <h2>"Members"</h2>
                        <Show
                            when=move || !members_loading.get()
                            fallback=move || view! { <p class="community-page__loading">"Loading members..."</p> }
                        >
                            <ul class="community-page__member-list">
                                {move || {
                                    members
                                        .get()
                                        .into_iter()
                                        .map(|member| {
                                            let label = member_label(&member);
                                            let member_initial = avatar_initial(&label);
                                            let role_chips = member
                                                .roles
                                                .iter()
                                                .map(|role| {
                                                    view! { <span class="chip chip--role">{role.display_name.clone()}</span> }
                                                })
                                                .collect::<Vec<_>>();
                                            view! {
                                                <li class="community-page__member">
                                                    {match member.avatar.clone() {
                                                        Some(url) => view! { <img class="community-page__member-avatar" src=url alt=""/> }.into_any(),
                                                        None => view! { <span class="community-page__member-initial">{member_initial}</span> }.into_any(),
                                                    }}
                                                    <span class="community-page__member-name">{label}</span>
                                                    {member.is_admin.then(|| view! { <span class="chip chip--admin">"Admin"</span> })}
                                                    {role_chips}
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </ul>
                        </Show>
                    </section>
                }
                .into_any()
            } else if let Some(message) = detail_error.get() {
                view! { <p class="community-page__error">{message}</p> }.into_any()
            } else {
                view! { <p class="community-page__loading">"Loading community..."</p> }.into_any()
            }
        }
    };

    view! { <div class="community-page">{content}</div> }
}
