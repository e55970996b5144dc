//! Home page listing the user's community memberships.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the membership
//! list once the session check resolves and hosts the create-community
//! dialog.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::community_card::CommunityCard;
use crate::components::create_community_modal::CreateCommunityModal;
use crate::components::empty_state::EmptyState;
use crate::net::types::Membership;
use crate::state::session::SessionState;

fn load_memberships(
    memberships: RwSignal<Vec<Membership>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_memberships().await {
                Ok(items) => {
                    memberships.set(items);
                    error.set(None);
                }
                Err(err) => error.set(Some(err.user_message())),
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (memberships, loading, error);
    }
}

/// Membership grid with create-community entry point. Redirects to
/// `/login` once the session check resolves anonymous.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let memberships = RwSignal::new(Vec::<Membership>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let show_create = RwSignal::new(false);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        if !session.get().is_authenticated() {
            return;
        }
        requested.set(true);
        load_memberships(memberships, loading, error);
    });

    let on_cancel = Callback::new(move |_| show_create.set(false));
    let on_created = Callback::new(move |_| {
        show_create.set(false);
        loading.set(true);
        load_memberships(memberships, loading, error);
    });

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"My Communities"</h1>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ Create Community"
                </button>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="home-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="home-page__loading">"Loading communities..."</p> }
            >
                <Show
                    when=move || !memberships.get().is_empty()
                    fallback=move || {
                        view! {
                            <EmptyState
                                title="No communities yet"
                                message="Join a community from an app, or create one from an account you manage."
                            />
                        }
                    }
                >
                    <div class="home-page__grid">
                        {move || {
                            memberships
                                .get()
                                .into_iter()
                                .map(|membership| view! { <CommunityCard membership=membership/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>

            <Show when=move || show_create.get()>
                <CreateCommunityModal on_cancel=on_cancel on_created=on_created/>
            </Show>
        </div>
    }
}
