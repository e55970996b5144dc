//! Login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authentication happens at the identity provider, not here: the form
//! posts the handle (or DID) to the backend as a full-document request,
//! the backend bounces the browser through the provider's OAuth flow,
//! and the user comes back with a session cookie. Any navigation
//! interrupted by that round trip is resumed by the bootstrap effect in
//! `app`, not by this page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::api_url;
use crate::state::session::SessionState;

/// Handle entry form posting to the backend's login endpoint. Redirects
/// home if a session already exists.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.is_authenticated() {
            navigate("/", NavigateOptions::default());
        }
    });

    let identifier = RwSignal::new(String::new());

    view! {
        <div class="login-page">
            <div class="login-page__panel">
                <h1 class="login-page__brand">"OpenSocial"</h1>
                <p class="login-page__blurb">
                    "Communities on the open social web. Sign in with the account you already own."
                </p>
                <form class="login-page__form" method="post" action=api_url("/login")>
                    <label class="login-page__label">
                        "Handle or DID"
                        <input
                            class="login-page__input"
                            type="text"
                            name="input"
                            placeholder="alice.example.com"
                            autocomplete="username"
                            prop:value=move || identifier.get()
                            on:input=move |ev| identifier.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary login-page__submit" type="submit">
                        "Sign In"
                    </button>
                </form>
            </div>
        </div>
    }
}
