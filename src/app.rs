//! Root application component with routing and the session bootstrap.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app mounts with an unresolved session. One bootstrap effect asks
//! the backend who the cookie belongs to, publishes the answer through
//! the shared session signal, and, when the answer is "signed in",
//! finishes any login round trip by replaying the remembered pre-login
//! location. Everything below the router reads the session from context
//! instead of re-checking it.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    apps::AppsPage, community::CommunityPage, home::HomePage, login::LoginPage,
    settings::CommunitySettingsPage,
};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session signal and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::checking());
    provide_context(session);

    let bootstrapped = RwSignal::new(false);
    Effect::new(move || {
        if bootstrapped.get() {
            return;
        }
        bootstrapped.set(true);
        bootstrap_session(session);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/opensocial-web.css"/>
        <Title text="OpenSocial"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("apps") view=AppsPage/>
                    <Route
                        path=(StaticSegment("communities"), ParamSegment("did"))
                        view=CommunityPage
                    />
                    <Route
                        path=(
                            StaticSegment("communities"),
                            ParamSegment("did"),
                            StaticSegment("settings"),
                        )
                        view=CommunitySettingsPage
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// Resolve the session cookie into a user, then consume the pending
/// redirect if the user came back signed in.
///
/// The redirect is a full-document navigation: the remembered location
/// may carry a join directive whose flow expects a fresh page load.
fn bootstrap_session(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            let signed_in = user.is_some();
            session.set(SessionState::resolved(user));
            if !signed_in {
                return;
            }
            let target = crate::util::resume::take()
                .and_then(|raw| crate::util::redirect::sanitize_redirect_url(&raw));
            if let Some(target) = target {
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href(&target);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}
