//! Top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once above the router outlet. Reads the shared session
//! signal to switch between anonymous and signed-in chrome.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Brand link, section links, and the session controls.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                session.update(|s| s.user = None);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "OpenSocial"
            </a>
            <Show
                when=move || session.get().is_authenticated()
                fallback=move || {
                    view! {
                        <Show when=move || !session.get().loading>
                            <span class="navbar__spacer"></span>
                            <a class="navbar__link" href="/login">
                                "Login"
                            </a>
                        </Show>
                    }
                }
            >
                <a class="navbar__link" href="/">
                    "My Communities"
                </a>
                <a class="navbar__link" href="/apps">
                    "Developer Apps"
                </a>
                <span class="navbar__spacer"></span>
                <span class="navbar__self">
                    {move || session.get().display_name().unwrap_or_default()}
                </span>
                <button class="btn navbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
