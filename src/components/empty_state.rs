//! Placeholder panel for lists with nothing to show.

use leptos::prelude::*;

/// Centered panel with a title and an explanatory line. Pages render
/// their own call-to-action alongside when one applies.
#[component]
pub fn EmptyState(title: &'static str, message: &'static str) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h2 class="empty-state__title">{title}</h2>
            <p class="empty-state__message">{message}</p>
        </div>
    }
}
