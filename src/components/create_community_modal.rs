//! Dialog for attaching an existing protocol account as a community.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::types::CreateCommunityRequest;

/// Modal form collecting the community account's credentials and
/// profile. `on_created` fires after the backend accepts, so the parent
/// can refetch and close.
#[component]
pub fn CreateCommunityModal(on_cancel: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let did = RwSignal::new(String::new());
    let app_password = RwSignal::new(String::new());
    let display_name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let require_approval = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let submit = Callback::new(move |_| {
        if busy.get() {
            return;
        }
        let did_value = did.get().trim().to_owned();
        let password_value = app_password.get().trim().to_owned();
        let name_value = display_name.get().trim().to_owned();
        if did_value.is_empty() || password_value.is_empty() || name_value.is_empty() {
            error.set(Some(
                "Account, app password, and display name are required".to_owned(),
            ));
            return;
        }
        busy.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let req = CreateCommunityRequest::existing(
                    &did_value,
                    &password_value,
                    &name_value,
                    description.get_untracked().trim(),
                    require_approval.get_untracked(),
                );
                match crate::net::api::create_community(&req).await {
                    Ok(()) => {
                        busy.set(false);
                        on_created.run(());
                    }
                    Err(err) => {
                        busy.set(false);
                        error.set(Some(err.user_message()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (did_value, password_value, name_value);
            busy.set(false);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Community"</h2>
                <p class="dialog__hint">
                    "Attach an existing account to turn it into a community."
                </p>
                <label class="dialog__label">
                    "Account Handle or DID"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="community.example.com"
                        prop:value=move || did.get()
                        on:input=move |ev| did.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "App Password"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || app_password.get()
                        on:input=move |ev| app_password.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Display Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || display_name.get()
                        on:input=move |ev| display_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <textarea
                        class="dialog__input dialog__textarea"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="dialog__check">
                    <input
                        type="checkbox"
                        prop:checked=move || require_approval.get()
                        on:change=move |ev| require_approval.set(event_target_checked(&ev))
                    />
                    "Require admin approval to join"
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        {move || if busy.get() { "Creating..." } else { "Create Community" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
