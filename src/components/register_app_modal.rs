//! Dialog for registering a third-party app and seeding its default
//! collection permissions.
//!
//! Two phases: the form, then a one-time credentials view showing the
//! API key the backend returns at registration.

use leptos::prelude::*;

use crate::net::types::{AppDefaultPermission, PERMISSION_LEVELS, PermissionOp, RegisteredApp};
use crate::util::collections::validate_new_collection;

#[cfg(feature = "hydrate")]
use crate::net::types::RegisterAppRequest;

/// Modal form registering an app. `on_registered` fires once the backend
/// accepts, before the credentials view is dismissed, so the parent list
/// can refetch.
#[component]
pub fn RegisterAppModal(on_cancel: Callback<()>, on_registered: Callback<()>) -> impl IntoView {
    let app_name = RwSignal::new(String::new());
    let domain = RwSignal::new(String::new());
    let new_collection = RwSignal::new(String::new());
    let collections = RwSignal::new(Vec::<AppDefaultPermission>::new());
    let collection_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let registered = RwSignal::new(None::<RegisteredApp>);

    let on_add_collection = move |_| {
        let candidate = new_collection.get();
        let domain_value = domain.get();
        let existing =
            collections.with(|list| list.iter().map(|p| p.collection.clone()).collect::<Vec<_>>());
        match validate_new_collection(&candidate, &domain_value, &existing) {
            Ok(name) => {
                collections.update(|list| list.push(AppDefaultPermission::for_collection(&name)));
                new_collection.set(String::new());
                collection_error.set(None);
            }
            Err(message) => collection_error.set(Some(message)),
        }
    };

    let submit = Callback::new(move |_| {
        if busy.get() {
            return;
        }
        let name_value = app_name.get().trim().to_owned();
        let domain_value = domain.get().trim().to_owned();
        if name_value.is_empty() || domain_value.is_empty() {
            error.set(Some("Name and domain are required".to_owned()));
            return;
        }
        busy.set(true);
        error.set(None);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let seeded = collections.get_untracked();
                let req = RegisterAppRequest {
                    name: name_value,
                    domain: domain_value,
                    default_permissions: if seeded.is_empty() { None } else { Some(seeded) },
                };
                match crate::net::api::register_app(&req).await {
                    Ok(app) => {
                        busy.set(false);
                        registered.set(Some(app));
                        on_registered.run(());
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
            let _ = (name_value, domain_value);
            busy.set(false);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <Show
                    when=move || registered.get().is_none()
                    fallback=move || {
                        view! {
                            <h2>"App Registered"</h2>
                            <p class="dialog__hint">
                                "Save this API key now. It will not be shown again."
                            </p>
                            <code class="dialog__api-key">
                                {move || registered.get().map(|app| app.api_key).unwrap_or_default()}
                            </code>
                            <div class="dialog__actions">
                                <button class="btn btn--primary" on:click=move |_| on_cancel.run(())>
                                    "Done"
                                </button>
                            </div>
                        }
                    }
                >
                    <h2>"Register App"</h2>
                    <label class="dialog__label">
                        "App Name"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || app_name.get()
                            on:input=move |ev| app_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "App Domain"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="myapp.example.com"
                            prop:value=move || domain.get()
                            on:input=move |ev| domain.set(event_target_value(&ev))
                        />
                    </label>

                    <div class="dialog__section">
                        <span class="dialog__section-title">"Default Collection Permissions"</span>
                        <p class="dialog__hint">
                            "Collections must be prefixed with your reversed app domain."
                        </p>
                        <div class="dialog__collection-add">
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="com.example.myapp.post"
                                prop:value=move || new_collection.get()
                                on:input=move |ev| new_collection.set(event_target_value(&ev))
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        on_add_collection(());
                                    }
                                }
                            />
                            <button class="btn" on:click=move |_| on_add_collection(())>
                                "Add"
                            </button>
                        </div>
                        <Show when=move || collection_error.get().is_some()>
                            <p class="dialog__error">
                                {move || collection_error.get().unwrap_or_default()}
                            </p>
                        </Show>
                        {move || {
                            collections
                                .get()
                                .into_iter()
                                .enumerate()
                                .map(|(index, perm)| {
                                    let op_rows = PermissionOp::ALL
                                        .into_iter()
                                        .map(|op| {
                                            let current = perm.level(op).to_owned();
                                            view! {
                                                <label class="dialog__perm">
                                                    {op.label()}
                                                    <select
                                                        class="dialog__perm-select"
                                                        on:change=move |ev| {
                                                            let value = event_target_value(&ev);
                                                            collections
                                                                .update(|list| {
                                                                    if let Some(row) = list.get_mut(index) {
                                                                        row.set_level(op, &value);
                                                                    }
                                                                });
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
                                    let name = perm.collection.clone();
                                    view! {
                                        <div class="dialog__collection">
                                            <div class="dialog__collection-head">
                                                <code class="dialog__collection-name">{name}</code>
                                                <button
                                                    class="btn btn--small"
                                                    on:click=move |_| {
                                                        collections
                                                            .update(|list| {
                                                                if index < list.len() {
                                                                    list.remove(index);
                                                                }
                                                            });
                                                    }
                                                >
                                                    "Remove"
                                                </button>
                                            </div>
                                            <div class="dialog__perms">{op_rows}</div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>

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
                            {move || if busy.get() { "Registering..." } else { "Register App" }}
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
