//! Card for one community membership on the home grid.

use leptos::prelude::*;

use crate::net::types::{Membership, MembershipStatus};
use crate::util::format::{avatar_initial, display_date};

/// Card linking to a community page, showing identity, description, and
/// the membership's standing.
#[component]
pub fn CommunityCard(membership: Membership) -> impl IntoView {
    let community = membership.community;
    let href = format!("/communities/{}", community.did);
    let pending = membership.status == MembershipStatus::Pending;
    let initial = avatar_initial(&community.display_name);
    let joined = display_date(&membership.joined_at);

    view! {
        <a class="community-card" href=href>
            <div class="community-card__avatar">
                {match community.avatar {
                    Some(url) => view! { <img class="community-card__avatar-img" src=url alt=""/> }.into_any(),
                    None => view! { <span class="community-card__avatar-initial">{initial}</span> }.into_any(),
                }}
            </div>
            <div class="community-card__body">
                <div class="community-card__name-row">
                    <span class="community-card__name">{community.display_name}</span>
                    <Show when=move || pending>
                        <span class="community-card__badge community-card__badge--pending">"Pending"</span>
                    </Show>
                </div>
                <p class="community-card__description">
                    {community.description.unwrap_or_default()}
                </p>
                <span class="community-card__joined">"Joined " {joined}</span>
            </div>
        </a>
    }
}
