use super::*;
use crate::net::types::Community;

fn community(community_type: Option<CommunityType>) -> Community {
    Community {
        did: "did:plc:rustmeetup".to_owned(),
        display_name: "Rust Meetup".to_owned(),
        description: None,
        avatar: None,
        banner: None,
        community_type,
        admins: None,
        member_count: None,
        guidelines: None,
    }
}

fn detail(is_authenticated: bool, is_member: bool) -> CommunityDetail {
    CommunityDetail {
        community: community(Some(CommunityType::Open)),
        member_count: 3,
        is_authenticated,
        is_member,
        is_admin: false,
        user_role: None,
    }
}

fn join_query() -> JoinQuery {
    JoinQuery {
        join_requested: true,
        return_to: None,
    }
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn begin_moves_idle_to_joining() {
    let mut flow = JoinFlow::new();
    assert!(flow.begin());
    assert_eq!(*flow.stage(), JoinStage::Joining);
}

#[test]
fn begin_refuses_while_a_request_is_in_flight() {
    let mut flow = JoinFlow::new();
    assert!(flow.begin());
    assert!(!flow.begin());
    assert_eq!(*flow.stage(), JoinStage::Joining);
}

#[test]
fn begin_refuses_after_a_settled_outcome() {
    for status in [JoinStatus::Joined, JoinStatus::Pending, JoinStatus::AlreadyMember] {
        let mut flow = JoinFlow::new();
        flow.begin();
        flow.resolve(status);
        assert!(flow.stage().is_settled());
        assert!(!flow.begin(), "settled outcome must not restart: {status:?}");
    }
}

#[test]
fn begin_allows_retry_after_failure() {
    let mut flow = JoinFlow::new();
    flow.begin();
    flow.fail("community is private");
    assert_eq!(*flow.stage(), JoinStage::Error("community is private".to_owned()));
    assert!(flow.begin());
    assert_eq!(*flow.stage(), JoinStage::Joining);
}

#[test]
fn resolve_maps_each_server_outcome() {
    let cases = [
        (JoinStatus::Joined, JoinStage::Joined),
        (JoinStatus::Pending, JoinStage::Pending),
        (JoinStatus::AlreadyMember, JoinStage::AlreadyMember),
    ];
    for (status, expected) in cases {
        let mut flow = JoinFlow::new();
        flow.begin();
        flow.resolve(status);
        assert_eq!(*flow.stage(), expected);
    }
}

#[test]
fn stale_responses_cannot_clobber_a_settled_stage() {
    let mut flow = JoinFlow::new();
    flow.begin();
    flow.resolve(JoinStatus::Joined);
    flow.resolve(JoinStatus::Pending);
    assert_eq!(*flow.stage(), JoinStage::Joined);
    flow.fail("late network error");
    assert_eq!(*flow.stage(), JoinStage::Joined);
}

#[test]
fn resolve_without_a_request_in_flight_is_ignored() {
    let mut flow = JoinFlow::new();
    flow.resolve(JoinStatus::Joined);
    assert_eq!(*flow.stage(), JoinStage::Idle);
}

// =============================================================
// Automatic entry
// =============================================================

#[test]
fn auto_begin_fires_for_an_authenticated_non_member() {
    let mut flow = JoinFlow::new();
    assert!(flow.try_auto_begin(&join_query(), &detail(true, false)));
    assert_eq!(*flow.stage(), JoinStage::Joining);
}

#[test]
fn auto_begin_fires_at_most_once() {
    let mut flow = JoinFlow::new();
    assert!(flow.try_auto_begin(&join_query(), &detail(true, false)));
    flow.resolve(JoinStatus::Joined);
    // A detail refetch re-runs the effect with fresh data.
    assert!(!flow.try_auto_begin(&join_query(), &detail(true, false)));
    assert_eq!(*flow.stage(), JoinStage::Joined);
}

#[test]
fn auto_begin_requires_the_join_directive() {
    let mut flow = JoinFlow::new();
    let query = JoinQuery::default();
    assert!(!flow.try_auto_begin(&query, &detail(true, false)));
    assert_eq!(*flow.stage(), JoinStage::Idle);
}

#[test]
fn auto_begin_waits_for_authentication() {
    let mut flow = JoinFlow::new();
    assert!(!flow.try_auto_begin(&join_query(), &detail(false, false)));
    // The latch must not burn on a refused evaluation: once the session
    // check lands the trigger still fires.
    assert!(flow.try_auto_begin(&join_query(), &detail(true, false)));
}

#[test]
fn auto_begin_skips_existing_members() {
    let mut flow = JoinFlow::new();
    assert!(!flow.try_auto_begin(&join_query(), &detail(true, true)));
    assert_eq!(*flow.stage(), JoinStage::Idle);
}

#[test]
fn auto_begin_defers_to_a_manual_attempt_already_in_flight() {
    let mut flow = JoinFlow::new();
    assert!(flow.begin());
    assert!(!flow.try_auto_begin(&join_query(), &detail(true, false)));
    assert_eq!(*flow.stage(), JoinStage::Joining);
}

// =============================================================
// Post-outcome behavior
// =============================================================

#[test]
fn joined_with_a_target_redirects_after_the_delay() {
    let action = post_join_action(&JoinStage::Joined, Some("/app/callback"));
    assert_eq!(
        action,
        PostJoinAction::RedirectAfterDelay {
            target: "/app/callback".to_owned()
        }
    );
}

#[test]
fn already_member_with_a_target_redirects_after_the_delay() {
    let action = post_join_action(&JoinStage::AlreadyMember, Some("/app/callback"));
    assert_eq!(
        action,
        PostJoinAction::RedirectAfterDelay {
            target: "/app/callback".to_owned()
        }
    );
}

#[test]
fn joined_without_a_target_offers_the_community_view() {
    assert_eq!(post_join_action(&JoinStage::Joined, None), PostJoinAction::EnterCommunity);
}

#[test]
fn pending_never_auto_navigates() {
    let action = post_join_action(&JoinStage::Pending, Some("/app/callback"));
    assert_eq!(
        action,
        PostJoinAction::OfferReturn {
            target: "/app/callback".to_owned()
        }
    );
    assert_eq!(post_join_action(&JoinStage::Pending, None), PostJoinAction::Stay);
}

#[test]
fn unsettled_stages_take_no_action() {
    assert_eq!(post_join_action(&JoinStage::Idle, Some("/x")), PostJoinAction::Stay);
    assert_eq!(post_join_action(&JoinStage::Joining, Some("/x")), PostJoinAction::Stay);
    assert_eq!(
        post_join_action(&JoinStage::Error("boom".to_owned()), Some("/x")),
        PostJoinAction::Stay
    );
}

// =============================================================
// Affordance wording
// =============================================================

#[test]
fn open_communities_offer_a_plain_join() {
    assert_eq!(join_affordance(Some(CommunityType::Open)), Some("Join Community"));
    assert_eq!(join_affordance(None), Some("Join Community"));
}

#[test]
fn approval_gated_communities_ask_to_request() {
    assert_eq!(join_affordance(Some(CommunityType::AdminApproved)), Some("Request to Join"));
}

#[test]
fn private_communities_offer_no_join() {
    assert_eq!(join_affordance(Some(CommunityType::Private)), None);
}

#[test]
fn settled_messages_name_the_community() {
    let joined = settled_message(&JoinStage::Joined, "Rust Meetup");
    assert_eq!(joined.as_deref(), Some("You have joined Rust Meetup."));
    let pending = settled_message(&JoinStage::Pending, "Rust Meetup");
    assert_eq!(
        pending.as_deref(),
        Some("Your request to join Rust Meetup is awaiting admin approval.")
    );
    assert_eq!(settled_message(&JoinStage::Joining, "Rust Meetup"), None);
}
