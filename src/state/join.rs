//! Community join flow state machine.
//!
//! DESIGN
//! ======
//! `idle -> joining -> {joined | already_member | pending | error}`.
//!
//! `joined`, `already_member`, and `pending` are settled: a page visit
//! reaches at most one of them, once. `error` is recoverable; the join
//! affordance stays live so the user can retry. The machine is a plain
//! struct held in a signal by the community page, so every transition is
//! unit-testable without rendering.
//!
//! Entry is either manual (the join button) or automatic (the page was
//! opened with `action=join` by an external app). The automatic trigger
//! runs inside an effect that re-fires whenever the community detail
//! refetches, so [`JoinFlow`] records that it has fired once and refuses
//! to fire again for the lifetime of the page.
//!
//! After a settled outcome the page consults [`post_join_action`] to
//! decide whether to bounce the user back to the caller's `return_to`
//! URL, offer a manual link, or stay put. Only already-sanitized targets
//! ever reach this module.

#[cfg(test)]
#[path = "join_test.rs"]
mod join_test;

use crate::net::types::{CommunityDetail, CommunityType, JoinStatus};
use crate::util::query::JoinQuery;

/// Delay between showing a join confirmation and navigating back to the
/// caller's `return_to` URL, long enough to read the message.
pub const RETURN_DELAY_MS: u64 = 1500;

/// Progress of the current page's join attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum JoinStage {
    /// No attempt made this visit.
    #[default]
    Idle,
    /// Join request in flight.
    Joining,
    /// Membership is now active.
    Joined,
    /// The caller was a member all along.
    AlreadyMember,
    /// Request recorded; awaiting admin approval.
    Pending,
    /// The attempt failed with a displayable message. Retryable.
    Error(String),
}

impl JoinStage {
    /// True while a request is in flight; disables the join affordance.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Joining)
    }

    /// True once the attempt has concluded in a non-error outcome.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Joined | Self::AlreadyMember | Self::Pending)
    }
}

/// The join state machine plus its one-shot automatic trigger latch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JoinFlow {
    stage: JoinStage,
    auto_fired: bool,
}

impl JoinFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> &JoinStage {
        &self.stage
    }

    /// Attempt `idle -> joining`. Returns true when the transition
    /// happened and the caller should issue the join request. A second
    /// activation while joining, or after a settled outcome, is refused;
    /// a failed attempt may be retried.
    pub fn begin(&mut self) -> bool {
        match self.stage {
            JoinStage::Idle | JoinStage::Error(_) => {
                self.stage = JoinStage::Joining;
                true
            }
            _ => false,
        }
    }

    /// Automatic entry: fires when the page was opened with a join
    /// directive, the caller is authenticated, and the caller is not
    /// already a member. Latches after the first evaluation that fires,
    /// so detail refetches cannot re-trigger the request.
    pub fn try_auto_begin(&mut self, query: &JoinQuery, detail: &CommunityDetail) -> bool {
        if self.auto_fired
            || !query.join_requested
            || !detail.is_authenticated
            || detail.is_member
        {
            return false;
        }
        self.auto_fired = true;
        self.begin()
    }

    /// Settle the in-flight attempt with the server's outcome. Ignored
    /// unless a request is actually in flight, so a stale response
    /// cannot clobber a newer state.
    pub fn resolve(&mut self, status: JoinStatus) {
        if self.stage != JoinStage::Joining {
            return;
        }
        self.stage = match status {
            JoinStatus::Joined => JoinStage::Joined,
            JoinStatus::Pending => JoinStage::Pending,
            JoinStatus::AlreadyMember => JoinStage::AlreadyMember,
        };
    }

    /// Fail the in-flight attempt with a displayable message. Ignored
    /// unless a request is in flight.
    pub fn fail(&mut self, message: impl Into<String>) {
        if self.stage != JoinStage::Joining {
            return;
        }
        self.stage = JoinStage::Error(message.into());
    }
}

/// What the page does after the join attempt concludes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PostJoinAction {
    /// Show the confirmation, then navigate the full browser context to
    /// the caller's URL after [`RETURN_DELAY_MS`].
    RedirectAfterDelay { target: String },
    /// Offer a manual "return to app" link; never auto-navigate, the
    /// user must see that approval is still pending before leaving.
    OfferReturn { target: String },
    /// Offer a manual affordance into the full community view.
    EnterCommunity,
    /// Nothing beyond the stage's own message.
    Stay,
}

/// Derive the post-outcome behavior from the settled stage and the
/// sanitized `return_to` target, if any.
pub fn post_join_action(stage: &JoinStage, return_to: Option<&str>) -> PostJoinAction {
    match stage {
        JoinStage::Joined | JoinStage::AlreadyMember => match return_to {
            Some(target) => PostJoinAction::RedirectAfterDelay {
                target: target.to_owned(),
            },
            None => PostJoinAction::EnterCommunity,
        },
        JoinStage::Pending => match return_to {
            Some(target) => PostJoinAction::OfferReturn {
                target: target.to_owned(),
            },
            None => PostJoinAction::Stay,
        },
        _ => PostJoinAction::Stay,
    }
}

/// Label for the self-service join affordance, or `None` when the
/// community does not offer one. Records without a policy predate the
/// field and behave as open.
pub fn join_affordance(community_type: Option<CommunityType>) -> Option<&'static str> {
    match community_type {
        Some(CommunityType::Private) => None,
        Some(CommunityType::AdminApproved) => Some("Request to Join"),
        Some(CommunityType::Open) | None => Some("Join Community"),
    }
}

/// Confirmation copy for each settled outcome.
pub fn settled_message(stage: &JoinStage, community_name: &str) -> Option<String> {
    match stage {
        JoinStage::Joined => Some(format!("You have joined {community_name}.")),
        JoinStage::AlreadyMember => {
            Some(format!("You are already a member of {community_name}."))
        }
        JoinStage::Pending => Some(format!(
            "Your request to join {community_name} is awaiting admin approval."
        )),
        _ => None,
    }
}
