//! Reusable view components shared across pages.

pub mod community_card;
pub mod create_community_modal;
pub mod empty_state;
pub mod navbar;
pub mod register_app_modal;
