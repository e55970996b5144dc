//! Route-level page components.

pub mod apps;
pub mod community;
pub mod home;
pub mod login;
pub mod settings;
