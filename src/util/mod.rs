//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability. The redirect, query,
//! and collection helpers are pure; `csrf` and `resume` wrap browser
//! storage behind pure, independently testable cores.

pub mod collections;
pub mod csrf;
pub mod dialog;
pub mod format;
pub mod query;
pub mod redirect;
pub mod resume;
