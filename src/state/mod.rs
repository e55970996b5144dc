//! Client-side state shared across pages: the session and the join
//! flow's state machine.

pub mod join;
pub mod session;
