//! Backend communication: wire types, the REST client, and its error
//! type.

pub mod api;
pub mod error;
pub mod types;
