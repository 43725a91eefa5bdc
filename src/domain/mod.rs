//! Domain types exposed by the search service layer.

pub mod search;
pub mod types;
