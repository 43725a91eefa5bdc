//! Query-string definitions backing the search routes.

use thiserror::Error;

pub mod search;

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors that can occur when processing request parameters.
pub enum FormError {
    #[error("Missing query parameter 'q'")]
    MissingQuery,
}
