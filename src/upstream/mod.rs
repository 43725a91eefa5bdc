//! Outbound search backends.

use async_trait::async_trait;

use crate::domain::search::SearchRequest;
use crate::models::github::GithubSearchPayload;
use crate::upstream::errors::UpstreamResult;

pub mod errors;
pub mod github;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// A backend able to answer one repository search per call.
///
/// Implementations issue exactly one outbound request per invocation and
/// keep no state between calls.
#[async_trait]
pub trait SearchUpstream: Send + Sync {
    async fn search_repositories(
        &self,
        request: &SearchRequest,
    ) -> UpstreamResult<GithubSearchPayload>;
}
