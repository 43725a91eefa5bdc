//! Mock upstream implementation for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::search::SearchRequest;
use crate::models::github::GithubSearchPayload;
use crate::upstream::SearchUpstream;
use crate::upstream::errors::UpstreamResult;

mock! {
    pub Upstream {}

    #[async_trait]
    impl SearchUpstream for Upstream {
        async fn search_repositories(
            &self,
            request: &SearchRequest,
        ) -> UpstreamResult<GithubSearchPayload>;
    }
}
