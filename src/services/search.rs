//! Service proxying repository searches to the upstream.

use crate::domain::search::{RepositorySummary, SearchPage, SearchRequest};
use crate::dto::search::SearchResponse;
use crate::forms::search::SearchQueryParams;
use crate::models::github::{GithubRepository, GithubSearchPayload};
use crate::services::{ServiceError, ServiceResult};
use crate::upstream::SearchUpstream;

impl From<GithubRepository> for RepositorySummary {
    fn from(item: GithubRepository) -> Self {
        let owner = item.owner_login().map(str::to_string);
        Self {
            name: item.name,
            full_name: item.full_name,
            html_url: item.html_url,
            description: item.description,
            language: item.language,
            stars: item.stargazers_count,
            owner,
        }
    }
}

impl From<GithubSearchPayload> for SearchPage {
    fn from(payload: GithubSearchPayload) -> Self {
        let total_count = payload.total_count();
        let results = payload
            .into_items()
            .into_iter()
            .map(RepositorySummary::from)
            .collect();

        Self {
            total_count,
            results,
        }
    }
}

/// Validates the query string, performs one upstream call and shapes the
/// result page.
pub async fn search_repositories<U>(
    upstream: &U,
    params: SearchQueryParams,
) -> ServiceResult<SearchResponse>
where
    U: SearchUpstream + ?Sized,
{
    let request = SearchRequest::try_from(params)?;

    let payload = upstream
        .search_repositories(&request)
        .await
        .map_err(|err| {
            log::error!(
                "GitHub search failed for q='{}', per_page={}, page={}: {err:?}",
                request.query,
                request.per_page,
                request.page
            );
            ServiceError::from(err)
        })?;

    Ok(SearchResponse::new(request, SearchPage::from(payload)))
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::models::github::GithubOwner;
    use crate::upstream::errors::UpstreamError;
    use crate::upstream::mock::MockUpstream;

    fn params(q: &str, limit: Option<&str>, page: Option<&str>) -> SearchQueryParams {
        SearchQueryParams {
            q: Some(q.to_string()),
            limit: limit.map(str::to_string),
            page: page.map(str::to_string),
        }
    }

    fn repository(name: &str, owner: Option<&str>, stars: u64) -> GithubRepository {
        GithubRepository {
            name: Some(name.to_string()),
            full_name: owner.map(|o| format!("{o}/{name}")),
            html_url: Some(format!("https://github.com/{name}")),
            description: None,
            language: Some("Rust".to_string()),
            stargazers_count: Some(stars),
            owner: owner.map(|login| GithubOwner {
                login: Some(login.to_string()),
            }),
        }
    }

    fn payload(total_count: u64, items: Vec<GithubRepository>) -> GithubSearchPayload {
        GithubSearchPayload {
            total_count: Some(total_count),
            items: Some(items),
        }
    }

    /// Blank queries are rejected before the upstream is touched.
    #[tokio::test]
    async fn blank_query_skips_upstream() {
        let mut upstream = MockUpstream::new();
        upstream.expect_search_repositories().times(0);

        for q in ["", "   ", "\t\n"] {
            let result = search_repositories(&upstream, params(q, None, None)).await;
            assert!(matches!(result, Err(ServiceError::InvalidRequest(_))));
        }
    }

    /// The validated request is forwarded with its defaults applied.
    #[tokio::test]
    async fn forwards_trimmed_query_with_defaults() {
        let mut upstream = MockUpstream::new();
        upstream
            .expect_search_repositories()
            .withf(|request| {
                request.query.as_str() == "http client"
                    && request.per_page.get() == 10
                    && request.page.get() == 1
            })
            .times(1)
            .returning(|_| Ok(payload(0, vec![])));

        let response = search_repositories(&upstream, params("  http client ", None, None))
            .await
            .expect("search should succeed");

        assert_eq!(response.query, "http client");
        assert_eq!(response.count, 0);
        assert!(!response.has_next);
    }

    /// Projection keeps upstream order and tolerates a missing owner.
    #[tokio::test]
    async fn projects_results_in_upstream_order() {
        let mut upstream = MockUpstream::new();
        upstream.expect_search_repositories().times(1).returning(|_| {
            Ok(payload(
                2,
                vec![
                    repository("first", Some("alice"), 900),
                    repository("second", None, 10),
                ],
            ))
        });

        let response = search_repositories(&upstream, params("rust", Some("2"), None))
            .await
            .expect("search should succeed");

        assert_eq!(response.total_count, 2);
        assert_eq!(response.count, 2);
        assert_eq!(response.results[0].name.as_deref(), Some("first"));
        assert_eq!(response.results[0].owner.as_deref(), Some("alice"));
        assert_eq!(response.results[0].full_name.as_deref(), Some("alice/first"));
        assert_eq!(response.results[0].stars, Some(900));
        assert_eq!(response.results[1].name.as_deref(), Some("second"));
        assert_eq!(response.results[1].owner, None);
    }

    /// Absent `items` and `total_count` default to an empty page.
    #[tokio::test]
    async fn empty_payload_defaults() {
        let mut upstream = MockUpstream::new();
        upstream
            .expect_search_repositories()
            .times(1)
            .returning(|_| Ok(GithubSearchPayload::default()));

        let response = search_repositories(&upstream, params("nothing", None, None))
            .await
            .expect("search should succeed");

        assert_eq!(response.total_count, 0);
        assert!(response.results.is_empty());
        assert!(!response.has_next);
    }

    /// The reported total is capped at the upstream's result window.
    #[tokio::test]
    async fn has_next_respects_result_window() {
        let mut upstream = MockUpstream::new();
        upstream
            .expect_search_repositories()
            .times(2)
            .returning(|_| Ok(payload(5000, vec![])));

        let page_99 = search_repositories(&upstream, params("popular", Some("10"), Some("99")))
            .await
            .unwrap();
        let page_100 = search_repositories(&upstream, params("popular", Some("10"), Some("100")))
            .await
            .unwrap();

        assert!(page_99.has_next);
        assert!(!page_100.has_next);
        assert_eq!(page_100.total_count, 5000);
    }

    /// A non-success upstream status is surfaced with the same code.
    #[tokio::test]
    async fn upstream_status_becomes_service_error() {
        let mut upstream = MockUpstream::new();
        upstream.expect_search_repositories().times(1).returning(|_| {
            Err(UpstreamError::Status {
                status: 422,
                message: "Validation Failed".to_string(),
            })
        });

        let result = search_repositories(&upstream, params("bad:query", None, None)).await;

        match result {
            Err(err @ ServiceError::Upstream { .. }) => assert_eq!(err.status_code(), 422),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    /// Undecodable upstream bodies are internal errors.
    #[tokio::test]
    async fn decode_failure_becomes_internal_error() {
        let mut upstream = MockUpstream::new();
        upstream
            .expect_search_repositories()
            .times(1)
            .returning(|_| Err(UpstreamError::Decode("expected value".to_string())));

        let result = search_repositories(&upstream, params("rust", None, None)).await;

        assert!(matches!(result, Err(ServiceError::Internal(_))));
    }

    /// Identical requests are never served from a cache.
    #[tokio::test]
    async fn repeated_requests_call_upstream_each_time() {
        let mut upstream = MockUpstream::new();
        upstream
            .expect_search_repositories()
            .times(2)
            .returning(|_| Ok(payload(1, vec![repository("only", Some("bob"), 1)])));

        let first = search_repositories(&upstream, params("only", None, None))
            .await
            .unwrap();
        let second = search_repositories(&upstream, params("only", None, None))
            .await
            .unwrap();

        assert_eq!(first, second);
    }
}
