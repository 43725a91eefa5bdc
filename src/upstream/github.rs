//! GitHub repository search client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Serialize;

use crate::domain::search::SearchRequest;
use crate::models::config::ServerConfig;
use crate::models::github::GithubSearchPayload;
use crate::upstream::SearchUpstream;
use crate::upstream::errors::{UpstreamError, UpstreamResult};

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_USER_AGENT: &str = "repo-search-app";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

#[derive(Debug, Serialize)]
struct SearchParams<'a> {
    q: &'a str,
    sort: &'static str,
    order: &'static str,
    per_page: i64,
    page: i64,
}

/// Client for the `/search/repositories` endpoint.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http_client: Client,
    base_url: String,
    token: Option<String>,
}

impl GithubClient {
    /// Creates a client sending `user_agent` and giving up after `timeout`.
    pub fn new(user_agent: &str, timeout: Duration) -> UpstreamResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let http_client = Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamError::Transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
        })
    }

    pub fn from_config(config: &ServerConfig) -> UpstreamResult<Self> {
        let client = Self::new(
            &config.user_agent,
            Duration::from_secs(config.request_timeout_secs),
        )?
        .with_base_url(&config.github_api_url);

        Ok(match config.github_token() {
            Some(token) => client.with_token(token),
            None => client,
        })
    }

    /// Points the client at another API root (useful for testing).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Attaches a bearer token to every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn search_url(&self) -> String {
        format!("{}/search/repositories", self.base_url.trim_end_matches('/'))
    }
}

/// Error bodies are best effort; a failed read is reported in their place.
fn body_or_read_error<E: std::fmt::Display>(body: Result<String, E>) -> String {
    body.unwrap_or_else(|e| format!("<failed to read response body: {e}>"))
}

#[async_trait]
impl SearchUpstream for GithubClient {
    async fn search_repositories(
        &self,
        request: &SearchRequest,
    ) -> UpstreamResult<GithubSearchPayload> {
        let params = SearchParams {
            q: request.query.as_str(),
            sort: "stars",
            order: "desc",
            per_page: request.per_page.get(),
            page: request.page.get(),
        };

        log::info!(
            "GitHub search: q='{}', per_page={}, page={}",
            params.q,
            params.per_page,
            params.page
        );

        let mut builder = self.http_client.get(self.search_url()).query(&params);
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message: body_or_read_error(response.text().await),
            });
        }

        let body = response.text().await?;
        let payload = serde_json::from_str::<GithubSearchPayload>(&body)?;

        Ok(payload)
    }
}
