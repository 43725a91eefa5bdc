//! JSON bodies returned by `/api/search`.

use serde::{Deserialize, Serialize};

use crate::domain::search::{RepositorySummary, SearchPage, SearchRequest};
use crate::domain::types::{PageNumber, PageSize};
use crate::pagination::has_next;

/// Successful search payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub page: PageNumber,
    pub per_page: PageSize,
    pub total_count: u64,
    pub count: usize,
    pub has_next: bool,
    pub results: Vec<RepositorySummary>,
}

impl SearchResponse {
    /// Combines the echoed request with one page of upstream results.
    pub fn new(request: SearchRequest, page: SearchPage) -> Self {
        let SearchRequest {
            query,
            per_page,
            page: page_number,
        } = request;
        let SearchPage {
            total_count,
            results,
        } = page;

        Self {
            query: query.into_inner(),
            page: page_number,
            per_page,
            total_count,
            count: results.len(),
            has_next: has_next(total_count, page_number, per_page),
            results,
        }
    }
}

/// Error payload; optional members are omitted when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status: None,
            details: None,
        }
    }

    pub fn status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
