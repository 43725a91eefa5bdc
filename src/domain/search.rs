//! Domain model for repository search requests and their results.

use serde::{Deserialize, Serialize};

use crate::domain::types::{PageNumber, PageSize, SearchTerm};

/// Validated search request ready to be sent upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: SearchTerm,
    pub per_page: PageSize,
    pub page: PageNumber,
}

impl SearchRequest {
    #[must_use]
    pub fn new(query: SearchTerm) -> Self {
        Self {
            query,
            per_page: PageSize::default(),
            page: PageNumber::default(),
        }
    }

    #[must_use]
    pub fn per_page(mut self, per_page: PageSize) -> Self {
        self.per_page = per_page;
        self
    }

    #[must_use]
    pub fn page(mut self, page: PageNumber) -> Self {
        self.page = page;
        self
    }
}

/// Projection of an upstream repository record onto the fields we expose.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub html_url: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub stars: Option<u64>,
    pub owner: Option<String>,
}

/// One page of projected results together with the upstream's total count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    pub total_count: u64,
    pub results: Vec<RepositorySummary>,
}
