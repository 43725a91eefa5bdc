//! Wire models of the GitHub repository search payload.
//!
//! Every field is optional: the upstream omits or nulls fields freely and a
//! missing value must surface as a typed default rather than a decode error.

use serde::Deserialize;

/// Top level body of `GET /search/repositories`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct GithubSearchPayload {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub items: Option<Vec<GithubRepository>>,
}

/// One repository record as returned by the upstream.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct GithubRepository {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    #[serde(default)]
    pub owner: Option<GithubOwner>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct GithubOwner {
    #[serde(default)]
    pub login: Option<String>,
}

impl GithubSearchPayload {
    pub fn total_count(&self) -> u64 {
        self.total_count.unwrap_or(0)
    }

    pub fn into_items(self) -> Vec<GithubRepository> {
        self.items.unwrap_or_default()
    }
}

impl GithubRepository {
    /// Login of the owning account, if the owner object is present.
    pub fn owner_login(&self) -> Option<&str> {
        self.owner.as_ref().and_then(|owner| owner.login.as_deref())
    }
}
