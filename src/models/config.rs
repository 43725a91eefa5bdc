//! Configuration model loaded from external sources.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub static_dir: String,
    pub github_api_url: String,
    #[serde(default)]
    pub github_token: Option<String>,
    pub user_agent: String,
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Seeds the builder with the values used when no source overrides them.
    pub fn with_defaults(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        builder
            .set_default("address", "0.0.0.0")?
            .set_default("port", 5000_i64)?
            .set_default("static_dir", "./public")?
            .set_default("github_api_url", "https://api.github.com")?
            .set_default("user_agent", "repo-search-app")?
            .set_default("request_timeout_secs", 15_i64)
    }

    /// Bearer token for the upstream, ignoring blank values.
    pub fn github_token(&self) -> Option<&str> {
        self.github_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
