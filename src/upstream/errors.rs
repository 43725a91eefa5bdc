use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("GitHub API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Request to GitHub API timed out")]
    Timeout,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid response from GitHub API: {0}")]
    Decode(String),
}

pub type UpstreamResult<T> = Result<T, UpstreamError>;

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return UpstreamError::Timeout;
        }
        if err.is_decode() {
            return UpstreamError::Decode(err.to_string());
        }
        match err.status() {
            Some(status) => UpstreamError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => UpstreamError::Transport(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for UpstreamError {
    fn from(err: serde_json::Error) -> Self {
        UpstreamError::Decode(format!("JSON parse error: {err}"))
    }
}
