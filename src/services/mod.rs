use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::dto::search::ErrorResponse;
use crate::forms::FormError;
use crate::upstream::errors::UpstreamError;

pub mod search;

/// Status reported when the upstream failed without a response of its own.
pub const BAD_GATEWAY: u16 = 502;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("GitHub API error: {details}")]
    Upstream { status: Option<u16>, details: String },

    #[error("Server error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// HTTP status the error is reported with.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::InvalidRequest(_) => 400,
            ServiceError::Upstream { status, .. } => status.unwrap_or(BAD_GATEWAY),
            ServiceError::Internal(_) => 500,
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::InvalidRequest(val.to_string())
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::InvalidRequest(val.to_string())
    }
}

impl From<UpstreamError> for ServiceError {
    fn from(val: UpstreamError) -> Self {
        match &val {
            UpstreamError::Status { status, .. } => ServiceError::Upstream {
                status: Some(*status),
                details: val.to_string(),
            },
            UpstreamError::Timeout | UpstreamError::Transport(_) => ServiceError::Upstream {
                status: None,
                details: val.to_string(),
            },
            UpstreamError::Decode(_) => ServiceError::Internal(val.to_string()),
        }
    }
}

impl From<&ServiceError> for ErrorResponse {
    fn from(val: &ServiceError) -> Self {
        match val {
            ServiceError::InvalidRequest(message) => ErrorResponse::new(message.clone()),
            ServiceError::Upstream { details, .. } => ErrorResponse::new("GitHub API error")
                .status(val.status_code())
                .details(details.clone()),
            ServiceError::Internal(details) => {
                ErrorResponse::new("Server error").details(details.clone())
            }
        }
    }
}
