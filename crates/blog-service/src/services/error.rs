//! Service layer error types

use blog_common::domain_status;
use blog_core::DomainError;
use thiserror::Error;
use validator::ValidationErrors;

/// Failure of a service operation
///
/// Domain failures carry their own status and code; the rest are request
/// shape problems caught before any repository is touched.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Validation error: {0}")]
    Invalid(#[from] ValidationErrors),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => domain_status(e),
            Self::Invalid(_) | Self::Validation(_) => 400,
        }
    }

    /// Error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Invalid(_) | Self::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Field-level validation details, when there are any
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::Invalid(errors) => serde_json::to_value(errors.field_errors()).ok(),
            _ => None,
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
