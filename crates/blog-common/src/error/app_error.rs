//! Application error types
//!
//! Failures that happen around the domain: session tokens, startup, and
//! infrastructure. Domain failures pass through unchanged.

use blog_core::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Missing authentication")]
    MissingAuth,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl AppError {
    /// HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidToken | Self::TokenExpired | Self::MissingAuth => 401,
            Self::Database(_) | Self::Config(_) | Self::Internal(_) => 500,
            Self::Domain(e) => domain_status(e),
        }
    }

    /// Error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::MissingAuth => "MISSING_AUTH",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
        }
    }
}

/// HTTP status for a domain error
#[must_use]
pub fn domain_status(e: &DomainError) -> u16 {
    if e.is_not_found() {
        404
    } else if e.is_authentication() {
        401
    } else if e.is_authorization() {
        403
    } else if e.is_validation() {
        400
    } else if e.is_conflict() {
        409
    } else {
        500
    }
}

#[cfg(test)]
mod tests {
    use blog_core::PostId;

    use super::*;

    #[test]
    fn test_session_errors_are_unauthorized() {
        for err in [AppError::InvalidToken, AppError::TokenExpired, AppError::MissingAuth] {
            assert_eq!(err.status_code(), 401);
        }
        assert_eq!(AppError::TokenExpired.error_code(), "TOKEN_EXPIRED");
        assert_eq!(AppError::Database("down".into()).status_code(), 500);
    }

    #[test]
    fn test_domain_status_codes() {
        assert_eq!(domain_status(&DomainError::Unauthenticated), 401);
        assert_eq!(domain_status(&DomainError::Forbidden("x".into())), 403);
        assert_eq!(domain_status(&DomainError::PostNotFound(PostId::new())), 404);
        assert_eq!(domain_status(&DomainError::EmptyContent), 400);
        assert_eq!(domain_status(&DomainError::SlugAlreadyExists("a".into())), 409);
        assert_eq!(domain_status(&DomainError::DatabaseError("x".into())), 500);
    }

    #[test]
    fn test_domain_errors_pass_through() {
        let err = AppError::from(DomainError::EmptyContent);
        assert_eq!(err.error_code(), "EMPTY_CONTENT");
        assert_eq!(err.status_code(), 400);
    }
}
