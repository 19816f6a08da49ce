//! Pagination extractor
//!
//! Extracts `page` / `limit` query parameters for public post listings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use blog_core::PageRequest;
use serde::Deserialize;

use crate::response::ApiError;

const DEFAULT_LIMIT: u32 = PageRequest::DEFAULT_LIMIT;
const MAX_LIMIT: u32 = PageRequest::MAX_LIMIT;

/// Raw pagination query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Validated pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page number
    pub page: u32,
    /// Items per page (1-100)
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self {
            page: params.page.unwrap_or(1).max(1),
            limit: params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        }
    }
}

impl From<Pagination> for PageRequest {
    fn from(pagination: Pagination) -> Self {
        PageRequest::new(pagination.page, pagination.limit)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(Pagination::from(params))
    }
}
