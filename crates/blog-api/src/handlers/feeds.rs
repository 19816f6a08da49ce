//! RSS feed handlers
//!
//! Served outside `/api/v1` as `application/xml` with shared-cache headers.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use blog_core::UserId;
use blog_service::{FeedService, FEED_CACHE_CONTROL, FEED_CONTENT_TYPE};

use crate::extractors::ApiPath;
use crate::response::ApiResult;
use crate::state::AppState;

/// A rendered RSS document
pub struct RssFeed(pub String);

impl IntoResponse for RssFeed {
    fn into_response(self) -> Response {
        (
            [
                (header::CONTENT_TYPE, FEED_CONTENT_TYPE),
                (header::CACHE_CONTROL, FEED_CACHE_CONTROL),
            ],
            self.0,
        )
            .into_response()
    }
}

/// GET /rss
pub async fn site_feed(State(state): State<AppState>) -> ApiResult<RssFeed> {
    let service = FeedService::new(state.services());
    Ok(RssFeed(service.site_feed().await?))
}

/// GET /rss/category/{slug}
pub async fn category_feed(
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
) -> ApiResult<RssFeed> {
    let service = FeedService::new(state.services());
    Ok(RssFeed(service.category_feed(&slug).await?))
}

/// GET /rss/author/{author_id}
pub async fn author_feed(
    State(state): State<AppState>,
    ApiPath(author_id): ApiPath<UserId>,
) -> ApiResult<RssFeed> {
    let service = FeedService::new(state.services());
    Ok(RssFeed(service.author_feed(author_id).await?))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn test_feed_response_headers() {
        let response = RssFeed("<rss/>".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            FEED_CONTENT_TYPE
        );
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            FEED_CACHE_CONTROL
        );
    }
}
