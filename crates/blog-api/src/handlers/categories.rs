//! Category handlers

use axum::{extract::State, Json};
use blog_core::CategoryId;
use blog_service::dto::{
    CategoryResponse, CreateCategoryRequest, PostListResponse, UpdateCategoryRequest,
};
use blog_service::{CategoryService, PublicService};

use crate::extractors::{ApiPath, AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CategoryResponse>>> {
    let service = CategoryService::new(state.services());
    Ok(Json(service.list_categories().await?))
}

/// POST /categories
pub async fn create_category(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateCategoryRequest>,
) -> ApiResult<Created<CategoryResponse>> {
    let service = CategoryService::new(state.services());
    let category = service.create_category(&caller, request).await?;
    Ok(Created(category))
}

/// PATCH /categories/{category_id}
pub async fn update_category(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiPath(category_id): ApiPath<CategoryId>,
    ValidatedJson(request): ValidatedJson<UpdateCategoryRequest>,
) -> ApiResult<Json<CategoryResponse>> {
    let service = CategoryService::new(state.services());
    let category = service
        .update_category(&caller, category_id, request)
        .await?;
    Ok(Json(category))
}

/// DELETE /categories/{category_id}
pub async fn delete_category(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    ApiPath(category_id): ApiPath<CategoryId>,
) -> ApiResult<NoContent> {
    let service = CategoryService::new(state.services());
    service.delete_category(&caller, category_id).await?;
    Ok(NoContent)
}

/// Published posts in a category; unknown slugs give an empty page
///
/// GET /categories/slug/{slug}/posts?page&limit
pub async fn category_posts(
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
    pagination: Pagination,
) -> ApiResult<Json<PostListResponse>> {
    let service = PublicService::new(state.services());
    let posts = service
        .get_posts_by_category(&slug, pagination.into())
        .await?;
    Ok(Json(posts))
}
