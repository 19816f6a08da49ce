//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use blog_core::{Role, UserId};
use integration_tests::{
    assert_error_code, assert_json, assert_status, check_test_env, fixtures::*, png_bytes,
    TestServer, TestUser,
};
use reqwest::{header, StatusCode};

async fn create_post(server: &TestServer, author: &TestUser, request: &CreatePostRequest) -> PostResponse {
    let response = server
        .post_auth("/api/v1/posts", &author.token, request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn toggle(server: &TestServer, user: &TestUser, post: &PostResponse, kind: &str) -> reqwest::Response {
    server
        .post_empty_auth(&format!("/api/v1/posts/{}/reactions/{kind}", post.id), &user.token)
        .await
        .unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/@me/posts").await.unwrap();
    let code = assert_error_code(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTH");
}

#[tokio::test]
async fn test_expired_and_garbage_tokens_are_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let expired = server
        .token_for(UserId::new(), Role::Author, chrono::Duration::hours(-2))
        .unwrap();

    let response = server.get_auth("/api/v1/users/@me/posts", &expired).await.unwrap();
    let code = assert_error_code(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "TOKEN_EXPIRED");

    let response = server
        .get_auth("/api/v1/users/@me/posts", "not-a-token")
        .await
        .unwrap();
    let code = assert_error_code(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_TOKEN");
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_post_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.seed_user(Role::Author).await.unwrap();

    let post = create_post(&server, &author, &CreatePostRequest::draft()).await;
    assert_eq!(post.status, "draft");
    assert_eq!(post.author_id, author.id.to_string());
    assert!(post.slug.starts_with("integration-post-"));

    // Drafts are invisible publicly
    let response = server
        .get(&format!("/api/v1/posts/slug/{}", post.slug))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .post_empty_auth(&format!("/api/v1/posts/{}/publish", post.id), &author.token)
        .await
        .unwrap();
    let published: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(published.status, "published");
    assert!(published.published_at.is_some());

    let response = server
        .get(&format!("/api/v1/posts/slug/{}", post.slug))
        .await
        .unwrap();
    let public: PublicPostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(public.id, post.id);
    assert_eq!(public.author.id, author.id.to_string());
    assert!(public.reading_time >= 1);

    let response = server
        .get_auth("/api/v1/users/@me/posts", &author.token)
        .await
        .unwrap();
    let mine: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(mine.iter().any(|p| p.id == post.id));

    let response = server
        .delete_auth(&format!("/api/v1/posts/{}", post.id), &author.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    server.delete_user(&author).await.unwrap();
}

#[tokio::test]
async fn test_reader_cannot_create_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let reader = server.seed_user(Role::Reader).await.unwrap();

    let response = server
        .post_auth("/api/v1/posts", &reader.token, &CreatePostRequest::draft())
        .await
        .unwrap();
    let code = assert_error_code(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "FORBIDDEN");

    server.delete_user(&reader).await.unwrap();
}

#[tokio::test]
async fn test_other_author_cannot_edit_post() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.seed_user(Role::Author).await.unwrap();
    let other = server.seed_user(Role::Author).await.unwrap();

    let post = create_post(&server, &author, &CreatePostRequest::draft()).await;

    let response = server
        .patch_auth(
            &format!("/api/v1/posts/{}", post.id),
            &other.token,
            &serde_json::json!({ "title": "Hijacked" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    server.delete_user(&author).await.unwrap();
    server.delete_user(&other).await.unwrap();
}

#[tokio::test]
async fn test_invalid_post_body_is_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.seed_user(Role::Author).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/posts",
            &author.token,
            &serde_json::json!({ "title": "", "content": "x" }),
        )
        .await
        .unwrap();
    let code = assert_error_code(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");

    let response = server
        .get("/api/v1/posts/not-a-uuid/comments")
        .await
        .unwrap();
    let code = assert_error_code(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_PATH_PARAMETER");

    server.delete_user(&author).await.unwrap();
}

// ============================================================================
// Category Tests
// ============================================================================

#[tokio::test]
async fn test_category_listing_by_slug() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.seed_user(Role::Admin).await.unwrap();
    let author = server.seed_user(Role::Author).await.unwrap();

    let response = server
        .post_auth("/api/v1/categories", &author.token, &CreateCategoryRequest::unique())
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .post_auth("/api/v1/categories", &admin.token, &CreateCategoryRequest::unique())
        .await
        .unwrap();
    let category: CategoryResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let post = create_post(&server, &author, &CreatePostRequest::published()).await;
    let link = format!("/api/v1/posts/{}/categories/{}", post.id, category.id);
    for _ in 0..2 {
        let response = server.put_auth(&link, &author.token).await.unwrap();
        assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    }

    let response = server
        .get(&format!("/api/v1/categories/slug/{}/posts", category.slug))
        .await
        .unwrap();
    let page: PostListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 10);
    assert_eq!(page.posts[0].categories[0].id, category.id);

    let response = server
        .get("/api/v1/categories/slug/no-such-category/posts")
        .await
        .unwrap();
    let empty: PostListResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(empty.total, 0);

    let response = server
        .delete_auth(&format!("/api/v1/categories/{}", category.id), &admin.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    server.delete_user(&author).await.unwrap();
    server.delete_user(&admin).await.unwrap();
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_thread() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.seed_user(Role::Author).await.unwrap();
    let reader = server.seed_user(Role::Reader).await.unwrap();
    let post = create_post(&server, &author, &CreatePostRequest::published()).await;
    let comments = format!("/api/v1/posts/{}/comments", post.id);

    let response = server
        .post_auth(&comments, &reader.token, &CreateCommentRequest::root("Great read"))
        .await
        .unwrap();
    let root: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(&comments, &author.token, &CreateCommentRequest::reply("Thank you", &root.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(&comments, &reader.token, &CreateCommentRequest::root("   "))
        .await
        .unwrap();
    let code = assert_error_code(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "EMPTY_CONTENT");

    let response = server.get(&comments).await.unwrap();
    let tree: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(tree.len(), 1);
    assert_eq!(tree[0].content, "Great read");
    assert_eq!(tree[0].replies.len(), 1);
    assert_eq!(tree[0].replies[0].parent_id.as_deref(), Some(root.id.as_str()));

    let response = server.get(&format!("{comments}/count")).await.unwrap();
    let count: CommentCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count.count, 2);

    // Removing the root hides its reply from the thread
    let response = server
        .delete_auth(&format!("/api/v1/comments/{}", root.id), &reader.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&comments).await.unwrap();
    let tree: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(tree.is_empty());

    server.delete_user(&reader).await.unwrap();
    server.delete_user(&author).await.unwrap();
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_reaction_toggle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.seed_user(Role::Author).await.unwrap();
    let reader = server.seed_user(Role::Reader).await.unwrap();
    let post = create_post(&server, &author, &CreatePostRequest::published()).await;

    let response = server
        .client
        .post(format!("{}/api/v1/posts/{}/reactions/like", server.base_url(), post.id))
        .send()
        .await
        .unwrap();
    let code = assert_error_code(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "UNAUTHORIZED");

    let added: ToggleReactionResponse =
        assert_json(toggle(&server, &reader, &post, "like").await, StatusCode::OK).await.unwrap();
    assert_eq!(added.action, "added");
    assert_eq!(added.counts.like, 1);

    let switched: ToggleReactionResponse =
        assert_json(toggle(&server, &reader, &post, "clap").await, StatusCode::OK).await.unwrap();
    assert_eq!(switched.action, "added");
    assert_eq!(switched.kind.as_deref(), Some("clap"));
    assert_eq!(switched.counts.like, 0);
    assert_eq!(switched.counts.clap, 1);

    let removed: ToggleReactionResponse =
        assert_json(toggle(&server, &reader, &post, "clap").await, StatusCode::OK).await.unwrap();
    assert_eq!(removed.action, "removed");
    assert_eq!(removed.counts.total, 0);

    let response = toggle(&server, &reader, &post, "confused").await;
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    server.delete_user(&reader).await.unwrap();
    server.delete_user(&author).await.unwrap();
}

#[tokio::test]
async fn test_reaction_counts_show_viewer_reaction() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.seed_user(Role::Author).await.unwrap();
    let post = create_post(&server, &author, &CreatePostRequest::published()).await;
    let quiet = create_post(&server, &author, &CreatePostRequest::published()).await;

    let response = server
        .post_empty_auth(&format!("/api/v1/posts/{}/reactions/fire", post.id), &author.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let path = format!("/api/v1/posts/{}/reactions", post.id);
    let anonymous: ReactionCounts =
        assert_json(server.get(&path).await.unwrap(), StatusCode::OK).await.unwrap();
    assert_eq!(anonymous.fire, 1);
    assert_eq!(anonymous.user_reaction, None);

    let viewer: ReactionCounts = assert_json(
        server.get_auth(&path, &author.token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(viewer.user_reaction.as_deref(), Some("fire"));

    let request = BatchReactionsRequest {
        post_ids: vec![post.id.clone(), quiet.id.clone()],
    };
    let response = server.post("/api/v1/reactions/batch", &request).await.unwrap();
    let batch: BatchReactionsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(batch.counts[&post.id].total, 1);
    assert_eq!(batch.counts[&quiet.id].total, 0);

    server.delete_user(&author).await.unwrap();
}

// ============================================================================
// Media Tests
// ============================================================================

#[tokio::test]
async fn test_media_upload_and_delete() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.seed_user(Role::Author).await.unwrap();

    let response = server
        .upload_auth(&author.token, "cover photo.png", "image/png", png_bytes())
        .await
        .unwrap();
    let media: MediaResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(media.original_filename, "cover photo.png");
    assert!(media.filename.ends_with("-cover_photo.png"));
    assert_eq!(media.mime_type, "image/png");

    // Served back as a static file
    let response = server.get(&format!("/uploads/{}", media.filename)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.bytes().await.unwrap().to_vec(), png_bytes());

    let response = server
        .get_auth("/api/v1/users/@me/media", &author.token)
        .await
        .unwrap();
    let mine: Vec<MediaResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(mine.iter().any(|m| m.id == media.id));

    let response = server
        .delete_auth(&format!("/api/v1/media/{}", media.id), &author.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&format!("/uploads/{}", media.filename)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    server.delete_user(&author).await.unwrap();
}

#[tokio::test]
async fn test_media_upload_rejects_non_images() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.seed_user(Role::Author).await.unwrap();

    let response = server
        .upload_auth(&author.token, "notes.txt", "text/plain", b"hello".to_vec())
        .await
        .unwrap();
    let code = assert_error_code(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "UNSUPPORTED_MEDIA_TYPE");

    server.delete_user(&author).await.unwrap();
}

// ============================================================================
// Public Read and Feed Tests
// ============================================================================

#[tokio::test]
async fn test_author_posts_and_feed() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.seed_user(Role::Author).await.unwrap();
    let post = create_post(&server, &author, &CreatePostRequest::published()).await;
    create_post(&server, &author, &CreatePostRequest::draft()).await;

    let response = server
        .get(&format!("/api/v1/users/{}/posts?page=1&limit=5", author.id))
        .await
        .unwrap();
    let page: AuthorPostsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.author.map(|a| a.id), Some(author.id.to_string()));

    let response = server.get(&format!("/rss/author/{}", author.id)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/xml; charset=utf-8"
    );
    assert!(response.headers().contains_key(header::CACHE_CONTROL));
    let xml = response.text().await.unwrap();
    assert!(xml.contains(&format!("/blog/{}", post.slug)));

    let response = server
        .get(&format!("/rss/author/{}", UserId::new()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = server.get("/rss/category/no-such-category").await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    server.delete_user(&author).await.unwrap();
}

#[tokio::test]
async fn test_recent_posts_limit() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.seed_user(Role::Author).await.unwrap();
    for _ in 0..3 {
        create_post(&server, &author, &CreatePostRequest::published()).await;
    }

    let response = server.get("/api/v1/posts/recent?limit=2").await.unwrap();
    let recent: Vec<PublicPostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(recent.len(), 2);

    let response = server.get("/rss").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    server.delete_user(&author).await.unwrap();
}
