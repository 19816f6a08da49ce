//! Post entity <-> model mapper

use std::collections::HashMap;

use blog_core::entities::{AuthorSummary, CategorySummary, Post, PostStatus, PublicPost};
use blog_core::text::reading_time;
use blog_core::value_objects::{CategoryId, PostId, UserId};
use uuid::Uuid;

use crate::models::{PostCategoryModel, PostModel, PublicPostModel};

/// Convert database status string to PostStatus; unknown values stay hidden as drafts
fn parse_status(status: &str) -> PostStatus {
    status.parse().unwrap_or_default()
}

/// Convert PostModel to Post entity
impl From<PostModel> for Post {
    fn from(model: PostModel) -> Self {
        Post {
            id: PostId::from_uuid(model.id),
            author_id: UserId::from_uuid(model.author_id),
            title: model.title,
            slug: model.slug,
            content: model.content,
            excerpt: model.excerpt,
            featured_image: model.featured_image,
            status: parse_status(&model.status),
            published_at: model.published_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Post entity reference as bind values for insert/update
pub struct PostWrite<'a> {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: &'a str,
    pub slug: &'a str,
    pub content: &'a str,
    pub excerpt: Option<&'a str>,
    pub featured_image: Option<&'a str>,
    pub status: &'static str,
}

impl<'a> PostWrite<'a> {
    pub fn new(post: &'a Post) -> Self {
        Self {
            id: post.id.into_inner(),
            author_id: post.author_id.into_inner(),
            title: &post.title,
            slug: &post.slug,
            content: &post.content,
            excerpt: post.excerpt.as_deref(),
            featured_image: post.featured_image.as_deref(),
            status: post.status.as_str(),
        }
    }
}

/// Join public post rows with their categories, preserving row order
pub fn assemble_public_posts(
    rows: Vec<PublicPostModel>,
    categories: Vec<PostCategoryModel>,
) -> Vec<PublicPost> {
    let mut by_post: HashMap<Uuid, Vec<CategorySummary>> = HashMap::new();
    for cat in categories {
        by_post.entry(cat.post_id).or_default().push(CategorySummary {
            id: CategoryId::from_uuid(cat.id),
            name: cat.name,
            slug: cat.slug,
        });
    }

    rows.into_iter()
        .map(|row| {
            let categories = by_post.remove(&row.id).unwrap_or_default();
            PublicPost {
                id: PostId::from_uuid(row.id),
                reading_time: reading_time(&row.content),
                title: row.title,
                slug: row.slug,
                content: row.content,
                excerpt: row.excerpt,
                featured_image: row.featured_image,
                published_at: row.published_at.unwrap_or(row.created_at),
                author: AuthorSummary {
                    id: UserId::from_uuid(row.author_id),
                    name: row.author_name,
                    bio: row.author_bio,
                    avatar_url: row.author_avatar_url,
                },
                categories,
            }
        })
        .collect()
}
