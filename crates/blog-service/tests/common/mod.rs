//! In-memory repositories and fixtures for service tests

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use blog_common::{SiteConfig, StorageConfig};
use blog_core::text::reading_time;
use blog_core::{
    Caller, Category, CategoryId, CategoryRepository, CommentAuthor, CommentId, CommentRecord,
    CommentRepository, DomainError, Media, MediaId, MediaRepository, NewComment, PageRequest, Post,
    PostId, PostPage, PostRepository, PublicPost, Reaction, ReactionKind, ReactionRepository,
    ReactionTransition, RepoResult, Role, UserId, UserRepository, User,
};
use blog_service::{MediaStore, ServiceContext, ServiceContextBuilder};

/// Shared in-memory tables behind every fake repository
#[derive(Default)]
pub struct Tables {
    pub users: HashMap<UserId, User>,
    pub posts: HashMap<PostId, Post>,
    pub categories: HashMap<CategoryId, Category>,
    pub post_categories: HashSet<(PostId, CategoryId)>,
    pub comments: Vec<CommentRecord>,
    pub reactions: Vec<Reaction>,
    pub media: Vec<Media>,
    pub stored_files: HashMap<String, Vec<u8>>,
}

#[derive(Clone, Default)]
pub struct MemoryDb(pub Arc<Mutex<Tables>>);

impl MemoryDb {
    pub fn with<R>(&self, f: impl FnOnce(&mut Tables) -> R) -> R {
        let mut tables = self.0.lock().unwrap();
        f(&mut tables)
    }

    pub fn add_user(&self, role: Role) -> Caller {
        let id = UserId::new();
        let user = User::new(id, format!("{id}@example.com"), format!("User {id}")).with_role(role);
        self.with(|t| t.users.insert(id, user));
        Caller::new(id, role)
    }

    fn public_view(tables: &Tables, post: &Post) -> Option<PublicPost> {
        if !post.is_published() {
            return None;
        }
        let author = tables.users.get(&post.author_id)?;
        let mut categories: Vec<_> = tables
            .post_categories
            .iter()
            .filter(|(p, _)| *p == post.id)
            .filter_map(|(_, c)| tables.categories.get(c).map(Category::summary))
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));

        Some(PublicPost {
            id: post.id,
            title: post.title.clone(),
            slug: post.slug.clone(),
            content: post.content.clone(),
            excerpt: post.excerpt.clone(),
            featured_image: post.featured_image.clone(),
            published_at: post.published_at.unwrap_or(post.created_at),
            reading_time: reading_time(&post.content),
            author: author.summary(),
            categories,
        })
    }

    fn published_where(&self, keep: impl Fn(&Tables, &Post) -> bool, page: PageRequest) -> PostPage {
        self.with(|t| {
            let mut posts: Vec<PublicPost> = t
                .posts
                .values()
                .filter(|p| keep(t, p))
                .filter_map(|p| Self::public_view(t, p))
                .collect();
            posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
            let total = posts.len() as i64;
            let posts = posts
                .into_iter()
                .skip(page.offset() as usize)
                .take(page.limit as usize)
                .collect();
            PostPage { posts, total }
        })
    }
}

#[async_trait]
impl UserRepository for MemoryDb {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.with(|t| t.users.get(&id).cloned()))
    }
}

#[async_trait]
impl PostRepository for MemoryDb {
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        Ok(self.with(|t| t.posts.get(&id).cloned()))
    }

    async fn find_by_author(&self, author_id: UserId) -> RepoResult<Vec<Post>> {
        Ok(self.with(|t| {
            let mut posts: Vec<Post> = t
                .posts
                .values()
                .filter(|p| p.author_id == author_id)
                .cloned()
                .collect();
            posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            posts
        }))
    }

    async fn create(&self, post: &Post) -> RepoResult<()> {
        self.with(|t| {
            if t.posts.values().any(|p| p.slug == post.slug) {
                return Err(DomainError::SlugAlreadyExists(post.slug.clone()));
            }
            t.posts.insert(post.id, post.clone());
            Ok(())
        })
    }

    async fn update(&self, post: &Post) -> RepoResult<()> {
        self.with(|t| {
            if t.posts.values().any(|p| p.slug == post.slug && p.id != post.id) {
                return Err(DomainError::SlugAlreadyExists(post.slug.clone()));
            }
            match t.posts.get_mut(&post.id) {
                Some(existing) => {
                    *existing = post.clone();
                    Ok(())
                }
                None => Err(DomainError::PostNotFound(post.id)),
            }
        })
    }

    async fn delete(&self, id: PostId) -> RepoResult<()> {
        self.with(|t| {
            t.posts.remove(&id).ok_or(DomainError::PostNotFound(id))?;
            t.comments.retain(|c| c.post_id != id);
            t.reactions.retain(|r| r.post_id != id);
            t.post_categories.retain(|(p, _)| *p != id);
            Ok(())
        })
    }

    async fn find_published_by_slug(&self, slug: &str) -> RepoResult<Option<PublicPost>> {
        Ok(self.with(|t| {
            t.posts
                .values()
                .find(|p| p.slug == slug)
                .and_then(|p| Self::public_view(t, p))
        }))
    }

    async fn find_recent_published(&self, limit: u32) -> RepoResult<Vec<PublicPost>> {
        Ok(self
            .published_where(|_, _| true, PageRequest::new(1, limit))
            .posts)
    }

    async fn list_published(&self, page: PageRequest) -> RepoResult<PostPage> {
        Ok(self.published_where(|_, _| true, page))
    }

    async fn list_published_by_category(
        &self,
        category_id: CategoryId,
        page: PageRequest,
    ) -> RepoResult<PostPage> {
        Ok(self.published_where(
            |t, p| t.post_categories.contains(&(p.id, category_id)),
            page,
        ))
    }

    async fn list_published_by_author(
        &self,
        author_id: UserId,
        page: PageRequest,
    ) -> RepoResult<PostPage> {
        Ok(self.published_where(|_, p| p.author_id == author_id, page))
    }
}

#[async_trait]
impl CategoryRepository for MemoryDb {
    async fn find_by_id(&self, id: CategoryId) -> RepoResult<Option<Category>> {
        Ok(self.with(|t| t.categories.get(&id).cloned()))
    }

    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Category>> {
        Ok(self.with(|t| t.categories.values().find(|c| c.slug == slug).cloned()))
    }

    async fn list_all(&self) -> RepoResult<Vec<Category>> {
        Ok(self.with(|t| {
            let mut all: Vec<Category> = t.categories.values().cloned().collect();
            all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            all
        }))
    }

    async fn find_by_post(&self, post_id: PostId) -> RepoResult<Vec<Category>> {
        Ok(self.with(|t| {
            t.post_categories
                .iter()
                .filter(|(p, _)| *p == post_id)
                .filter_map(|(_, c)| t.categories.get(c).cloned())
                .collect()
        }))
    }

    async fn create(&self, category: &Category) -> RepoResult<()> {
        self.with(|t| {
            if t
                .categories
                .values()
                .any(|c| c.name == category.name || c.slug == category.slug)
            {
                return Err(DomainError::CategoryAlreadyExists(category.name.clone()));
            }
            t.categories.insert(category.id, category.clone());
            Ok(())
        })
    }

    async fn update(&self, category: &Category) -> RepoResult<()> {
        self.with(|t| match t.categories.get_mut(&category.id) {
            Some(existing) => {
                *existing = category.clone();
                Ok(())
            }
            None => Err(DomainError::CategoryNotFound(category.id)),
        })
    }

    async fn delete(&self, id: CategoryId) -> RepoResult<()> {
        self.with(|t| {
            t.categories
                .remove(&id)
                .ok_or(DomainError::CategoryNotFound(id))?;
            t.post_categories.retain(|(_, c)| *c != id);
            Ok(())
        })
    }

    async fn link_post(&self, post_id: PostId, category_id: CategoryId) -> RepoResult<()> {
        self.with(|t| t.post_categories.insert((post_id, category_id)));
        Ok(())
    }

    async fn unlink_post(&self, post_id: PostId, category_id: CategoryId) -> RepoResult<()> {
        self.with(|t| t.post_categories.remove(&(post_id, category_id)));
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for MemoryDb {
    async fn find_by_id(&self, id: CommentId) -> RepoResult<Option<CommentRecord>> {
        Ok(self.with(|t| t.comments.iter().find(|c| c.id == id).cloned()))
    }

    async fn find_by_post(&self, post_id: PostId) -> RepoResult<Vec<CommentRecord>> {
        Ok(self.with(|t| {
            t.comments
                .iter()
                .filter(|c| c.post_id == post_id)
                .cloned()
                .collect()
        }))
    }

    async fn create(&self, comment: &NewComment) -> RepoResult<CommentRecord> {
        self.with(|t| {
            let user = t
                .users
                .get(&comment.user_id)
                .ok_or(DomainError::UserNotFound(comment.user_id))?;
            let record = CommentRecord {
                id: comment.id,
                post_id: comment.post_id,
                user_id: comment.user_id,
                parent_id: comment.parent_id,
                content: comment.content.clone(),
                created_at: comment.created_at,
                updated_at: comment.created_at,
                author: CommentAuthor {
                    name: user.name.clone(),
                    avatar_url: user.avatar_url.clone(),
                },
            };
            t.comments.push(record.clone());
            Ok(record)
        })
    }

    async fn delete(&self, id: CommentId) -> RepoResult<()> {
        self.with(|t| {
            let before = t.comments.len();
            t.comments.retain(|c| c.id != id);
            if t.comments.len() == before {
                return Err(DomainError::CommentNotFound(id));
            }
            Ok(())
        })
    }

    async fn count_by_post(&self, post_id: PostId) -> RepoResult<i64> {
        Ok(self.with(|t| t.comments.iter().filter(|c| c.post_id == post_id).count() as i64))
    }
}

#[async_trait]
impl ReactionRepository for MemoryDb {
    async fn find_by_post(&self, post_id: PostId) -> RepoResult<Vec<Reaction>> {
        Ok(self.with(|t| {
            t.reactions
                .iter()
                .filter(|r| r.post_id == post_id)
                .cloned()
                .collect()
        }))
    }

    async fn find_by_posts(&self, post_ids: &[PostId]) -> RepoResult<Vec<Reaction>> {
        Ok(self.with(|t| {
            t.reactions
                .iter()
                .filter(|r| post_ids.contains(&r.post_id))
                .cloned()
                .collect()
        }))
    }

    async fn find_by_user(&self, post_id: PostId, user_id: UserId) -> RepoResult<Option<Reaction>> {
        Ok(self.with(|t| {
            t.reactions
                .iter()
                .find(|r| r.post_id == post_id && r.user_id == user_id)
                .cloned()
        }))
    }

    async fn toggle(
        &self,
        post_id: PostId,
        user_id: UserId,
        kind: ReactionKind,
    ) -> RepoResult<ReactionTransition> {
        Ok(self.with(|t| {
            let existing = t
                .reactions
                .iter()
                .position(|r| r.post_id == post_id && r.user_id == user_id);
            let transition =
                ReactionTransition::plan(existing.map(|i| t.reactions[i].kind), kind);
            match (transition, existing) {
                (ReactionTransition::Remove(_), Some(i)) => {
                    t.reactions.remove(i);
                }
                (ReactionTransition::Switch { to, .. }, Some(i)) => t.reactions[i].kind = to,
                (ReactionTransition::Insert(kind), _) => {
                    t.reactions.push(Reaction::new(post_id, user_id, kind));
                }
                _ => {}
            }
            transition
        }))
    }
}

#[async_trait]
impl MediaRepository for MemoryDb {
    async fn find_by_id(&self, id: MediaId) -> RepoResult<Option<Media>> {
        Ok(self.with(|t| t.media.iter().find(|m| m.id == id).cloned()))
    }

    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Media>> {
        Ok(self.with(|t| {
            t.media
                .iter()
                .filter(|m| m.user_id == user_id)
                .rev()
                .cloned()
                .collect()
        }))
    }

    async fn create(&self, media: &Media) -> RepoResult<()> {
        self.with(|t| t.media.push(media.clone()));
        Ok(())
    }

    async fn delete(&self, id: MediaId) -> RepoResult<()> {
        self.with(|t| {
            let before = t.media.len();
            t.media.retain(|m| m.id != id);
            if t.media.len() == before {
                return Err(DomainError::MediaNotFound(id));
            }
            Ok(())
        })
    }
}

#[async_trait]
impl MediaStore for MemoryDb {
    async fn put(&self, filename: &str, bytes: &[u8]) -> Result<(), DomainError> {
        self.with(|t| {
            if t.stored_files.contains_key(filename) {
                return Err(DomainError::StorageError(format!("{filename} exists")));
            }
            t.stored_files.insert(filename.to_string(), bytes.to_vec());
            Ok(())
        })
    }

    async fn remove(&self, filename: &str) -> Result<(), DomainError> {
        self.with(|t| t.stored_files.remove(filename));
        Ok(())
    }
}

/// A service context whose every port is backed by one [`MemoryDb`]
pub fn test_context() -> (ServiceContext, MemoryDb) {
    let db = MemoryDb::default();
    let ctx = ServiceContextBuilder::new()
        .user_repo(Arc::new(db.clone()))
        .post_repo(Arc::new(db.clone()))
        .category_repo(Arc::new(db.clone()))
        .comment_repo(Arc::new(db.clone()))
        .reaction_repo(Arc::new(db.clone()))
        .media_repo(Arc::new(db.clone()))
        .media_store(Arc::new(db.clone()))
        .site(SiteConfig {
            title: "Test Blog".to_string(),
            url: "https://blog.test".to_string(),
            description: "A test blog".to_string(),
        })
        .storage(StorageConfig {
            upload_dir: "unused".to_string(),
            max_file_size_mb: 1,
            public_url: "/uploads".to_string(),
        })
        .build()
        .unwrap();
    (ctx, db)
}
