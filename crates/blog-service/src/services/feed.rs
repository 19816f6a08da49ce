//! RSS feed service
//!
//! Renders RSS 2.0 documents for the whole site, a category, or an author.

use std::fmt::Write;

use blog_core::{DomainError, PageRequest, PublicPost, UserId};
use tracing::{debug, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Items per feed
pub const FEED_ITEM_LIMIT: u32 = 50;

/// Content type of every feed
pub const FEED_CONTENT_TYPE: &str = "application/xml; charset=utf-8";

/// Cache policy of every feed
pub const FEED_CACHE_CONTROL: &str = "public, s-maxage=3600, stale-while-revalidate=86400";

/// Channel-level metadata of one feed
#[derive(Debug, Clone)]
pub struct FeedChannel {
    pub title: String,
    /// Human-facing page the feed mirrors
    pub link: String,
    pub description: String,
    /// URL of the feed document itself
    pub self_link: String,
}

/// Feed service
pub struct FeedService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedService<'a> {
    /// Create a new FeedService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn site_url(&self) -> &str {
        self.ctx.site().url.trim_end_matches('/')
    }

    fn page() -> PageRequest {
        PageRequest::new(1, FEED_ITEM_LIMIT)
    }

    /// Feed of the latest posts on the site
    #[instrument(skip(self))]
    pub async fn site_feed(&self) -> ServiceResult<String> {
        let site = self.ctx.site();
        let posts = self.ctx.post_repo().list_published(Self::page()).await?.posts;

        let channel = FeedChannel {
            title: site.title.clone(),
            link: self.site_url().to_string(),
            description: site.description.clone(),
            self_link: format!("{}/rss", self.site_url()),
        };

        debug!(items = posts.len(), "Rendering site feed");
        Ok(render_rss(&channel, &posts, self.site_url()))
    }

    /// Feed of the latest posts in a category
    ///
    /// A category without published posts has no feed.
    #[instrument(skip(self))]
    pub async fn category_feed(&self, slug: &str) -> ServiceResult<String> {
        let category = self
            .ctx
            .category_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::CategorySlugNotFound(slug.to_string()))?;

        let posts = self
            .ctx
            .post_repo()
            .list_published_by_category(category.id, Self::page())
            .await?
            .posts;

        if posts.is_empty() {
            return Err(DomainError::CategorySlugNotFound(slug.to_string()).into());
        }

        let channel = FeedChannel {
            title: format!("{} - {}", self.ctx.site().title, category.name),
            link: format!("{}/blog/category/{}", self.site_url(), category.slug),
            description: format!("Posts in the {} category", category.name),
            self_link: format!("{}/rss/category/{}", self.site_url(), category.slug),
        };

        debug!(items = posts.len(), "Rendering category feed");
        Ok(render_rss(&channel, &posts, self.site_url()))
    }

    /// Feed of the latest posts by an author
    #[instrument(skip(self))]
    pub async fn author_feed(&self, author_id: UserId) -> ServiceResult<String> {
        let author = self
            .ctx
            .user_repo()
            .find_by_id(author_id)
            .await?
            .ok_or(DomainError::UserNotFound(author_id))?;

        let posts = self
            .ctx
            .post_repo()
            .list_published_by_author(author_id, Self::page())
            .await?
            .posts;

        let channel = FeedChannel {
            title: format!("{} - {}", self.ctx.site().title, author.name),
            link: format!("{}/author/{}", self.site_url(), author_id),
            description: format!("Posts by {}", author.name),
            self_link: format!("{}/rss/author/{}", self.site_url(), author_id),
        };

        debug!(items = posts.len(), "Rendering author feed");
        Ok(render_rss(&channel, &posts, self.site_url()))
    }
}

/// Render an RSS 2.0 document
pub fn render_rss(channel: &FeedChannel, posts: &[PublicPost], site_url: &str) -> String {
    let mut xml = String::with_capacity(1024 + posts.len() * 512);

    // Writing into a String cannot fail
    let _ = write!(
        xml,
        concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<rss version=\"2.0\" xmlns:atom=\"http://www.w3.org/2005/Atom\">\n",
            "  <channel>\n",
            "    <title>{}</title>\n",
            "    <link>{}</link>\n",
            "    <description>{}</description>\n",
            "    <language>en-us</language>\n",
            "    <atom:link href=\"{}\" rel=\"self\" type=\"application/rss+xml\" />\n",
        ),
        escape_xml(&channel.title),
        escape_xml(&channel.link),
        escape_xml(&channel.description),
        escape_xml(&channel.self_link),
    );

    for post in posts {
        let link = escape_xml(&format!("{site_url}/blog/{}", post.slug));
        let _ = write!(
            xml,
            concat!(
                "    <item>\n",
                "      <title>{}</title>\n",
                "      <link>{}</link>\n",
                "      <guid>{}</guid>\n",
                "      <pubDate>{}</pubDate>\n",
                "      <description>{}</description>\n",
                "      <author>{}</author>\n",
            ),
            cdata(&post.title),
            link,
            link,
            post.published_at.to_rfc2822(),
            cdata(post.excerpt.as_deref().unwrap_or_default()),
            escape_xml(&post.author.name),
        );
        for category in &post.categories {
            let _ = writeln!(xml, "      <category>{}</category>", escape_xml(&category.name));
        }
        xml.push_str("    </item>\n");
    }

    xml.push_str("  </channel>\n</rss>\n");
    xml
}

/// Escape text for use in XML element content or attribute values
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap text in a CDATA section, splitting any `]]>` it contains
pub fn cdata(text: &str) -> String {
    format!("<![CDATA[{}]]>", text.replace("]]>", "]]]]><![CDATA[>"))
}
