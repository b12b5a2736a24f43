// src/domain/post/entity.rs
use crate::domain::category::{Category, CategoryId};
use crate::domain::post::value_objects::{PostContent, PostId, PostTitle};
use crate::domain::slug::Slug;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: Slug,
    pub content: PostContent,
    pub description: Option<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub tags: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PostWithCategories {
    pub post: Post,
    pub categories: Vec<Category>,
}

/// A post to be inserted. `base_slug` is the slugified title; the repository
/// resolves it to a unique slug in the same transaction as the insert.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub base_slug: Slug,
    pub content: PostContent,
    pub description: Option<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub tags: Option<String>,
    pub published: bool,
    pub category_ids: Vec<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of a post. For the optional text columns the outer `Option`
/// says whether the field was supplied; `Some(None)` clears the column.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub base_slug: Option<Slug>,
    pub content: Option<PostContent>,
    pub description: Option<Option<String>>,
    pub author: Option<Option<String>>,
    pub image_url: Option<Option<String>>,
    pub tags: Option<Option<String>>,
    pub published: Option<bool>,
    pub category_ids: Option<Vec<CategoryId>>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            base_slug: None,
            content: None,
            description: None,
            author: None,
            image_url: None,
            tags: None,
            published: None,
            category_ids: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle, base_slug: Slug) -> Self {
        self.title = Some(title);
        self.base_slug = Some(base_slug);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_author(mut self, author: Option<String>) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = Some(image_url);
        self
    }

    pub fn with_tags(mut self, tags: Option<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn with_categories(mut self, category_ids: Vec<CategoryId>) -> Self {
        self.category_ids = Some(dedup_category_ids(category_ids));
        self
    }

    /// Apply the supplied fields to a loaded `post`, for stores that update
    /// whole records instead of issuing a column-wise `UPDATE`. The slug is
    /// left alone; callers set it after uniqueness has been resolved.
    pub fn apply_to(&self, post: &mut Post) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(content) = &self.content {
            post.content = content.clone();
        }
        if let Some(description) = &self.description {
            post.description = description.clone();
        }
        if let Some(author) = &self.author {
            post.author = author.clone();
        }
        if let Some(image_url) = &self.image_url {
            post.image_url = image_url.clone();
        }
        if let Some(tags) = &self.tags {
            post.tags = tags.clone();
        }
        if let Some(published) = self.published {
            post.published = published;
        }
        post.updated_at = self.updated_at;
    }
}

/// Keep the first occurrence of every id; the junction table rejects
/// duplicate pairs.
pub fn dedup_category_ids(ids: Vec<CategoryId>) -> Vec<CategoryId> {
    let mut seen = std::collections::HashSet::with_capacity(ids.len());
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PublicationFilter {
    #[default]
    Published,
    Drafts,
    All,
}

impl PublicationFilter {
    /// Value the `published` column must have, or `None` for no constraint.
    pub fn published(self) -> Option<bool> {
        match self {
            Self::Published => Some(true),
            Self::Drafts => Some(false),
            Self::All => None,
        }
    }
}

/// Listing filter. `post_ids` restricts the result to a resolved set of posts
/// (category membership).
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub publication: PublicationFilter,
    pub post_ids: Option<Vec<PostId>>,
}

impl PostFilter {
    pub fn matches(&self, post: &Post) -> bool {
        let publication_ok = self
            .publication
            .published()
            .is_none_or(|published| post.published == published);
        let membership_ok = self
            .post_ids
            .as_ref()
            .is_none_or(|ids| ids.contains(&post.id));
        publication_ok && membership_ok
    }
}
