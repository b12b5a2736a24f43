// tests/support/builders.rs
use chrono::{DateTime, Duration, Utc};

use quillpost::domain::category::{Category, CategoryId, CategoryName};
use quillpost::domain::post::{Post, PostContent, PostId, PostTitle};
use quillpost::domain::slug::Slug;

use super::mocks::fixed_now;

pub struct PostBuilder {
    id: i64,
    title: String,
    slug: Option<String>,
    content: String,
    published: bool,
    created_at: DateTime<Utc>,
}

impl PostBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Post {id}"),
            slug: None,
            content: "Body".into(),
            published: true,
            // Later ids are newer.
            created_at: fixed_now() + Duration::minutes(id),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn draft(mut self) -> Self {
        self.published = false;
        self
    }

    pub fn build(self) -> Post {
        let slug = self.slug.unwrap_or_else(|| format!("post-{}", self.id));
        Post {
            id: PostId::new(self.id).unwrap(),
            title: PostTitle::new(self.title).unwrap(),
            slug: Slug::new(slug).unwrap(),
            content: PostContent::new(self.content).unwrap(),
            description: None,
            author: None,
            image_url: None,
            tags: None,
            published: self.published,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}

pub fn category(id: i64, name: &str, slug: &str) -> Category {
    Category {
        id: CategoryId::new(id).unwrap(),
        name: CategoryName::new(name).unwrap(),
        slug: Slug::new(slug).unwrap(),
        description: None,
        created_at: fixed_now() + Duration::minutes(id),
        updated_at: fixed_now() + Duration::minutes(id),
    }
}
