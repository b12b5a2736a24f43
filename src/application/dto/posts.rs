use crate::application::dto::CategoryDto;
use crate::domain::post::{Post, PostWithCategories};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
    /// Comma-separated free text.
    pub tags: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            content: post.content.into_inner(),
            description: post.description,
            author: post.author,
            image_url: post.image_url,
            tags: post.tags,
            published: post.published,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostWithCategoriesDto {
    #[serde(flatten)]
    pub post: PostDto,
    pub categories: Vec<CategoryDto>,
}

impl From<PostWithCategories> for PostWithCategoriesDto {
    fn from(value: PostWithCategories) -> Self {
        Self {
            post: value.post.into(),
            categories: value.categories.into_iter().map(Into::into).collect(),
        }
    }
}
