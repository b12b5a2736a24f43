use crate::domain::category::{Category, CategoryId};
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostFilter, PostUpdate};
use crate::domain::post::value_objects::PostId;
use crate::domain::slug::Slug;
use async_trait::async_trait;

/// Writes resolve the unique slug and manage category links atomically with
/// the row change.
#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    /// Fails with `DomainError::NotFound` when no post has the id.
    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;
    /// Fails with `DomainError::NotFound` when no post has the id.
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>>;
    /// Newest first, `limit`/`offset` paginated.
    async fn list_page(&self, filter: &PostFilter, limit: u32, offset: u64)
    -> DomainResult<Vec<Post>>;
    async fn count(&self, filter: &PostFilter) -> DomainResult<u64>;
    async fn post_ids_in_category(&self, category_id: CategoryId) -> DomainResult<Vec<PostId>>;
    async fn categories_for_post(&self, id: PostId) -> DomainResult<Vec<Category>>;
}
