use super::PostQueryService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::{post::PostId, slug::Slug},
};

/// Look a post up by id or by slug. The id takes precedence when both are
/// given; neither yields `None` without touching storage.
#[derive(Debug, Clone, Default)]
pub struct GetPostQuery {
    pub id: Option<i64>,
    pub slug: Option<String>,
}

impl PostQueryService {
    pub async fn get_post(&self, query: GetPostQuery) -> ApplicationResult<Option<PostDto>> {
        if let Some(id) = query.id {
            let Ok(id) = PostId::new(id) else {
                return Ok(None);
            };
            let post = self.read_repo.find_by_id(id).await?;
            return Ok(post.map(Into::into));
        }

        if let Some(slug) = query.slug {
            let Ok(slug) = Slug::new(slug.trim()) else {
                return Ok(None);
            };
            let post = self.read_repo.find_by_slug(&slug).await?;
            return Ok(post.map(Into::into));
        }

        Ok(None)
    }
}
