use super::PostQueryService;
use crate::{
    application::{dto::PostDto, error::ApplicationResult},
    domain::post::{PostFilter, PublicationFilter},
};

pub const RECENT_LIMIT: u32 = 3;

impl PostQueryService {
    /// Newest published posts, at most [`RECENT_LIMIT`].
    pub async fn recent_posts(&self) -> ApplicationResult<Vec<PostDto>> {
        let filter = PostFilter {
            publication: PublicationFilter::Published,
            post_ids: None,
        };
        let posts = self.read_repo.list_page(&filter, RECENT_LIMIT, 0).await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }
}
