use super::PostQueryService;
use crate::{
    application::{dto::PostWithCategoriesDto, error::ApplicationResult},
    domain::post::{PostId, PostWithCategories},
};

pub struct GetPostWithCategoriesQuery {
    pub id: i64,
}

impl PostQueryService {
    pub async fn get_post_with_categories(
        &self,
        query: GetPostWithCategoriesQuery,
    ) -> ApplicationResult<Option<PostWithCategoriesDto>> {
        let Ok(id) = PostId::new(query.id) else {
            return Ok(None);
        };
        let Some(post) = self.read_repo.find_by_id(id).await? else {
            return Ok(None);
        };
        let categories = self.read_repo.categories_for_post(id).await?;

        Ok(Some(PostWithCategories { post, categories }.into()))
    }
}
