use super::CategoryQueryService;
use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::{category::CategoryId, slug::Slug},
};

#[derive(Debug, Clone, Default)]
pub struct GetCategoryQuery {
    pub id: Option<i64>,
    pub slug: Option<String>,
}

impl CategoryQueryService {
    pub async fn get_category(
        &self,
        query: GetCategoryQuery,
    ) -> ApplicationResult<Option<CategoryDto>> {
        if let Some(id) = query.id {
            let Ok(id) = CategoryId::new(id) else {
                return Ok(None);
            };
            return Ok(self.read_repo.find_by_id(id).await?.map(Into::into));
        }

        if let Some(slug) = query.slug {
            let Ok(slug) = Slug::new(slug.trim()) else {
                return Ok(None);
            };
            return Ok(self.read_repo.find_by_slug(&slug).await?.map(Into::into));
        }

        Ok(None)
    }
}
