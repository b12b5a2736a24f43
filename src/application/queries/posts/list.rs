// src/application/queries/posts/list.rs
use super::PostQueryService;
use crate::{
    application::{
        dto::{PaginationDto, PostPageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::CategoryId,
        post::{PostFilter, PublicationFilter},
    },
};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 6;
pub const MAX_LIMIT: u32 = 100;

#[derive(Debug, Clone, Default)]
pub struct ListPostsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub category_id: Option<i64>,
    pub publication: PublicationFilter,
}

impl PostQueryService {
    pub async fn list_posts(&self, query: ListPostsQuery) -> ApplicationResult<PostPageDto> {
        let (page, limit) = normalize_paging(query.page, query.limit)?;

        let mut filter = PostFilter {
            publication: query.publication,
            post_ids: None,
        };

        if let Some(category_id) = query.category_id {
            let category_id = CategoryId::new(category_id)?;
            let post_ids = self.read_repo.post_ids_in_category(category_id).await?;
            if post_ids.is_empty() {
                return Ok(PostPageDto {
                    posts: Vec::new(),
                    pagination: PaginationDto::empty(page, limit),
                });
            }
            filter.post_ids = Some(post_ids);
        }

        let offset = u64::from(page - 1) * u64::from(limit);
        let posts = self.read_repo.list_page(&filter, limit, offset).await?;
        let total = self.read_repo.count(&filter).await?;

        Ok(PostPageDto {
            posts: posts.into_iter().map(Into::into).collect(),
            pagination: PaginationDto::new(page, limit, total),
        })
    }
}

fn normalize_paging(page: Option<u32>, limit: Option<u32>) -> ApplicationResult<(u32, u32)> {
    let page = page.unwrap_or(DEFAULT_PAGE);
    if page < 1 {
        return Err(ApplicationError::validation("page must be at least 1"));
    }

    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(ApplicationError::validation(format!(
            "limit must be between 1 and {MAX_LIMIT}"
        )));
    }

    Ok((page, limit))
}
