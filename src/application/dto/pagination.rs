use crate::application::dto::PostDto;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginationDto {
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        Self {
            page,
            limit,
            total,
            total_pages: total.div_ceil(u64::from(limit.max(1))),
        }
    }

    pub fn empty(page: u32, limit: u32) -> Self {
        Self::new(page, limit, 0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostPageDto {
    pub posts: Vec<PostDto>,
    pub pagination: PaginationDto,
}

/// Acknowledgement returned by delete operations.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct DeletedDto {
    pub success: bool,
}

impl DeletedDto {
    pub const fn ok() -> Self {
        Self { success: true }
    }
}
