mod get;
mod list;
mod recent;
mod service;
mod with_categories;

pub use get::GetPostQuery;
pub use list::{DEFAULT_LIMIT, DEFAULT_PAGE, ListPostsQuery, MAX_LIMIT};
pub use recent::RECENT_LIMIT;
pub use service::PostQueryService;
pub use with_categories::GetPostWithCategoriesQuery;
