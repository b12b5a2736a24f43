mod get;
mod list;
mod service;

pub use get::GetCategoryQuery;
pub use service::CategoryQueryService;
