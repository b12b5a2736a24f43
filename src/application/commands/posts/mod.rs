// src/application/commands/posts/mod.rs
mod create;
mod delete;
mod service;
mod update;

pub use create::{CreatePostCommand, CreatePostCommandBuilder};
pub use delete::DeletePostCommand;
pub use service::PostCommandService;
pub use update::UpdatePostCommand;

use crate::application::error::ApplicationResult;
use crate::domain::category::CategoryId;

fn parse_category_ids(ids: Vec<i64>) -> ApplicationResult<Vec<CategoryId>> {
    ids.into_iter()
        .map(|id| CategoryId::new(id).map_err(Into::into))
        .collect()
}
