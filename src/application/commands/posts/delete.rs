// src/application/commands/posts/delete.rs
use super::PostCommandService;
use crate::{
    application::{commands::operation_failed, dto::DeletedDto, error::ApplicationResult},
    domain::post::PostId,
};

pub struct DeletePostCommand {
    pub id: i64,
}

impl PostCommandService {
    pub async fn delete_post(&self, command: DeletePostCommand) -> ApplicationResult<DeletedDto> {
        let id = PostId::new(command.id)?;
        self.write_repo
            .delete(id)
            .await
            .map_err(|err| operation_failed("Failed to delete post", err))?;

        tracing::info!(post_id = %id, "post deleted");
        Ok(DeletedDto::ok())
    }
}
