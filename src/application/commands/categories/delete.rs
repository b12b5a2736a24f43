use super::CategoryCommandService;
use crate::{
    application::{commands::operation_failed, dto::DeletedDto, error::ApplicationResult},
    domain::category::CategoryId,
};

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl CategoryCommandService {
    pub async fn delete_category(
        &self,
        command: DeleteCategoryCommand,
    ) -> ApplicationResult<DeletedDto> {
        let id = CategoryId::new(command.id)?;
        self.write_repo
            .delete(id)
            .await
            .map_err(|err| operation_failed("Failed to delete category", err))?;

        tracing::info!(category_id = %id, "category deleted");
        Ok(DeletedDto::ok())
    }
}
