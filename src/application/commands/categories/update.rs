use super::CategoryCommandService;
use crate::{
    application::{
        commands::{operation_failed, slugs::base_slug},
        dto::CategoryDto,
        error::ApplicationResult,
    },
    domain::{
        category::{CategoryId, CategoryName, CategoryUpdate, value_objects::SLUG_MAX_LEN},
        text::optional_text,
    },
};

pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CategoryCommandService {
    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let id = CategoryId::new(command.id)?;
        let mut update = CategoryUpdate::new(id, self.clock.now());

        if let Some(name) = command.name {
            let name = CategoryName::new(name)?;
            let base = base_slug(
                self.slugger.as_ref(),
                self.clock.as_ref(),
                "category",
                name.as_str(),
                SLUG_MAX_LEN,
            )?;
            update = update.with_name(name, base);
        }
        if command.description.is_some() {
            update = update.with_description(optional_text(
                "description",
                command.description,
                None,
            )?);
        }

        let updated = self
            .write_repo
            .update(update)
            .await
            .map_err(|err| operation_failed("Failed to update category", err))?;

        tracing::info!(category_id = %id, slug = %updated.slug, "category updated");
        Ok(updated.into())
    }
}
