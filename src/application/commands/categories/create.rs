use super::CategoryCommandService;
use crate::{
    application::{
        commands::{operation_failed, slugs::base_slug},
        dto::CategoryDto,
        error::ApplicationResult,
    },
    domain::{
        category::{CategoryName, NewCategory, value_objects::SLUG_MAX_LEN},
        text::optional_text,
    },
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub description: Option<String>,
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let description = optional_text("description", command.description, None)?;
        let base_slug = base_slug(
            self.slugger.as_ref(),
            self.clock.as_ref(),
            "category",
            name.as_str(),
            SLUG_MAX_LEN,
        )?;
        let now = self.clock.now();

        let new_category = NewCategory {
            name,
            base_slug,
            description,
            created_at: now,
            updated_at: now,
        };

        let created = self
            .write_repo
            .insert(new_category)
            .await
            .map_err(|err| operation_failed("Failed to create category", err))?;

        tracing::info!(category_id = %created.id, slug = %created.slug, "category created");
        Ok(created.into())
    }
}
