use super::{PostCommandService, parse_category_ids};
use crate::{
    application::{
        commands::{operation_failed, slugs::base_slug},
        dto::PostDto,
        error::ApplicationResult,
    },
    domain::{
        post::{
            PostContent, PostId, PostTitle, PostUpdate,
            value_objects::{AUTHOR_MAX_LEN, IMAGE_URL_MAX_LEN, SLUG_MAX_LEN},
        },
        text::optional_text,
    },
};

/// Partial update. `None` leaves a field untouched; for `category_ids`,
/// `Some(vec![])` removes every association.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub tags: Option<String>,
    pub published: Option<bool>,
    pub category_ids: Option<Vec<i64>>,
}

impl PostCommandService {
    pub async fn update_post(&self, command: UpdatePostCommand) -> ApplicationResult<PostDto> {
        let update = self.prepare_update(command)?;
        let id = update.id;

        let updated = self
            .write_repo
            .update(update)
            .await
            .map_err(|err| operation_failed("Failed to update post", err))?;

        tracing::info!(post_id = %id, slug = %updated.slug, "post updated");
        Ok(updated.into())
    }

    fn prepare_update(&self, command: UpdatePostCommand) -> ApplicationResult<PostUpdate> {
        let UpdatePostCommand {
            id,
            title,
            content,
            description,
            author,
            image_url,
            tags,
            published,
            category_ids,
        } = command;

        let id = PostId::new(id)?;
        let mut update = PostUpdate::new(id, self.clock.now());

        if let Some(title) = title {
            let title = PostTitle::new(title)?;
            let base = base_slug(
                self.slugger.as_ref(),
                self.clock.as_ref(),
                "post",
                title.as_str(),
                SLUG_MAX_LEN,
            )?;
            update = update.with_title(title, base);
        }
        if let Some(content) = content {
            update = update.with_content(PostContent::new(content)?);
        }
        if description.is_some() {
            update = update.with_description(optional_text("description", description, None)?);
        }
        if author.is_some() {
            update = update.with_author(optional_text("author", author, Some(AUTHOR_MAX_LEN))?);
        }
        if image_url.is_some() {
            update = update.with_image_url(optional_text(
                "imageUrl",
                image_url,
                Some(IMAGE_URL_MAX_LEN),
            )?);
        }
        if tags.is_some() {
            update = update.with_tags(optional_text("tags", tags, None)?);
        }
        if let Some(published) = published {
            update = update.with_published(published);
        }
        if let Some(ids) = category_ids {
            update = update.with_categories(parse_category_ids(ids)?);
        }

        Ok(update)
    }
}
