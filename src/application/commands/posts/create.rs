// src/application/commands/posts/create.rs
use super::{PostCommandService, parse_category_ids};
use crate::{
    application::{
        commands::{operation_failed, slugs::base_slug},
        dto::PostDto,
        error::ApplicationResult,
    },
    domain::{
        post::{
            NewPost, PostContent, PostTitle,
            entity::dedup_category_ids,
            value_objects::{AUTHOR_MAX_LEN, IMAGE_URL_MAX_LEN, SLUG_MAX_LEN},
        },
        text::optional_text,
    },
};

#[derive(Debug, Clone, Default)]
pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub tags: Option<String>,
    pub published: bool,
    pub category_ids: Vec<i64>,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    description: Option<String>,
    author: Option<String>,
    image_url: Option<String>,
    tags: Option<String>,
    published: bool,
    category_ids: Vec<i64>,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub fn category_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.category_ids = ids.into_iter().collect();
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            description: self.description,
            author: self.author,
            image_url: self.image_url,
            tags: self.tags,
            published: self.published,
            category_ids: self.category_ids,
        })
    }
}

impl PostCommandService {
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let new_post = self.prepare_new_post(command)?;

        let created = self
            .write_repo
            .insert(new_post)
            .await
            .map_err(|err| operation_failed("Failed to create post", err))?;

        tracing::info!(post_id = %created.id, slug = %created.slug, "post created");
        Ok(created.into())
    }

    fn prepare_new_post(&self, command: CreatePostCommand) -> ApplicationResult<NewPost> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let description = optional_text("description", command.description, None)?;
        let author = optional_text("author", command.author, Some(AUTHOR_MAX_LEN))?;
        let image_url = optional_text("imageUrl", command.image_url, Some(IMAGE_URL_MAX_LEN))?;
        let tags = optional_text("tags", command.tags, None)?;
        let category_ids = dedup_category_ids(parse_category_ids(command.category_ids)?);

        let base_slug = base_slug(
            self.slugger.as_ref(),
            self.clock.as_ref(),
            "post",
            title.as_str(),
            SLUG_MAX_LEN,
        )?;
        let now = self.clock.now();

        Ok(NewPost {
            title,
            base_slug,
            content,
            description,
            author,
            image_url,
            tags,
            published: command.published,
            category_ids,
            created_at: now,
            updated_at: now,
        })
    }
}
