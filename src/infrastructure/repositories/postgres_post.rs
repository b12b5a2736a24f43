// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use super::postgres_category::CategoryRow;
use super::slugs::{SlugProbe, SlugTable};
use crate::domain::category::{Category, CategoryId};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostContent, PostFilter, PostId, PostReadRepository, PostTitle, PostUpdate,
    PostWriteRepository,
};
use crate::domain::slug::{Slug, generate_unique_slug};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};

const POST_COLUMNS: &str = "id, title, slug, content, description, author, image_url, tags, \
                            published, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    description: Option<String>,
    author: Option<String>,
    image_url: Option<String>,
    tags: Option<String>,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            content: PostContent::new(row.content)?,
            description: row.description,
            author: row.author,
            image_url: row.image_url,
            tags: row.tags,
            published: row.published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

async fn insert_links(
    conn: &mut PgConnection,
    post_id: PostId,
    category_ids: &[CategoryId],
) -> DomainResult<()> {
    if category_ids.is_empty() {
        return Ok(());
    }

    let mut builder: QueryBuilder<Postgres> =
        QueryBuilder::new("INSERT INTO post_categories (post_id, category_id) ");
    builder.push_values(category_ids, |mut row, category_id| {
        row.push_bind(i64::from(post_id))
            .push_bind(i64::from(*category_id));
    });
    builder.push(" ON CONFLICT (post_id, category_id) DO NOTHING");

    builder
        .build()
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;
    Ok(())
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            base_slug,
            content,
            description,
            author,
            image_url,
            tags,
            published,
            category_ids,
            created_at,
            updated_at,
        } = post;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let slug = {
            let mut probe = SlugProbe::lock(&mut *tx, SlugTable::Posts, None).await?;
            generate_unique_slug(&base_slug, &mut probe).await?
        };

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (title, slug, content, description, author, image_url, tags,
                                published, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(description)
        .bind(author)
        .bind(image_url)
        .bind(tags)
        .bind(published)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        let created = Post::try_from(row)?;
        insert_links(&mut *tx, created.id, &category_ids).await?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(created)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            base_slug,
            content,
            description,
            author,
            image_url,
            tags,
            published,
            category_ids,
            updated_at,
        } = update;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let slug = match base_slug {
            Some(base) => {
                let mut probe =
                    SlugProbe::lock(&mut *tx, SlugTable::Posts, Some(i64::from(id))).await?;
                Some(generate_unique_slug(&base, &mut probe).await?)
            }
            None => None,
        };

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }
        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }
        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description);
        }
        if let Some(author) = author {
            builder.push(", author = ");
            builder.push_bind(author);
        }
        if let Some(image_url) = image_url {
            builder.push(", image_url = ");
            builder.push_bind(image_url);
        }
        if let Some(tags) = tags {
            builder.push(", tags = ");
            builder.push_bind(tags);
        }
        if let Some(published) = published {
            builder.push(", published = ");
            builder.push_bind(published);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" RETURNING ");
        builder.push(POST_COLUMNS);

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if let Some(category_ids) = category_ids {
            sqlx::query("DELETE FROM post_categories WHERE post_id = $1")
                .bind(i64::from(id))
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            insert_links(&mut *tx, id, &category_ids).await?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

impl PostgresPostReadRepository {
    fn apply_filter<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &'a PostFilter) {
        let mut has_where = false;

        if let Some(published) = filter.publication.published() {
            builder.push(" WHERE published = ");
            builder.push_bind(published);
            has_where = true;
        }

        if let Some(ids) = &filter.post_ids {
            builder.push(if has_where { " AND " } else { " WHERE " });
            builder.push("id = ANY(");
            builder.push_bind(ids.iter().map(|id| i64::from(*id)).collect::<Vec<_>>());
            builder.push(")");
        }
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list_page(
        &self,
        filter: &PostFilter,
        limit: u32,
        offset: u64,
    ) -> DomainResult<Vec<Post>> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {POST_COLUMNS} FROM posts"));
        Self::apply_filter(&mut builder, filter);
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(i64::from(limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(offset).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn count(&self, filter: &PostFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM posts");
        Self::apply_filter(&mut builder, filter);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn post_ids_in_category(&self, category_id: CategoryId) -> DomainResult<Vec<PostId>> {
        let ids: Vec<i64> = sqlx::query_scalar(
            "SELECT post_id FROM post_categories WHERE category_id = $1 ORDER BY post_id",
        )
        .bind(i64::from(category_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        ids.into_iter().map(PostId::new).collect()
    }

    async fn categories_for_post(&self, id: PostId) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT c.id, c.name, c.slug, c.description, c.created_at, c.updated_at
             FROM categories c
             INNER JOIN post_categories pc ON pc.category_id = c.id
             WHERE pc.post_id = $1
             ORDER BY c.name, c.id",
        )
        .bind(i64::from(id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }
}
