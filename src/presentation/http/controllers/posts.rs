// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    dto::{DeletedDto, PostDto, PostPageDto, PostWithCategoriesDto},
    queries::posts::{GetPostQuery, GetPostWithCategoriesQuery, ListPostsQuery},
};
use crate::domain::post::PublicationFilter;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiQuery};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct PostListParams {
    /// 1-based page number (default 1).
    pub page: Option<u32>,
    /// Page size, 1 to 100 (default 6).
    pub limit: Option<u32>,
    /// Only posts linked to this category.
    pub category_id: Option<i64>,
    /// `true` (default), `false` for drafts, or `all`.
    pub published: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PostLookupParams {
    pub id: Option<i64>,
    pub slug: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub tags: Option<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub category_ids: Vec<i64>,
}

/// Omitted fields are left unchanged; an empty string clears an optional
/// field and `categoryIds: []` removes every category link.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub tags: Option<String>,
    pub published: Option<bool>,
    pub category_ids: Option<Vec<i64>>,
}

fn parse_publication(raw: Option<&str>) -> HttpResult<PublicationFilter> {
    match raw.map(str::trim) {
        None | Some("" | "true") => Ok(PublicationFilter::Published),
        Some("false") => Ok(PublicationFilter::Drafts),
        Some("all") => Ok(PublicationFilter::All),
        Some(other) => Err(HttpError::bad_request(format!(
            "published must be `true`, `false` or `all`, got `{other}`"
        ))),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/posts",
    params(PostListParams),
    responses(
        (status = 200, description = "One page of posts, newest first.", body = PostPageDto),
        (status = 400, description = "Invalid paging or filter.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<PostListParams>,
) -> HttpResult<Json<PostPageDto>> {
    let query = ListPostsQuery {
        page: params.page,
        limit: params.limit,
        category_id: params.category_id,
        publication: parse_publication(params.published.as_deref())?,
    };

    state
        .services
        .post_queries
        .list_posts(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/recent",
    responses(
        (status = 200, description = "The three newest published posts.", body = [PostDto])
    ),
    tag = "Posts"
)]
pub async fn recent_posts(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<PostDto>>> {
    state
        .services
        .post_queries
        .recent_posts()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/lookup",
    params(PostLookupParams),
    responses(
        (status = 200, description = "The post by id (preferred) or slug, or `null`.", body = PostDto)
    ),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    ApiQuery(params): ApiQuery<PostLookupParams>,
) -> HttpResult<Json<Option<PostDto>>> {
    state
        .services
        .post_queries
        .get_post(GetPostQuery {
            id: params.id,
            slug: params.slug,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post with its categories, or `null`.", body = PostWithCategoriesDto)
    ),
    tag = "Posts"
)]
pub async fn get_post_with_categories(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<Option<PostWithCategoriesDto>>> {
    state
        .services
        .post_queries
        .get_post_with_categories(GetPostWithCategoriesQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 200, description = "The created post.", body = PostDto),
        (status = 400, description = "Validation failed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "A category does not exist.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<CreatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = CreatePostCommand {
        title: payload.title,
        content: payload.content,
        description: payload.description,
        author: payload.author,
        image_url: payload.image_url,
        tags: payload.tags,
        published: payload.published,
        category_ids: payload.category_ids,
    };

    state
        .services
        .post_commands
        .create_post(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "The updated post.", body = PostDto),
        (status = 400, description = "Validation failed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    ApiJson(payload): ApiJson<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        id,
        title: payload.title,
        content: payload.content,
        description: payload.description,
        author: payload.author,
        image_url: payload.image_url,
        tags: payload.tags,
        published: payload.published,
        category_ids: payload.category_ids,
    };

    state
        .services
        .post_commands
        .update_post(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    params(("id" = i64, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post and its category links removed.", body = DeletedDto),
        (status = 404, description = "Post not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<DeletedDto>> {
    state
        .services
        .post_commands
        .delete_post(DeletePostCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publication_param_parsing() {
        assert_eq!(parse_publication(None).unwrap(), PublicationFilter::Published);
        assert_eq!(
            parse_publication(Some("false")).unwrap(),
            PublicationFilter::Drafts
        );
        assert_eq!(parse_publication(Some("all")).unwrap(), PublicationFilter::All);
        assert!(parse_publication(Some("maybe")).is_err());
    }
}
