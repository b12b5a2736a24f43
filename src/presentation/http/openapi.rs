// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::recent_posts,
        crate::presentation::http::controllers::posts::get_post,
        crate::presentation::http::controllers::posts::get_post_with_categories,
        crate::presentation::http::controllers::posts::create_post,
        crate::presentation::http::controllers::posts::update_post,
        crate::presentation::http::controllers::posts::delete_post,
        crate::presentation::http::controllers::categories::list_categories,
        crate::presentation::http::controllers::categories::get_category,
        crate::presentation::http::controllers::categories::create_category,
        crate::presentation::http::controllers::categories::update_category,
        crate::presentation::http::controllers::categories::delete_category,
        crate::presentation::http::controllers::uploads::upload_image,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::error::UploadErrorResponse,
            crate::presentation::http::controllers::posts::CreatePostRequest,
            crate::presentation::http::controllers::posts::UpdatePostRequest,
            crate::presentation::http::controllers::categories::CreateCategoryRequest,
            crate::presentation::http::controllers::categories::UpdateCategoryRequest,
            crate::presentation::http::controllers::uploads::UploadForm,
            crate::application::dto::PostDto,
            crate::application::dto::PostWithCategoriesDto,
            crate::application::dto::CategoryDto,
            crate::application::dto::PaginationDto,
            crate::application::dto::PostPageDto,
            crate::application::dto::DeletedDto,
            crate::application::dto::UploadedImageDto
        )
    ),
    tags(
        (name = "Posts", description = "Blog post management"),
        (name = "Categories", description = "Category management"),
        (name = "Uploads", description = "Image uploads to the CDN"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ServerList),
    info(
        title = "Quillpost API",
        description = "Blogging backend: posts, categories and image uploads",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Fills `servers` from `PUBLIC_API_URLS` (comma separated) or
/// `PUBLIC_API_URL`, always keeping the local default.
struct ServerList;

const LOCAL_SERVER: &str = "http://localhost:8080";

fn server_urls(urls: Option<&str>, url: Option<&str>) -> Vec<String> {
    let mut candidates: Vec<String> = urls
        .into_iter()
        .chain(url)
        .flat_map(|value| value.split(','))
        .map(|segment| segment.trim().trim_end_matches('/').to_string())
        .filter(|segment| !segment.is_empty())
        .collect();
    candidates.push(LOCAL_SERVER.to_string());

    let mut seen = HashSet::new();
    candidates.retain(|candidate| seen.insert(candidate.clone()));
    candidates
}

impl Modify for ServerList {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let urls = env::var("PUBLIC_API_URLS").ok();
        let url = env::var("PUBLIC_API_URL").ok();
        openapi.servers = Some(
            server_urls(urls.as_deref(), url.as_deref())
                .into_iter()
                .map(Server::new)
                .collect(),
        );
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Write the document to `OPENAPI_SNAPSHOT_PATH` (default `spec/openapi.json`)
/// and return the path written.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
