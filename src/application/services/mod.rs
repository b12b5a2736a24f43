// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            categories::CategoryCommandService, posts::PostCommandService, uploads::UploadService,
        },
        ports::{ClockPort, ImageUploaderPort, SlugGeneratorPort},
        queries::{categories::CategoryQueryService, posts::PostQueryService},
    },
    domain::{
        category::{CategoryReadRepository, CategoryWriteRepository},
        post::{PostReadRepository, PostWriteRepository},
    },
};

/// Repository implementations the services are built on.
pub struct Repositories {
    pub post_write: Arc<dyn PostWriteRepository>,
    pub post_read: Arc<dyn PostReadRepository>,
    pub category_write: Arc<dyn CategoryWriteRepository>,
    pub category_read: Arc<dyn CategoryReadRepository>,
}

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub uploads: Arc<UploadService>,
}

impl ApplicationServices {
    pub fn new(
        repos: Repositories,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        uploader: Option<Arc<ImageUploaderPort>>,
    ) -> Self {
        let post_commands = Arc::new(PostCommandService::new(
            Arc::clone(&repos.post_write),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));
        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&repos.post_read)));

        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&repos.category_write),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));
        let category_queries =
            Arc::new(CategoryQueryService::new(Arc::clone(&repos.category_read)));

        let uploads = Arc::new(UploadService::new(uploader));

        Self {
            post_commands,
            post_queries,
            category_commands,
            category_queries,
            uploads,
        }
    }
}
