// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_category;
mod postgres_post;
mod slugs;

pub use error::map_sqlx;
pub use postgres_category::{PostgresCategoryReadRepository, PostgresCategoryWriteRepository};
pub use postgres_post::{PostgresPostReadRepository, PostgresPostWriteRepository};
