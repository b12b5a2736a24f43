use crate::domain::errors::DomainError;

const CNT_POST_SLUG: &str = "posts_slug_key";
const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_LINK_POST: &str = "post_categories_post_id_fkey";
const CNT_LINK_CATEGORY: &str = "post_categories_category_id_fkey";
const CNT_LINK_PAIR: &str = "post_categories_post_id_category_id_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_POST_SLUG => DomainError::Conflict("post slug already exists".into()),
                    CNT_CATEGORY_SLUG => {
                        DomainError::Conflict("category slug already exists".into())
                    }
                    CNT_LINK_POST => DomainError::NotFound("post not found".into()),
                    CNT_LINK_CATEGORY => DomainError::NotFound("category not found".into()),
                    CNT_LINK_PAIR => {
                        DomainError::Conflict("post is already in this category".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
