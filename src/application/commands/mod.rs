pub mod categories;
pub mod posts;
pub mod uploads;

mod slugs;

use crate::application::error::ApplicationError;
use crate::domain::errors::DomainError;

/// Log a storage-side failure and wrap it with the operation intent.
pub(crate) fn operation_failed(intent: &str, err: DomainError) -> ApplicationError {
    tracing::error!(error = %err, "{intent}");
    ApplicationError::from(err).wrap(intent)
}
