// src/application/commands/slugs.rs
use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::{errors::DomainResult, slug::Slug};

/// Slugify `text` into a base slug for an entity of kind `entity`. Text with
/// no usable characters falls back to `<entity>-<unix timestamp>`.
pub(crate) fn base_slug(
    generator: &dyn SlugGenerator,
    clock: &dyn Clock,
    entity: &str,
    text: &str,
    max_len: usize,
) -> DomainResult<Slug> {
    let slug = generator.slugify(text);
    if slug.is_empty() {
        Slug::base(&format!("{entity}-{}", clock.now().timestamp()), max_len)
    } else {
        Slug::base(&slug, max_len)
    }
}
