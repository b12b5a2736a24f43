// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Lower-case `input` and collapse every run of characters outside
    /// `[a-z0-9]` into one hyphen, trimming hyphens at both ends. May return
    /// an empty string.
    fn slugify(&self, input: &str) -> String;
}
