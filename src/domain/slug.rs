// src/domain/slug.rs
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::fmt;

/// Room kept at the end of a base slug for a `-<n>` collision suffix.
pub const SUFFIX_RESERVE: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(DomainError::Validation(
                "slug cannot contain whitespace".into(),
            ));
        }
        Ok(Self(value))
    }

    /// Build a base slug that fits in a column of `max_len` characters once a
    /// numeric suffix is appended.
    pub fn base(value: &str, max_len: usize) -> DomainResult<Self> {
        let limit = max_len.saturating_sub(SUFFIX_RESERVE).max(1);
        let truncated = value
            .char_indices()
            .nth(limit)
            .map_or(value, |(idx, _)| value[..idx].trim_end_matches('-'));
        Self::new(truncated)
    }

    /// Candidate for the `n`-th probe: the base itself for `n == 1`,
    /// `base-n` afterwards.
    pub fn candidate(&self, attempt: u64) -> Self {
        if attempt <= 1 {
            self.clone()
        } else {
            Self(format!("{}-{attempt}", self.0))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Slug> for String {
    fn from(value: Slug) -> Self {
        value.0
    }
}

/// Answers whether a slug candidate may be taken. Implementations decide the
/// self-match rule: a record being renamed may keep its own slug.
#[async_trait]
pub trait SlugAvailability: Send {
    async fn is_available(&mut self, candidate: &Slug) -> DomainResult<bool>;
}

/// Probe `base`, `base-2`, `base-3`, ... and return the first candidate the
/// probe reports as available.
pub async fn generate_unique_slug<A>(base: &Slug, probe: &mut A) -> DomainResult<Slug>
where
    A: SlugAvailability + ?Sized,
{
    let mut attempt = 1u64;
    loop {
        let candidate = base.candidate(attempt);
        if probe.is_available(&candidate).await? {
            return Ok(candidate);
        }
        attempt += 1;
    }
}
