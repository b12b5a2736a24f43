use crate::application::ports::util::SlugGenerator;
use slug::slugify;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_punctuation_and_whitespace() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Hello, World!"), "hello-world");
        assert_eq!(slugger.slugify("  Rust   &  Axum  "), "rust-axum");
    }

    #[test]
    fn transliterates_accents() {
        assert_eq!(DefaultSlugGenerator.slugify("Café Crème"), "cafe-creme");
    }

    #[test]
    fn symbols_only_yield_empty_slug() {
        assert_eq!(DefaultSlugGenerator.slugify("!!!"), "");
    }
}
