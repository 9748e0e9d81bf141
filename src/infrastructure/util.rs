use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Lower-case, ASCII-transliterated, `-`-separated slugs.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn slug(input: &str) -> String {
        DefaultSlugGenerator.slugify(input)
    }

    #[test]
    fn collapses_separators() {
        assert_eq!(slug("Hello World"), "hello-world");
        assert_eq!(slug("  Hello,   World!! "), "hello-world");
        assert_eq!(slug("--a__b--"), "a-b");
    }

    #[test]
    fn empty_input_yields_empty_slug() {
        assert_eq!(slug(""), "");
        assert_eq!(slug("!!!"), "");
    }

    #[test]
    fn transliterates_non_ascii() {
        assert_eq!(slug("Crème Brûlée"), "creme-brulee");
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

        #[test]
        fn slugify_is_idempotent(input in any::<String>()) {
            let once = slug(&input);
            prop_assert_eq!(slug(&once), once);
        }

        #[test]
        fn slugify_stays_in_alphabet(input in any::<String>()) {
            let out = slug(&input);
            prop_assert!(out.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!out.starts_with('-'));
            prop_assert!(!out.ends_with('-'));
            prop_assert!(!out.contains("--"));
        }
    }
}
