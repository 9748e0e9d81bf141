// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Must be total and deterministic: every input yields a slug, `""` for `""`.
    fn slugify(&self, input: &str) -> String;
}
