use crate::domain::errors::FieldError;
use crate::domain::news::content::ContentBlock;
use crate::domain::news::entity::News;
use crate::domain::news::value_objects::{NewsSlug, NewsTitle};
use serde::{Deserialize, Serialize};

/// Field values of one in-progress news edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub title: String,
    pub slug: String,
    pub content: Vec<ContentBlock>,
}

/// A form that passed every rule, ready to be persisted.
#[derive(Debug, Clone)]
pub struct ValidatedNews {
    pub title: NewsTitle,
    pub slug: NewsSlug,
    pub content: Vec<ContentBlock>,
}

impl FormState {
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            content: Vec::new(),
        }
    }

    pub fn with_content(mut self, content: Vec<ContentBlock>) -> Self {
        self.content = content;
        self
    }

    /// Check every rule and collect all failures rather than stopping at the first.
    pub fn validate(&self) -> Result<ValidatedNews, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = NewsTitle::new(self.title.clone())
            .map_err(|err| errors.push(FieldError::new("title", err.reason())))
            .ok();
        let slug = NewsSlug::new(self.slug.clone())
            .map_err(|err| errors.push(FieldError::new("slug", err.reason())))
            .ok();

        for (index, block) in self.content.iter().enumerate() {
            if let Some(reason) = block.check() {
                errors.push(FieldError::new(format!("content.{index}.content"), reason));
            }
        }

        match (title, slug) {
            (Some(title), Some(slug)) if errors.is_empty() => Ok(ValidatedNews {
                title,
                slug,
                content: self.content.clone(),
            }),
            _ => Err(errors),
        }
    }
}

impl From<&News> for FormState {
    fn from(news: &News) -> Self {
        Self {
            title: news.title.as_str().to_owned(),
            slug: news.slug.as_str().to_owned(),
            content: news.content.clone(),
        }
    }
}
