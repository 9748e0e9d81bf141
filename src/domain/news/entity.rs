// src/domain/news/entity.rs
use crate::domain::news::content::ContentBlock;
use crate::domain::news::value_objects::{NewsId, NewsSlug, NewsTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct News {
    pub id: NewsId,
    pub title: NewsTitle,
    pub slug: NewsSlug,
    pub content: Vec<ContentBlock>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl News {
    pub fn from_new(id: NewsId, new: NewNews) -> Self {
        Self {
            id,
            title: new.title,
            slug: new.slug,
            content: new.content,
            created_at: new.created_at,
            updated_at: new.updated_at,
        }
    }

    /// Copy every present field of `update` onto the record.
    pub fn apply(&mut self, update: NewsUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(slug) = update.slug {
            self.slug = slug;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        self.updated_at = update.updated_at;
    }
}

#[derive(Debug, Clone)]
pub struct NewNews {
    pub title: NewsTitle,
    pub slug: NewsSlug,
    pub content: Vec<ContentBlock>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewsUpdate {
    pub id: NewsId,
    pub title: Option<NewsTitle>,
    pub slug: Option<NewsSlug>,
    pub content: Option<Vec<ContentBlock>>,
    pub updated_at: DateTime<Utc>,
}

impl NewsUpdate {
    pub fn new(id: NewsId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            content: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: NewsTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: NewsSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_content(mut self, content: Vec<ContentBlock>) -> Self {
        self.content = Some(content);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.slug.is_none() && self.content.is_none()
    }
}
