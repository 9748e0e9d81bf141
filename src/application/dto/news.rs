use crate::domain::news::{ContentBlock, News};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: Vec<ContentBlock>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<News> for NewsDto {
    fn from(news: News) -> Self {
        Self {
            id: news.id.into(),
            title: news.title.into_inner(),
            slug: news.slug.into_inner(),
            content: news.content,
            created_at: news.created_at,
            updated_at: news.updated_at,
        }
    }
}
