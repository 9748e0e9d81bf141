use crate::domain::errors::DomainResult;
use crate::domain::news::entity::{NewNews, News, NewsUpdate};
use crate::domain::news::listing::NewsListFilter;
use crate::domain::news::value_objects::{NewsId, NewsSlug};
use async_trait::async_trait;

#[async_trait]
pub trait NewsWriteRepository: Send + Sync {
    async fn insert(&self, news: NewNews) -> DomainResult<News>;
    async fn update(&self, update: NewsUpdate) -> DomainResult<News>;
    async fn delete(&self, id: NewsId) -> DomainResult<()>;
    /// Removes every listed record that exists and returns how many were removed.
    async fn delete_many(&self, ids: &[NewsId]) -> DomainResult<usize>;
}

#[async_trait]
pub trait NewsReadRepository: Send + Sync {
    async fn find_by_id(&self, id: NewsId) -> DomainResult<Option<News>>;
    async fn find_by_slug(&self, slug: &NewsSlug) -> DomainResult<Option<News>>;
    /// One page of matching records plus the total number of matches.
    async fn list_page(&self, filter: &NewsListFilter) -> DomainResult<(Vec<News>, u64)>;
}
