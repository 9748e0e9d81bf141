use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::news::{
    NewNews, News, NewsId, NewsListFilter, NewsReadRepository, NewsSlug, NewsUpdate,
    NewsWriteRepository,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug)]
struct Store {
    next_id: i64,
    records: BTreeMap<NewsId, News>,
}

impl Store {
    fn slug_taken(&self, slug: &NewsSlug, owner: Option<NewsId>) -> bool {
        self.records
            .values()
            .any(|news| &news.slug == slug && Some(news.id) != owner)
    }
}

/// Record store kept in process memory. Serves both the read and the write side;
/// share one instance behind an `Arc` for each trait object.
#[derive(Debug)]
pub struct InMemoryNewsRepository {
    inner: RwLock<Store>,
}

impl Default for InMemoryNewsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryNewsRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Store {
                next_id: 1,
                records: BTreeMap::new(),
            }),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn slug_conflict() -> DomainError {
    DomainError::Conflict("slug already exists".into())
}

#[async_trait]
impl NewsWriteRepository for InMemoryNewsRepository {
    async fn insert(&self, news: NewNews) -> DomainResult<News> {
        let mut store = self.inner.write().await;
        if store.slug_taken(&news.slug, None) {
            return Err(slug_conflict());
        }

        let id = NewsId::new(store.next_id)?;
        store.next_id += 1;
        let record = News::from_new(id, news);
        store.records.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, update: NewsUpdate) -> DomainResult<News> {
        let mut store = self.inner.write().await;
        if let Some(slug) = &update.slug {
            if store.slug_taken(slug, Some(update.id)) {
                return Err(slug_conflict());
            }
        }

        let record = store
            .records
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::NotFound("news not found".into()))?;
        record.apply(update);
        Ok(record.clone())
    }

    async fn delete(&self, id: NewsId) -> DomainResult<()> {
        let mut store = self.inner.write().await;
        store
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("news not found".into()))
    }

    async fn delete_many(&self, ids: &[NewsId]) -> DomainResult<usize> {
        let mut store = self.inner.write().await;
        Ok(ids
            .iter()
            .filter(|id| store.records.remove(*id).is_some())
            .count())
    }
}

#[async_trait]
impl NewsReadRepository for InMemoryNewsRepository {
    async fn find_by_id(&self, id: NewsId) -> DomainResult<Option<News>> {
        let store = self.inner.read().await;
        Ok(store.records.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &NewsSlug) -> DomainResult<Option<News>> {
        let store = self.inner.read().await;
        Ok(store.records.values().find(|news| &news.slug == slug).cloned())
    }

    async fn list_page(&self, filter: &NewsListFilter) -> DomainResult<(Vec<News>, u64)> {
        let store = self.inner.read().await;
        Ok(filter.apply(store.records.values()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::news::{ContentBlock, NewsTitle};
    use chrono::{Duration, Utc};

    fn new_news(title: &str, slug: &str) -> NewNews {
        let now = Utc::now();
        NewNews {
            title: NewsTitle::new(title).unwrap(),
            slug: NewsSlug::new(slug).unwrap(),
            content: vec![ContentBlock::paragraph("body")],
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let repo = InMemoryNewsRepository::new();
        let first = repo.insert(new_news("One", "one")).await.unwrap();
        let second = repo.insert(new_news("Two", "two")).await.unwrap();
        assert_eq!(i64::from(first.id), 1);
        assert_eq!(i64::from(second.id), 2);
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn duplicate_slug_is_a_conflict() {
        let repo = InMemoryNewsRepository::new();
        repo.insert(new_news("One", "same")).await.unwrap();
        let err = repo.insert(new_news("Two", "same")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_may_keep_own_slug_but_not_steal_one() {
        let repo = InMemoryNewsRepository::new();
        let one = repo.insert(new_news("One", "one")).await.unwrap();
        repo.insert(new_news("Two", "two")).await.unwrap();

        let later = one.updated_at + Duration::seconds(1);
        let kept = repo
            .update(NewsUpdate::new(one.id, later).with_slug(NewsSlug::new("one").unwrap()))
            .await
            .unwrap();
        assert_eq!(kept.updated_at, later);

        let err = repo
            .update(NewsUpdate::new(one.id, later).with_slug(NewsSlug::new("two").unwrap()))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_missing_record_is_not_found() {
        let repo = InMemoryNewsRepository::new();
        let err = repo
            .update(NewsUpdate::new(NewsId::new(42).unwrap(), Utc::now()))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_many_skips_unknown_ids() {
        let repo = InMemoryNewsRepository::new();
        let one = repo.insert(new_news("One", "one")).await.unwrap();
        let two = repo.insert(new_news("Two", "two")).await.unwrap();

        let deleted = repo
            .delete_many(&[one.id, NewsId::new(99).unwrap(), two.id])
            .await
            .unwrap();
        assert_eq!(deleted, 2);
        assert!(repo.is_empty().await);
        assert!(matches!(
            repo.delete(one.id).await.unwrap_err(),
            DomainError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn find_by_slug_and_list() {
        let repo = InMemoryNewsRepository::new();
        repo.insert(new_news("Hello World", "hello-world")).await.unwrap();
        repo.insert(new_news("Other", "other")).await.unwrap();

        let found = repo
            .find_by_slug(&NewsSlug::new("hello-world").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.title.as_str(), "Hello World");

        let (page, total) = repo
            .list_page(&NewsListFilter::new(0, 10).with_search("hello"))
            .await
            .unwrap();
        assert_eq!(total, 1);
        assert_eq!(page[0].slug.as_str(), "hello-world");
    }
}
