use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::news::entity::News;
use std::cmp::Ordering;

/// Columns of the news table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NewsColumn {
    Slug,
    Title,
    CreatedAt,
    UpdatedAt,
}

impl NewsColumn {
    pub const ALL: [NewsColumn; 4] = [
        NewsColumn::Slug,
        NewsColumn::Title,
        NewsColumn::CreatedAt,
        NewsColumn::UpdatedAt,
    ];

    pub fn parse(name: &str) -> DomainResult<Self> {
        match name.trim() {
            "slug" => Ok(NewsColumn::Slug),
            "title" => Ok(NewsColumn::Title),
            "created_at" => Ok(NewsColumn::CreatedAt),
            "updated_at" => Ok(NewsColumn::UpdatedAt),
            other => Err(DomainError::Validation(format!("unknown column: {other}"))),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NewsColumn::Slug => "slug",
            NewsColumn::Title => "title",
            NewsColumn::CreatedAt => "created_at",
            NewsColumn::UpdatedAt => "updated_at",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NewsColumn::Slug => "Slug",
            NewsColumn::Title => "Title",
            NewsColumn::CreatedAt => "Created at",
            NewsColumn::UpdatedAt => "Updated at",
        }
    }

    pub fn is_searchable(self) -> bool {
        matches!(self, NewsColumn::Slug | NewsColumn::Title)
    }

    pub fn is_sortable(self) -> bool {
        matches!(self, NewsColumn::CreatedAt | NewsColumn::UpdatedAt)
    }

    pub fn is_toggleable(self) -> bool {
        matches!(self, NewsColumn::CreatedAt | NewsColumn::UpdatedAt)
    }

    pub fn is_hidden_by_default(self) -> bool {
        self.is_toggleable()
    }

    pub fn visible_by_default() -> impl Iterator<Item = NewsColumn> {
        Self::ALL
            .into_iter()
            .filter(|column| !column.is_hidden_by_default())
    }

    fn text<'a>(self, news: &'a News) -> Option<&'a str> {
        match self {
            NewsColumn::Slug => Some(news.slug.as_str()),
            NewsColumn::Title => Some(news.title.as_str()),
            NewsColumn::CreatedAt | NewsColumn::UpdatedAt => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(value: &str) -> DomainResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(DomainError::Validation(format!(
                "sort direction must be asc or desc, got {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsSort {
    column: NewsColumn,
    direction: SortDirection,
}

impl NewsSort {
    pub fn new(column: NewsColumn, direction: SortDirection) -> DomainResult<Self> {
        if !column.is_sortable() {
            return Err(DomainError::Validation(format!(
                "column {} is not sortable",
                column.name()
            )));
        }
        Ok(Self { column, direction })
    }

    pub fn column(&self) -> NewsColumn {
        self.column
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    fn compare(&self, a: &News, b: &News) -> Ordering {
        let ordering = match self.column {
            NewsColumn::CreatedAt => a.created_at.cmp(&b.created_at),
            NewsColumn::UpdatedAt => a.updated_at.cmp(&b.updated_at),
            NewsColumn::Slug | NewsColumn::Title => Ordering::Equal,
        };
        let ordering = ordering.then_with(|| a.id.cmp(&b.id));
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Search, sort and window applied to the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsListFilter {
    search: Option<String>,
    sort: Option<NewsSort>,
    offset: usize,
    limit: usize,
}

impl NewsListFilter {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self {
            search: None,
            sort: None,
            offset,
            limit,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        let trimmed = search.trim();
        self.search = (!trimmed.is_empty()).then(|| trimmed.to_lowercase());
        self
    }

    pub fn with_sort(mut self, sort: NewsSort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn sort(&self) -> Option<NewsSort> {
        self.sort
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Case-insensitive substring match over the searchable columns.
    pub fn matches(&self, news: &News) -> bool {
        let Some(needle) = self.search.as_deref() else {
            return true;
        };
        NewsColumn::ALL
            .into_iter()
            .filter(|column| column.is_searchable())
            .filter_map(|column| column.text(news))
            .any(|text| text.to_lowercase().contains(needle))
    }

    /// Table order: the requested sort, otherwise newest record first.
    pub fn compare(&self, a: &News, b: &News) -> Ordering {
        match &self.sort {
            Some(sort) => sort.compare(a, b),
            None => b.id.cmp(&a.id),
        }
    }

    /// Filter, order and window `records`, returning the page and the match count.
    pub fn apply<'a, I>(&self, records: I) -> (Vec<News>, u64)
    where
        I: IntoIterator<Item = &'a News>,
    {
        let mut matched: Vec<&News> = records.into_iter().filter(|n| self.matches(n)).collect();
        matched.sort_by(|a, b| self.compare(a, b));
        let total = matched.len() as u64;
        let page = matched
            .into_iter()
            .skip(self.offset)
            .take(self.limit)
            .cloned()
            .collect();
        (page, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::news::value_objects::{NewsId, NewsSlug, NewsTitle};
    use chrono::{Duration, TimeZone, Utc};

    fn news(id: i64, title: &str, slug: &str, minutes: i64) -> News {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let at = base + Duration::minutes(minutes);
        News {
            id: NewsId::new(id).unwrap(),
            title: NewsTitle::new(title).unwrap(),
            slug: NewsSlug::new(slug).unwrap(),
            content: vec![],
            created_at: at,
            updated_at: at + Duration::minutes(100 - 2 * minutes),
        }
    }

    fn fixtures() -> Vec<News> {
        vec![
            news(1, "Hello World", "hello-world", 0),
            news(2, "Release notes", "release", 10),
            news(3, "Another post", "world-tour", 5),
        ]
    }

    #[test]
    fn column_flags_follow_table_definition() {
        let visible: Vec<_> = NewsColumn::visible_by_default().collect();
        assert_eq!(visible, vec![NewsColumn::Slug, NewsColumn::Title]);
        assert!(NewsColumn::CreatedAt.is_sortable());
        assert!(!NewsColumn::Title.is_sortable());
        assert!(!NewsColumn::UpdatedAt.is_searchable());
    }

    #[test]
    fn title_is_not_sortable() {
        assert!(NewsSort::new(NewsColumn::Title, SortDirection::Asc).is_err());
    }

    #[test]
    fn default_order_is_newest_first() {
        let records = fixtures();
        let (page, total) = NewsListFilter::new(0, 10).apply(&records);
        let ids: Vec<i64> = page.iter().map(|n| n.id.into()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(total, 3);
    }

    #[test]
    fn search_matches_title_or_slug_case_insensitively() {
        let records = fixtures();
        let filter = NewsListFilter::new(0, 10).with_search("  WORLD ");
        let (page, total) = filter.apply(&records);
        let ids: Vec<i64> = page.iter().map(|n| n.id.into()).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(total, 2);
    }

    #[test]
    fn blank_search_is_ignored() {
        let filter = NewsListFilter::new(0, 10).with_search("   ");
        assert!(filter.search().is_none());
    }

    #[test]
    fn sorts_by_timestamp_columns() {
        let records = fixtures();
        let created_desc = NewsSort::new(NewsColumn::CreatedAt, SortDirection::Desc).unwrap();
        let (page, _) = NewsListFilter::new(0, 10)
            .with_sort(created_desc)
            .apply(&records);
        let ids: Vec<i64> = page.iter().map(|n| n.id.into()).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        let updated_asc = NewsSort::new(NewsColumn::UpdatedAt, SortDirection::Asc).unwrap();
        let (page, _) = NewsListFilter::new(0, 10)
            .with_sort(updated_asc)
            .apply(&records);
        let ids: Vec<i64> = page.iter().map(|n| n.id.into()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn window_reports_full_total() {
        let records = fixtures();
        let (page, total) = NewsListFilter::new(1, 1).apply(&records);
        assert_eq!(page.len(), 1);
        assert_eq!(i64::from(page[0].id), 2);
        assert_eq!(total, 3);
    }
}
