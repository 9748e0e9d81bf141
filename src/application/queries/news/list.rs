use super::NewsQueryService;
use crate::{
    application::{
        dto::{NewsDto, Page},
        error::ApplicationResult,
    },
    domain::news::{NewsColumn, NewsListFilter, NewsSort, SortDirection},
};

const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Default)]
pub struct ListNewsQuery {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
    /// 1-based; 0 is read as the first page.
    pub page: u32,
    /// 0 selects the configured default.
    pub per_page: u32,
}

impl NewsQueryService {
    pub async fn list_news(&self, query: ListNewsQuery) -> ApplicationResult<Page<NewsDto>> {
        let (page, per_page) = self.normalize_paging(query.page, query.per_page);
        let offset = (page as usize - 1) * per_page as usize;

        let mut filter = NewsListFilter::new(offset, per_page as usize);
        if let Some(search) = query.search {
            filter = filter.with_search(search);
        }
        if let Some(sort) = Self::parse_sort(query.sort.as_deref(), query.direction.as_deref())? {
            filter = filter.with_sort(sort);
        }

        let (records, total) = self.read_repo.list_page(&filter).await?;
        let items = records.into_iter().map(Into::into).collect();
        Ok(Page::new(items, total, page, per_page))
    }

    pub(super) fn normalize_paging(&self, page: u32, per_page: u32) -> (u32, u32) {
        let page = page.max(1);
        let per_page = if per_page == 0 {
            self.default_per_page
        } else {
            per_page.min(MAX_PER_PAGE)
        };
        (page, per_page)
    }

    fn parse_sort(
        column: Option<&str>,
        direction: Option<&str>,
    ) -> ApplicationResult<Option<NewsSort>> {
        let Some(column) = column.filter(|c| !c.trim().is_empty()) else {
            return Ok(None);
        };
        let column = NewsColumn::parse(column)?;
        let direction = direction
            .map(SortDirection::parse)
            .transpose()?
            .unwrap_or_default();
        Ok(Some(NewsSort::new(column, direction)?))
    }
}
