use crate::domain::news::NewsColumn;
use serde::Serialize;

/// Table column as the listing host renders it.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnDto {
    pub name: &'static str,
    pub label: &'static str,
    pub searchable: bool,
    pub sortable: bool,
    pub toggleable: bool,
    pub hidden_by_default: bool,
}

impl From<NewsColumn> for ColumnDto {
    fn from(column: NewsColumn) -> Self {
        Self {
            name: column.name(),
            label: column.label(),
            searchable: column.is_searchable(),
            sortable: column.is_sortable(),
            toggleable: column.is_toggleable(),
            hidden_by_default: column.is_hidden_by_default(),
        }
    }
}

pub fn news_columns() -> Vec<ColumnDto> {
    NewsColumn::ALL.into_iter().map(ColumnDto::from).collect()
}
