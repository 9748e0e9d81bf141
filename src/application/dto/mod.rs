pub mod columns;
pub mod news;
pub mod pagination;
pub mod serde_time;

pub use columns::{ColumnDto, news_columns};
pub use news::NewsDto;
pub use pagination::Page;
