pub mod content;
pub mod entity;
pub mod form;
pub mod listing;
pub mod repository;
pub mod value_objects;

pub use content::{ContentBlock, HeadingLevel};
pub use entity::{NewNews, News, NewsUpdate};
pub use form::{FieldChange, FormBatch, FormField, FormSession, FormState, ValidatedNews};
pub use listing::{NewsColumn, NewsListFilter, NewsSort, SortDirection};
pub use repository::{NewsReadRepository, NewsWriteRepository};
pub use value_objects::{MAX_FIELD_LENGTH, NewsId, NewsSlug, NewsTitle};
