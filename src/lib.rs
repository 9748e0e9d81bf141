//! News admin resource: block-based editor forms whose slug follows the title
//! across batched updates, a searchable and sortable table, and a record store.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
