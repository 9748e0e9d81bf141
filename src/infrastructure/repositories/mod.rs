// src/infrastructure/repositories/mod.rs
mod memory_news;

pub use memory_news::InMemoryNewsRepository;
