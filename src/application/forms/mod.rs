mod news;

pub use news::NewsFormService;
