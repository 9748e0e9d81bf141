// src/application/commands/news/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::news::{FormState, NewsId, NewsReadRepository, NewsSlug, NewsWriteRepository, ValidatedNews},
};

pub struct NewsCommandService {
    pub(super) write_repo: Arc<dyn NewsWriteRepository>,
    pub(super) read_repo: Arc<dyn NewsReadRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl NewsCommandService {
    pub fn new(
        write_repo: Arc<dyn NewsWriteRepository>,
        read_repo: Arc<dyn NewsReadRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            clock,
        }
    }

    pub(super) fn validate(form: &FormState) -> ApplicationResult<ValidatedNews> {
        form.validate().map_err(ApplicationError::invalid_form)
    }

    /// Slugs are unique across records; `owner` may keep its own.
    pub(super) async fn ensure_slug_available(
        &self,
        slug: &NewsSlug,
        owner: Option<NewsId>,
    ) -> ApplicationResult<()> {
        match self.read_repo.find_by_slug(slug).await? {
            Some(existing) if Some(existing.id) != owner => Err(ApplicationError::conflict(
                format!("slug {slug} is already taken"),
            )),
            _ => Ok(()),
        }
    }
}
