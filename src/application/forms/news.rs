use std::sync::Arc;

use tracing::debug;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::util::SlugGenerator,
    },
    domain::news::{FormSession, NewsId, NewsReadRepository},
};

/// Opens form sessions for the create and edit pages.
pub struct NewsFormService {
    read_repo: Arc<dyn NewsReadRepository>,
    slugger: Arc<dyn SlugGenerator>,
}

impl NewsFormService {
    pub fn new(read_repo: Arc<dyn NewsReadRepository>, slugger: Arc<dyn SlugGenerator>) -> Self {
        Self { read_repo, slugger }
    }

    pub fn create_form(&self) -> FormSession {
        FormSession::create(Arc::clone(&self.slugger))
    }

    pub async fn edit_form(&self, id: i64) -> ApplicationResult<FormSession> {
        let id = NewsId::new(id)?;
        let news = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news not found"))?;
        debug!(news_id = %id, slug = %news.slug, "opened edit form");
        Ok(FormSession::edit(&news, Arc::clone(&self.slugger)))
    }
}
