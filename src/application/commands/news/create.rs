// src/application/commands/news/create.rs
use tracing::{info, warn};

use super::NewsCommandService;
use crate::{
    application::{dto::NewsDto, error::ApplicationResult},
    domain::news::{FormState, NewNews},
};

pub struct CreateNewsCommand {
    pub form: FormState,
}

impl NewsCommandService {
    pub async fn create_news(&self, command: CreateNewsCommand) -> ApplicationResult<NewsDto> {
        let validated = Self::validate(&command.form).inspect_err(|err| {
            warn!(error = %err, fields = ?err.field_errors(), "rejected news submit");
        })?;
        self.ensure_slug_available(&validated.slug, None).await?;

        let now = self.clock.now();
        let created = self
            .write_repo
            .insert(NewNews {
                title: validated.title,
                slug: validated.slug,
                content: validated.content,
                created_at: now,
                updated_at: now,
            })
            .await?;

        info!(news_id = %created.id, slug = %created.slug, "news created");
        Ok(created.into())
    }
}
