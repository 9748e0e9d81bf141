use tracing::{info, warn};

use super::NewsCommandService;
use crate::{
    application::{
        dto::NewsDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::news::{FormState, NewsId, NewsUpdate},
};

pub struct UpdateNewsCommand {
    pub id: i64,
    pub form: FormState,
}

impl NewsCommandService {
    pub async fn update_news(&self, command: UpdateNewsCommand) -> ApplicationResult<NewsDto> {
        let id = NewsId::new(command.id)?;
        let validated = Self::validate(&command.form).inspect_err(|err| {
            warn!(news_id = %id, error = %err, fields = ?err.field_errors(), "rejected news submit");
        })?;

        let existing = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news not found"))?;
        self.ensure_slug_available(&validated.slug, Some(existing.id))
            .await?;

        let mut update = NewsUpdate::new(id, self.clock.now());
        if validated.title != existing.title {
            update = update.with_title(validated.title);
        }
        if validated.slug != existing.slug {
            update = update.with_slug(validated.slug);
        }
        if validated.content != existing.content {
            update = update.with_content(validated.content);
        }

        if update.is_empty() {
            return Ok(existing.into());
        }

        let updated = self.write_repo.update(update).await?;
        info!(news_id = %updated.id, slug = %updated.slug, "news updated");
        Ok(updated.into())
    }
}
