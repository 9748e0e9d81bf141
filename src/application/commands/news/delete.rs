use tracing::info;

use super::NewsCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::news::NewsId,
};

pub struct DeleteNewsCommand {
    pub id: i64,
}

/// Bulk action of the table; ids that no longer exist are skipped.
pub struct BulkDeleteNewsCommand {
    pub ids: Vec<i64>,
}

impl NewsCommandService {
    pub async fn delete_news(&self, command: DeleteNewsCommand) -> ApplicationResult<()> {
        let id = NewsId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("news not found"))?;

        self.write_repo.delete(id).await?;
        info!(news_id = %id, "news deleted");
        Ok(())
    }

    pub async fn bulk_delete_news(&self, command: BulkDeleteNewsCommand) -> ApplicationResult<usize> {
        let ids = command
            .ids
            .into_iter()
            .map(NewsId::new)
            .collect::<Result<Vec<_>, _>>()?;
        if ids.is_empty() {
            return Ok(0);
        }

        let deleted = self.write_repo.delete_many(&ids).await?;
        info!(requested = ids.len(), deleted, "bulk delete");
        Ok(deleted)
    }
}
