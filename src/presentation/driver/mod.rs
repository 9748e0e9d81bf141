// src/presentation/driver/mod.rs
//! Line-oriented JSON host for the news form: one request per input line, one
//! response per output line.
pub mod error;
pub mod requests;

use std::sync::Arc;

use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::application::{
    commands::news::{BulkDeleteNewsCommand, CreateNewsCommand, UpdateNewsCommand},
    dto::news_columns,
    queries::news::ListNewsQuery,
    services::ApplicationServices,
};
use crate::domain::news::{FormBatch, FormSession};
use error::{DriverError, DriverResult, IntoDriverResult};
use requests::{DriverRequest, ListParams};

pub struct Driver {
    services: Arc<ApplicationServices>,
    session: Option<FormSession>,
}

impl Driver {
    pub fn new(services: Arc<ApplicationServices>) -> Self {
        Self {
            services,
            session: None,
        }
    }

    pub fn session(&self) -> Option<&FormSession> {
        self.session.as_ref()
    }

    /// Serve requests until `reader` is exhausted; returns how many were handled.
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> anyhow::Result<usize>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        let mut handled = 0;
        while let Some(line) = lines.next_line().await? {
            let Some(response) = self.handle_line(&line).await else {
                continue;
            };
            handled += 1;
            let mut encoded = serde_json::to_vec(&response)?;
            encoded.push(b'\n');
            writer.write_all(&encoded).await?;
            writer.flush().await?;
        }
        Ok(handled)
    }

    /// `None` for blank lines, otherwise the response to send back.
    pub async fn handle_line(&mut self, line: &str) -> Option<Value> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let response = match serde_json::from_str::<DriverRequest>(trimmed) {
            Ok(request) => self.handle(request).await,
            Err(err) => {
                warn!(error = %err, "malformed driver request");
                Err(DriverError::malformed(err.to_string()))
            }
        };

        Some(match response {
            Ok(value) => value,
            Err(err) => serde_json::to_value(&err).unwrap_or_else(|_| json!({ "ok": false })),
        })
    }

    pub async fn handle(&mut self, request: DriverRequest) -> DriverResult<Value> {
        let action = request.action();
        debug!(action, "driver request");
        match request {
            DriverRequest::Create => {
                self.session = Some(self.services.news_forms.create_form());
                self.form_response(action)
            }
            DriverRequest::Edit { id } => {
                let session = self.services.news_forms.edit_form(id).await.into_driver(action)?;
                self.session = Some(session);
                self.form_response(action)
            }
            DriverRequest::Update { changes } => self.apply(action, changes),
            DriverRequest::Submit => self.submit(action).await,
            DriverRequest::List(params) => self.list(action, params).await,
            DriverRequest::Delete { ids } => {
                let deleted = self
                    .services
                    .news_commands
                    .bulk_delete_news(BulkDeleteNewsCommand { ids })
                    .await
                    .into_driver(action)?;
                Ok(json!({ "ok": true, "action": action, "deleted": deleted }))
            }
            DriverRequest::Columns => {
                Ok(json!({ "ok": true, "action": action, "columns": news_columns() }))
            }
        }
    }

    fn apply(&mut self, action: &'static str, changes: FormBatch) -> DriverResult<Value> {
        let session = self
            .session
            .as_mut()
            .ok_or_else(|| DriverError::no_open_form(action))?;
        session.apply_update(changes);
        self.form_response(action)
    }

    async fn submit(&mut self, action: &'static str) -> DriverResult<Value> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| DriverError::no_open_form(action))?;
        let form = session.state().clone();

        let commands = &self.services.news_commands;
        let saved = match session.record_id() {
            Some(id) => commands
                .update_news(UpdateNewsCommand {
                    id: id.into(),
                    form,
                })
                .await,
            None => commands.create_news(CreateNewsCommand { form }).await,
        }
        .into_driver(action)?;

        // The saved record is edited from here on, like the edit page after create.
        let session = self
            .services
            .news_forms
            .edit_form(saved.id)
            .await
            .into_driver(action)?;
        self.session = Some(session);

        Ok(json!({ "ok": true, "action": action, "record": saved }))
    }

    async fn list(&self, action: &'static str, params: ListParams) -> DriverResult<Value> {
        let page = self
            .services
            .news_queries
            .list_news(ListNewsQuery {
                search: params.search,
                sort: params.sort,
                direction: params.direction,
                page: params.page,
                per_page: params.per_page,
            })
            .await
            .into_driver(action)?;
        Ok(json!({ "ok": true, "action": action, "page": page }))
    }

    fn form_response(&self, action: &'static str) -> DriverResult<Value> {
        let session = self
            .session
            .as_ref()
            .ok_or_else(|| DriverError::no_open_form(action))?;
        let mode = if session.record_id().is_some() {
            "edit"
        } else {
            "create"
        };
        Ok(json!({
            "ok": true,
            "action": action,
            "mode": mode,
            "record_id": session.record_id().map(i64::from),
            "state": session.state(),
        }))
    }
}
