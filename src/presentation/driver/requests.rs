// src/presentation/driver/requests.rs
use crate::domain::news::FormBatch;
use serde::Deserialize;

/// One line of driver input, selected by its `action` key.
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum DriverRequest {
    Create,
    Edit {
        id: i64,
    },
    Update {
        changes: FormBatch,
    },
    Submit,
    List(ListParams),
    Delete {
        ids: Vec<i64>,
    },
    Columns,
}

impl DriverRequest {
    pub fn action(&self) -> &'static str {
        match self {
            DriverRequest::Create => "create",
            DriverRequest::Edit { .. } => "edit",
            DriverRequest::Update { .. } => "update",
            DriverRequest::Submit => "submit",
            DriverRequest::List(_) => "list",
            DriverRequest::Delete { .. } => "delete",
            DriverRequest::Columns => "columns",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
}
