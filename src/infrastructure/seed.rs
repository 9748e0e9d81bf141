// src/infrastructure/seed.rs
use std::path::Path;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::news::FormState;

/// Read a JSON array of news forms to preload into the record store.
pub async fn read_seed_forms(path: &Path) -> DomainResult<Vec<FormState>> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|err| {
        DomainError::Persistence(format!("failed to read seed file {}: {err}", path.display()))
    })?;
    parse_seed_forms(&raw)
}

pub fn parse_seed_forms(raw: &str) -> DomainResult<Vec<FormState>> {
    serde_json::from_str(raw)
        .map_err(|err| DomainError::Validation(format!("invalid seed file: {err}")))
}
