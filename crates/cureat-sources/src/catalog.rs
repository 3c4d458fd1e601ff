//! JSON catalog file source.
//!
//! The file holds a JSON array of records. It is re-read on every fetch so
//! edits are picked up without restarting.

use crate::{RecordSource, SourceError};
use cureat_core::Record;
use std::{
    future::Future,
    path::{Path, PathBuf},
};

#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse catalog bytes into records.
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<Record>, SourceError> {
    let doc: serde_json::Value = serde_json::from_slice(bytes)?;
    Ok(Record::from_json_array(&doc)?)
}

impl RecordSource for JsonCatalog {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Record>, SourceError>> + Send {
        let path = self.path.clone();
        async move {
            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|source| SourceError::Io {
                    path: path.clone(),
                    source,
                })?;
            let records = parse_catalog(&bytes)?;
            tracing::debug!(path = %path.display(), count = records.len(), "catalog loaded");
            Ok(records)
        }
    }
}
