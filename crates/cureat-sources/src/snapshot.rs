//! In-memory source over an immutable snapshot.

use crate::{RecordSource, SourceError};
use cureat_core::Record;
use std::{future::Future, sync::Arc};

/// Serves the same records on every fetch.
#[derive(Debug, Clone)]
pub struct StaticSource {
    records: Arc<[Record]>,
}

impl StaticSource {
    pub fn new(records: impl Into<Arc<[Record]>>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl RecordSource for StaticSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Record>, SourceError>> + Send {
        let records = self.records.to_vec();
        async move { Ok(records) }
    }
}
