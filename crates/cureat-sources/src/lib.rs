//! cureat-sources: record source adapters and the search session.
//!
//! Each source produces a fresh snapshot of candidate [`Record`]s per fetch.
//! [`SearchSession`] fetches, filters, and drops responses that a newer
//! search has superseded.

pub mod catalog;
pub mod error;
pub mod sequence;
pub mod session;
pub mod snapshot;

use cureat_core::Record;
use std::future::Future;

pub use catalog::JsonCatalog;
pub use error::SourceError;
pub use sequence::{RequestSequencer, RequestToken};
pub use session::{SearchOutcome, SearchSession};
pub use snapshot::StaticSource;

/// Trait implemented by each candidate record source.
pub trait RecordSource: Send + Sync {
    /// Fetch the current candidate set. Failures propagate unchanged; there
    /// is no retry or timeout at this layer.
    fn fetch(&self) -> impl Future<Output = Result<Vec<Record>, SourceError>> + Send;
}
