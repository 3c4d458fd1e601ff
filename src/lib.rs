//! cureat: restaurant catalog search.
//!
//! This crate re-exports the two workspace layers so that integration tests
//! and the CLI can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! RecordSource ──► SearchSession ──► filter ──► caller
//!                       │
//!                       └──► SearchHistory
//! ```
//!
//! The filter engine is pure and synchronous; only sources and the session
//! are async.

pub use cureat_core::{
    config, filter, filter_json, filter_refs, history, terms, types, ActiveTerm, Combine,
    FieldKind, FilterError, FilterOptions, KeywordMatch, QueryFilter, Record, SearchHistory,
    SearchLogEntry, TermSet, Terms,
};
pub use cureat_sources::{
    catalog, sequence, session, JsonCatalog, RecordSource, RequestSequencer, RequestToken,
    SearchOutcome, SearchSession, SourceError, StaticSource,
};
