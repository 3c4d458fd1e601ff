//! cureat-core: restaurant search core library.
//!
//! This crate holds everything the search path needs that does not do I/O:
//! the versioned record schema, term normalisation, the toggleable term set,
//! the query filter engine, the bounded search history and configuration.
//!
//! # Data flow
//!
//! ```text
//! TermSet ──► Terms ──┐
//!                     ├──► filter ──► Vec<Record>
//! &[Record] ──────────┘
//! ```
//!
//! The filter engine is a leaf. Fetching candidates and sequencing
//! overlapping searches live in `cureat-sources`.

pub mod config;
pub mod error;
pub mod filter;
pub mod history;
pub mod terms;
pub mod types;

pub use error::FilterError;
pub use filter::{
    filter, filter_json, filter_refs, Combine, FilterOptions, KeywordMatch, QueryFilter,
};
pub use history::{SearchHistory, SearchLogEntry};
pub use terms::{ActiveTerm, TermSet, Terms};
pub use types::{FieldKind, Record};
