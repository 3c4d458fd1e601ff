//! Query filter engine.
//!
//! Selects the candidate records that satisfy every active term (or any,
//! when [`Combine::Any`] is chosen explicitly). A term is found in a record
//! when it matches one of the case-folded [`Record::search_fields`]: a
//! substring of `name` or `description`, or a hit on one of the `keywords`
//! under the configured [`KeywordMatch`].
//!
//! The engine is a pure function of its inputs: no state between calls, no
//! I/O, input order preserved, no ranking. An empty term list passes every
//! record through.

use crate::{
    error::FilterError,
    terms::Terms,
    types::{FieldKind, Record},
};
use serde::Deserialize;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// How per-term results combine into a per-record verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combine {
    /// Every term must be found. The canonical behaviour.
    #[default]
    All,
    /// At least one term must be found.
    Any,
}

/// How a term is compared against a single keyword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordMatch {
    /// The term appears anywhere inside the keyword.
    #[default]
    Substring,
    /// The term equals the keyword after case folding.
    Exact,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub combine: Combine,
    pub keyword_match: KeywordMatch,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default)]
pub struct QueryFilter {
    options: FilterOptions,
}

impl QueryFilter {
    pub fn new(options: FilterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> FilterOptions {
        self.options
    }

    /// Whether `record` satisfies `terms`. Always true for empty `terms`.
    pub fn matches(&self, record: &Record, terms: &Terms) -> bool {
        if terms.is_empty() {
            return true;
        }

        let fields: Vec<(FieldKind, String)> = record
            .search_fields()
            .map(|(kind, text)| (kind, text.to_lowercase()))
            .collect();
        let found = |term: &str| {
            fields
                .iter()
                .any(|(kind, text)| self.field_hit(*kind, text, term))
        };

        match self.options.combine {
            Combine::All => terms.iter().all(found),
            Combine::Any => terms.iter().any(found),
        }
    }

    /// Matching records, cloned, in input order.
    pub fn apply(&self, records: &[Record], terms: impl Into<Terms>) -> Vec<Record> {
        self.apply_refs(records, terms).into_iter().cloned().collect()
    }

    /// Matching records, borrowed, in input order.
    pub fn apply_refs<'a>(
        &self,
        records: &'a [Record],
        terms: impl Into<Terms>,
    ) -> Vec<&'a Record> {
        let terms = terms.into();
        records.iter().filter(|r| self.matches(r, &terms)).collect()
    }

    fn field_hit(&self, kind: FieldKind, text: &str, term: &str) -> bool {
        match (kind, self.options.keyword_match) {
            (FieldKind::Text, _) | (FieldKind::Keyword, KeywordMatch::Substring) => {
                text.contains(term)
            }
            (FieldKind::Keyword, KeywordMatch::Exact) => text == term,
        }
    }
}

// ---------------------------------------------------------------------------
// Free-function entry points
// ---------------------------------------------------------------------------

/// Records matching every term, in input order. Empty `terms` returns all.
pub fn filter(records: &[Record], terms: impl Into<Terms>) -> Vec<Record> {
    QueryFilter::default().apply(records, terms)
}

/// Borrowing variant of [`filter`].
pub fn filter_refs<'a>(records: &'a [Record], terms: impl Into<Terms>) -> Vec<&'a Record> {
    QueryFilter::default().apply_refs(records, terms)
}

/// Filter an untyped candidate document with untyped terms.
///
/// `records` must be a JSON array of record objects, otherwise
/// [`FilterError::InvalidInput`]. `terms` is coerced by
/// [`Terms::from_json`] and never causes an error.
pub fn filter_json(records: &Value, terms: &Value) -> Result<Vec<Record>, FilterError> {
    let records = Record::from_json_array(records)?;
    Ok(filter(&records, Terms::from_json(terms)))
}
