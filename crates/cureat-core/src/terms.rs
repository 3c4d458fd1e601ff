//! Query terms and the user-facing term set.
//!
//! [`Terms`] is the normalised, ordered term list the filter engine consumes.
//! Every way a caller can hand over terms (a single string, a list, nothing
//! at all, or an untyped JSON value) converts into it without failing.
//!
//! [`TermSet`] is the toggleable list of previously entered terms. Only the
//! active ones reach the engine, via [`TermSet::active_terms`].

use serde_json::Value;

// ---------------------------------------------------------------------------
// Terms
// ---------------------------------------------------------------------------

/// Normalised query terms: trimmed, lower-cased, never empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Terms(Vec<String>);

impl Terms {
    /// No terms. Filtering with this returns every candidate.
    pub fn none() -> Self {
        Self::default()
    }

    /// Coerce an untyped JSON value into terms. Never fails.
    ///
    /// `null`, `false`, `0` and blank strings are "no term". Strings, other
    /// numbers and `true` become one term each. Arrays contribute each
    /// element coerced the same way; nested arrays and objects are skipped.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Array(items) => items.iter().filter_map(scalar_term).collect(),
            other => scalar_term(other).into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Trim and case-fold a raw term; `None` when nothing is left.
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn scalar_term(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => normalize(s),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) if n.as_f64() != Some(0.0) => normalize(&n.to_string()),
        _ => None,
    }
}

impl<S: AsRef<str>> FromIterator<S> for Terms {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().filter_map(|s| normalize(s.as_ref())).collect())
    }
}

impl From<&str> for Terms {
    fn from(term: &str) -> Self {
        std::iter::once(term).collect()
    }
}

impl From<String> for Terms {
    fn from(term: String) -> Self {
        Terms::from(term.as_str())
    }
}

impl From<&String> for Terms {
    fn from(term: &String) -> Self {
        Terms::from(term.as_str())
    }
}

impl From<Vec<String>> for Terms {
    fn from(terms: Vec<String>) -> Self {
        terms.into_iter().collect()
    }
}

impl From<Vec<&str>> for Terms {
    fn from(terms: Vec<&str>) -> Self {
        terms.into_iter().collect()
    }
}

impl From<&[String]> for Terms {
    fn from(terms: &[String]) -> Self {
        terms.iter().collect()
    }
}

impl From<&[&str]> for Terms {
    fn from(terms: &[&str]) -> Self {
        terms.iter().collect()
    }
}

impl<const N: usize> From<[&str; N]> for Terms {
    fn from(terms: [&str; N]) -> Self {
        terms.into_iter().collect()
    }
}

impl<T: Into<Terms>> From<Option<T>> for Terms {
    fn from(terms: Option<T>) -> Self {
        terms.map(Into::into).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// TermSet
// ---------------------------------------------------------------------------

/// One entered term and whether it currently participates in filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTerm {
    pub id: u64,
    /// The term as entered (trimmed, original case, for display).
    pub text: String,
    pub active: bool,
}

/// Ordered, toggleable collection of entered terms.
///
/// Insertion order is display order; it has no effect on matching.
#[derive(Debug, Clone, Default)]
pub struct TermSet {
    terms: Vec<ActiveTerm>,
    next_id: u64,
}

impl TermSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a term, active. Blank input is ignored and returns `None`.
    pub fn push(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        self.next_id += 1;
        let id = self.next_id;
        self.terms.push(ActiveTerm {
            id,
            text: text.to_string(),
            active: true,
        });
        Some(id)
    }

    /// Flip a term's `active` flag. Returns `false` for an unknown id.
    pub fn toggle(&mut self, id: u64) -> bool {
        match self.terms.iter_mut().find(|t| t.id == id) {
            Some(term) => {
                term.active = !term.active;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.terms.len();
        self.terms.retain(|t| t.id != id);
        self.terms.len() != before
    }

    pub fn clear(&mut self) {
        self.terms.clear();
    }

    pub fn get(&self, id: u64) -> Option<&ActiveTerm> {
        self.terms.iter().find(|t| t.id == id)
    }

    /// The active terms, normalised, in insertion order.
    pub fn active_terms(&self) -> Terms {
        self.terms
            .iter()
            .filter(|t| t.active)
            .map(|t| t.text.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActiveTerm> {
        self.terms.iter()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
