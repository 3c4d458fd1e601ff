//! Bounded log of submitted search queries.
//!
//! The oldest entry is evicted once `capacity` is reached. A capacity of zero
//! disables recording.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchLogEntry {
    /// The query as submitted, trimmed.
    pub query: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SearchHistory {
    entries: VecDeque<SearchLogEntry>,
    capacity: usize,
}

impl SearchHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record `query` at the current time. Returns `false` if it was blank or
    /// recording is disabled.
    pub fn record(&mut self, query: &str) -> bool {
        self.record_at(query, Utc::now())
    }

    pub fn record_at(&mut self, query: &str, at: DateTime<Utc>) -> bool {
        let query = query.trim();
        if query.is_empty() || self.capacity == 0 {
            return false;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(SearchLogEntry {
            query: query.to_string(),
            at,
        });
        true
    }

    /// Entries, newest first.
    pub fn recent(&self) -> impl Iterator<Item = &SearchLogEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
