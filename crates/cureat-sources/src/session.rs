//! Search session: fetch, filter, and drop stale responses.
//!
//! A session may run several searches at once. Each takes a token from its
//! [`RequestSequencer`]; whichever finishes after a newer search has started
//! reports [`SearchOutcome::Stale`] instead of results, so a slow early
//! response can never overwrite a later one.

use crate::{sequence::RequestSequencer, RecordSource, SourceError};
use cureat_core::{config::Config, QueryFilter, Record, SearchHistory, SearchLogEntry, Terms};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Results of the most recent search.
    Fresh(Vec<Record>),
    /// A newer search started before this one finished.
    Stale,
}

impl SearchOutcome {
    pub fn is_stale(&self) -> bool {
        matches!(self, SearchOutcome::Stale)
    }

    pub fn into_fresh(self) -> Option<Vec<Record>> {
        match self {
            SearchOutcome::Fresh(records) => Some(records),
            SearchOutcome::Stale => None,
        }
    }
}

pub struct SearchSession<S> {
    source: S,
    filter: QueryFilter,
    sequencer: RequestSequencer,
    history: Mutex<SearchHistory>,
}

impl<S: RecordSource> SearchSession<S> {
    pub fn new(source: S, filter: QueryFilter, history_capacity: usize) -> Self {
        Self {
            source,
            filter,
            sequencer: RequestSequencer::new(),
            history: Mutex::new(SearchHistory::new(history_capacity)),
        }
    }

    /// Session using the `[search]` and `[history]` settings of `config`.
    pub fn from_config(source: S, config: &Config) -> Self {
        Self::new(
            source,
            QueryFilter::new(config.search.filter_options()),
            config.history.capacity,
        )
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch candidates and filter them by `terms`.
    ///
    /// A fetch error is returned to the caller, who is expected to clear
    /// whatever results it shows, unless the search was already superseded,
    /// in which case the error is irrelevant and `Stale` is returned.
    pub async fn search(&self, terms: impl Into<Terms>) -> Result<SearchOutcome, SourceError> {
        let terms = terms.into();
        let token = self.sequencer.begin();
        tracing::debug!(token = token.get(), terms = ?terms.as_slice(), "search started");

        let fetched = self.source.fetch().await;

        if !self.sequencer.is_current(token) {
            tracing::debug!(token = token.get(), "search superseded, dropping response");
            return Ok(SearchOutcome::Stale);
        }

        let records = fetched.inspect_err(|e| {
            tracing::warn!(token = token.get(), error = %e, "candidate fetch failed");
        })?;

        let matches = self.filter.apply(&records, terms);
        tracing::debug!(
            token = token.get(),
            candidates = records.len(),
            matches = matches.len(),
            "search finished"
        );
        Ok(SearchOutcome::Fresh(matches))
    }

    /// Record `query` in the history, then search for it as a single term.
    pub async fn submit(&self, query: &str) -> Result<SearchOutcome, SourceError> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(query);
        self.search(query).await
    }

    /// Submitted queries, newest first.
    pub fn history(&self) -> Vec<SearchLogEntry> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .recent()
            .cloned()
            .collect()
    }
}
