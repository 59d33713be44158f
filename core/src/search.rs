//! Debounced title search over the fetched catalog.
//!
//! # Design
//! `SearchState` is a pure state machine: time is passed in, and a debounced
//! empty query is returned to the caller as `SearchAction::Fetch` instead of
//! being executed here. The tokio engine and an FFI host drive the same
//! machine with their own clocks and their own HTTP stacks.
//!
//! `FilterMode::Separate` keeps the fetched set intact and derives the visible
//! list from it. `FilterMode::Destructive` overwrites the fetched set with the
//! matches, so successive narrowing queries shrink it until the next fetch.

use std::time::{Duration, Instant};

use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::types::MovieEntity;

/// Holds at most one pending value and fires it once a quiet period elapses.
///
/// Every `push` replaces the pending value and restarts the timer.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|(_, deadline)| *deadline <= now);
        if !due {
            return None;
        }
        self.pending.take().map(|(value, _)| value)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// How a non-empty query treats the fetched set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// Filter into `visible`, leaving `all_movies` untouched.
    #[default]
    Separate,
    /// Overwrite `all_movies` with the matches.
    Destructive,
}

/// What the caller must do after a debounced query fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAction {
    /// The query was emptied: fetch again and hand the result to `apply_fetch`.
    Fetch,
    /// A filter pass ran and left `matches` movies visible.
    Filtered { matches: usize },
}

/// Point-in-time copy of the search state for the presentation layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSnapshot {
    pub query: String,
    pub visible: Vec<MovieEntity>,
    pub all_movies: Vec<MovieEntity>,
    pub last_error: Option<CatalogError>,
    pub filter_passes: u64,
    /// Fetches that have finished, successful or not.
    pub fetches_completed: u64,
}

/// Movies whose title contains `query`, ignoring case, in their original order.
pub fn filter_by_title(movies: &[MovieEntity], query: &str) -> Vec<MovieEntity> {
    let needle = query.to_lowercase();
    movies
        .iter()
        .filter(|movie| movie.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[derive(Debug, Clone)]
pub struct SearchState {
    all_movies: Vec<MovieEntity>,
    visible: Vec<MovieEntity>,
    query: String,
    /// Last query that made it through the debouncer.
    applied_query: String,
    debouncer: Debouncer<String>,
    mode: FilterMode,
    last_error: Option<CatalogError>,
    filter_passes: u64,
    fetches_completed: u64,
}

impl SearchState {
    pub fn new(debounce: Duration, mode: FilterMode) -> Self {
        Self {
            all_movies: Vec::new(),
            visible: Vec::new(),
            query: String::new(),
            applied_query: String::new(),
            debouncer: Debouncer::new(debounce),
            mode,
            last_error: None,
            filter_passes: 0,
            fetches_completed: 0,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visible(&self) -> &[MovieEntity] {
        &self.visible
    }

    pub fn all_movies(&self) -> &[MovieEntity] {
        &self.all_movies
    }

    pub fn last_error(&self) -> Option<&CatalogError> {
        self.last_error.as_ref()
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn filter_passes(&self) -> u64 {
        self.filter_passes
    }

    pub fn fetches_completed(&self) -> u64 {
        self.fetches_completed
    }

    /// Record a keystroke-level query update and restart the quiet period.
    pub fn set_query(&mut self, query: impl Into<String>, now: Instant) {
        let query = query.into();
        tracing::trace!(query = %query, "search query updated");
        self.query = query.clone();
        self.debouncer.push(query, now);
    }

    /// When the pending query is due, act on it.
    pub fn poll(&mut self, now: Instant) -> Option<SearchAction> {
        let query = self.debouncer.poll(now)?;
        if query.is_empty() {
            tracing::debug!("search cleared, refetching");
            self.applied_query.clear();
            return Some(SearchAction::Fetch);
        }
        self.applied_query = query;
        Some(self.apply_filter())
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Replace the movie set with a fetch result, or record the failure.
    ///
    /// In `Separate` mode `visible` is re-derived from the new set and the
    /// last applied query. A failure leaves both `all_movies` and `visible`
    /// as they were.
    pub fn apply_fetch(&mut self, result: Result<Vec<MovieEntity>>) {
        self.fetches_completed += 1;
        match result {
            Ok(movies) => {
                tracing::debug!(count = movies.len(), "movie set replaced");
                self.visible = match self.mode {
                    FilterMode::Separate if !self.applied_query.is_empty() => {
                        filter_by_title(&movies, &self.applied_query)
                    }
                    _ => movies.clone(),
                };
                self.all_movies = movies;
                self.last_error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "fetching top-rated movies failed");
                self.last_error = Some(e);
            }
        }
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        SearchSnapshot {
            query: self.query.clone(),
            visible: self.visible.clone(),
            all_movies: self.all_movies.clone(),
            last_error: self.last_error.clone(),
            filter_passes: self.filter_passes,
            fetches_completed: self.fetches_completed,
        }
    }

    fn apply_filter(&mut self) -> SearchAction {
        let query = self.applied_query.as_str();
        let matches = filter_by_title(&self.all_movies, query);
        match self.mode {
            FilterMode::Separate => self.visible = matches,
            FilterMode::Destructive => {
                self.visible = matches.clone();
                self.all_movies = matches;
            }
        }
        self.filter_passes += 1;
        tracing::debug!(
            query = %query,
            matches = self.visible.len(),
            mode = ?self.mode,
            "search filter applied"
        );
        SearchAction::Filtered {
            matches: self.visible.len(),
        }
    }
}
