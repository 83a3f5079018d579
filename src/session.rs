use std::collections::BTreeSet;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use tokio_util::sync::CancellationToken;

use crate::config;
use crate::engines::SearchEngine;
use crate::error::SearchError;
use crate::models::{NormalizedResult, RawHit};
use crate::normalize::normalize_all;
use crate::pipeline::{self, Page, PageRequest, SortKey};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Handle of one in-flight search.
///
/// Only the ticket handed out by the latest [`SearchSession::begin`] can
/// complete; older tickets are cancelled the moment a new search starts.
#[derive(Debug, Clone)]
pub struct SearchTicket {
    generation: u64,
    query: String,
    token: CancellationToken,
}

impl SearchTicket {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// State of one search front end, from mount to teardown.
#[derive(Debug)]
pub struct SearchSession {
    query: Option<String>,
    is_loading: bool,
    error: Option<String>,
    current_page: usize,
    page_size: usize,
    view_mode: ViewMode,
    sort_by: SortKey,
    raw: Vec<RawHit>,
    results: Vec<NormalizedResult>,
    expanded: BTreeSet<usize>,
    generation: u64,
    in_flight: Option<CancellationToken>,
}

impl SearchSession {
    pub fn new(page_size: usize, view_mode: ViewMode, sort_by: SortKey) -> Self {
        Self {
            query: None,
            is_loading: false,
            error: None,
            current_page: 1,
            page_size: page_size.max(1),
            view_mode,
            sort_by,
            raw: Vec::new(),
            results: Vec::new(),
            expanded: BTreeSet::new(),
            generation: 0,
            in_flight: None,
        }
    }

    pub fn from_config(display: &config::Display) -> Self {
        Self::new(display.page_size, display.view, display.sort)
    }

    /// Starts a search, superseding any search still in flight.
    ///
    /// A blank query is rejected here, before anything touches the network.
    pub fn begin(&mut self, query: &str) -> Result<SearchTicket, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            self.error = Some(t!("search.empty_query").to_string());
            return Err(SearchError::EmptyQuery);
        }

        if let Some(previous) = self.in_flight.take() {
            log::info!("Cancelling search {} in favour of {:?}", self.generation, query);
            previous.cancel();
        }

        self.generation += 1;
        let token = CancellationToken::new();
        self.in_flight = Some(token.clone());
        self.query = Some(query.to_string());
        self.is_loading = true;
        self.error = None;
        self.current_page = 1;

        Ok(SearchTicket {
            generation: self.generation,
            query: query.to_string(),
            token,
        })
    }

    /// Applies the outcome of `ticket`'s fetch.
    ///
    /// Stale or cancelled tickets leave the session untouched and yield
    /// [`SearchError::Cancelled`]. A failed search keeps the previous results.
    pub fn complete(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<Vec<RawHit>, SearchError>,
    ) -> Result<usize, SearchError> {
        if ticket.generation != self.generation || ticket.is_cancelled() {
            log::warn!(
                "Discarding response of superseded search {:?} ({})",
                ticket.query,
                ticket.generation
            );
            return Err(SearchError::Cancelled);
        }

        self.in_flight = None;
        self.is_loading = false;

        match outcome {
            Ok(hits) => {
                self.results = normalize_all(&hits);
                self.raw = hits;
                self.expanded.clear();
                log::info!("{} results for {:?}", self.results.len(), ticket.query);
                Ok(self.results.len())
            }
            Err(err) => {
                log::error!("Search error: {}", err);
                self.error = Some(t!("search.failed", error = err.to_string()).to_string());
                Err(err)
            }
        }
    }

    /// Runs a whole search against `engine`.
    pub async fn search<E>(&mut self, engine: &E, query: &str) -> Result<usize, SearchError>
    where
        E: SearchEngine + ?Sized,
    {
        let ticket = self.begin(query)?;

        let outcome = tokio::select! {
            _ = ticket.token.cancelled() => Err(SearchError::Cancelled),
            outcome = engine.search(ticket.query()) => outcome,
        };

        self.complete(&ticket, outcome)
    }

    /// Cancels the search in flight, if any. Used on teardown.
    pub fn cancel(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
        self.is_loading = false;
    }

    pub fn page(&self) -> Page<'_> {
        let request = PageRequest::clamped(self.current_page, self.page_size);
        pipeline::paginate(&self.results, self.sort_by, request)
    }

    pub fn total_pages(&self) -> usize {
        pipeline::total_pages(self.results.len(), self.page_size)
    }

    /// Moves to `page`, clamped into the available pages.
    pub fn set_page(&mut self, page: usize) -> usize {
        self.current_page = pipeline::clamp_page(page, self.total_pages());
        self.current_page
    }

    pub fn set_sort(&mut self, sort_by: SortKey) {
        self.sort_by = sort_by;
    }

    pub fn set_view(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    /// Flips the description of the result at `index` (0-based, across
    /// pages) between collapsed and expanded. Returns the new state.
    pub fn toggle_description(&mut self, index: usize) -> bool {
        if !self.expanded.remove(&index) {
            self.expanded.insert(index);
            return true;
        }
        false
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn sort_by(&self) -> SortKey {
        self.sort_by
    }

    pub fn results(&self) -> &[NormalizedResult] {
        &self.results
    }

    pub fn raw_hits(&self) -> &[RawHit] {
        &self.raw
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        self.cancel();
    }
}
