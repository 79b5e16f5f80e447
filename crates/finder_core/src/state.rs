use std::time::Duration;

use crate::view_model::{AppViewModel, MovieCard, RequestStatus, ResultsView, SKELETON_PLACEHOLDERS};
use crate::{meets_min_length, Debounced, FetchState, SearchQuery, SearchResponse};

/// Root view state: the raw search term, its debounced copy and the fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    search: String,
    debounced: Debounced<String>,
    fetch: SearchQuery,
    ticks: u64,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_debounce(delay: Duration) -> Self {
        Self {
            debounced: Debounced::new(String::new(), delay),
            ..Self::default()
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn debounced(&self) -> &str {
        self.debounced.stable()
    }

    pub fn fetch(&self) -> &SearchQuery {
        &self.fetch
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            search: self.search.clone(),
            debounced: self.debounced.stable().clone(),
            status: self.status(),
            results: self.results(),
            pulse: self.ticks % 2 == 1,
        }
    }

    /// Returns whether anything visible changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_search(&mut self, value: String) -> bool {
        if self.search == value {
            return false;
        }
        self.search = value;
        self.mark_dirty();
        true
    }

    pub(crate) fn debounced_mut(&mut self) -> &mut Debounced<String> {
        &mut self.debounced
    }

    pub(crate) fn fetch_mut(&mut self) -> &mut SearchQuery {
        &mut self.fetch
    }

    pub(crate) fn advance_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        if matches!(self.results(), ResultsView::Skeleton { .. }) {
            self.mark_dirty();
        }
    }

    fn status(&self) -> RequestStatus {
        if self.debounced.pending().is_some() {
            return RequestStatus::Debouncing;
        }
        match self.fetch.state() {
            FetchState::Idle => RequestStatus::Idle,
            FetchState::Loading => RequestStatus::Loading,
            FetchState::Failed(_) => RequestStatus::Failed,
            FetchState::Loaded(_) => RequestStatus::Loaded,
        }
    }

    fn results(&self) -> ResultsView {
        if !meets_min_length(&self.search) {
            return ResultsView::Prompt;
        }
        match self.fetch.state() {
            FetchState::Failed(_) => ResultsView::Failed,
            FetchState::Loaded(SearchResponse::Rejected { message }) => ResultsView::Rejected {
                message: message.clone(),
            },
            FetchState::Loaded(SearchResponse::Found {
                movies,
                total_results,
            }) => ResultsView::Grid {
                cards: movies.iter().map(MovieCard::from_summary).collect(),
                total_results: *total_results,
            },
            FetchState::Idle | FetchState::Loading => ResultsView::Skeleton {
                placeholders: SKELETON_PLACEHOLDERS,
            },
        }
    }
}
