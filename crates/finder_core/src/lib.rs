//! Movie finder core: pure state machine and view-model helpers.
mod debounce;
mod effect;
mod fetch;
mod movie;
mod msg;
mod query_sync;
mod state;
mod update;
mod view_model;

pub use debounce::{DebounceTicket, Debounced, SEARCH_DEBOUNCE};
pub use effect::Effect;
pub use fetch::{meets_min_length, FetchState, SearchQuery, MIN_QUERY_CHARS};
pub use movie::{MovieSummary, SearchOutcome, SearchResponse};
pub use msg::Msg;
pub use query_sync::{MemoryLocation, QueryParams, QuerySync, UrlStatePort, SEARCH_PARAM};
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, MovieCard, RequestStatus, ResultsView, SKELETON_PLACEHOLDERS};
