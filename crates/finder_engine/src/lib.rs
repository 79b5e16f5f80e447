//! Movie finder engine: HTTP search client, debounce timer and effect execution.
mod client;
mod engine;
mod payload;
mod timer;
mod types;

pub use client::{search_url, ClientSettings, ReqwestSearchClient, SearchClient, DEFAULT_BASE_URL};
pub use engine::EngineHandle;
pub use payload::{decode_payload, MovieRecord, SearchPayload};
pub use timer::DebounceTimer;
pub use types::{EngineError, EngineEvent, FailureKind, FetchError};
