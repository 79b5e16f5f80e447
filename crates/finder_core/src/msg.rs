use crate::{DebounceTicket, SearchOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The search box changed; the address bar has already been rewritten.
    SearchChanged(String),
    /// A debounce countdown armed with this ticket expired.
    DebounceElapsed(DebounceTicket),
    /// The engine finished the request tagged with `term`.
    SearchFinished {
        term: String,
        outcome: SearchOutcome,
    },
    /// UI/render tick, drives the skeleton pulse.
    Tick,
    /// The view is being torn down.
    Closing,
}
