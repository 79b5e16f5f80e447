use std::time::Duration;

use crate::DebounceTicket;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Arm the debounce timer, replacing any countdown already running.
    ScheduleDebounce {
        ticket: DebounceTicket,
        delay: Duration,
    },
    /// Disarm the debounce timer.
    CancelDebounce,
    /// Issue a search request tagged with `term`.
    SearchMovies { term: String },
}
