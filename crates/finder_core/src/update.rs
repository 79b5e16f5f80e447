use finder_logging::{finder_debug, finder_info};

use crate::{meets_min_length, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SearchChanged(value) => {
            if !state.set_search(value) {
                return (state, Vec::new());
            }
            let term = state.search().to_string();
            let debounced = state.debounced_mut();
            let delay = debounced.delay();
            let ticket = debounced.observe(term);
            vec![Effect::ScheduleDebounce { ticket, delay }]
        }
        Msg::DebounceElapsed(ticket) => {
            let Some(term) = state.debounced_mut().elapse(ticket).cloned() else {
                finder_debug!("Ignoring superseded debounce ticket {}", ticket.get());
                return (state, Vec::new());
            };
            finder_debug!("Debounced term settled: {:?}", term);
            state.mark_dirty();
            // Short terms never reach the network.
            let request = meets_min_length(&term).then_some(term.as_str());
            match state.fetch_mut().query(request) {
                Some(term) => {
                    finder_info!("Search requested term={:?}", term);
                    vec![Effect::SearchMovies { term }]
                }
                None => Vec::new(),
            }
        }
        Msg::SearchFinished { term, outcome } => {
            if state.fetch_mut().resolve(&term, outcome) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Tick => {
            state.advance_tick();
            Vec::new()
        }
        Msg::Closing => match state.debounced_mut().cancel() {
            Some(_) => vec![Effect::CancelDebounce],
            None => Vec::new(),
        },
    };

    (state, effects)
}
