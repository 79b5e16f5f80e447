use finder_core::{DebounceTicket, Effect, MovieSummary, Msg, SearchOutcome, SearchResponse};
use finder_engine::{EngineEvent, EngineHandle, SearchPayload};
use finder_logging::finder_debug;

/// Executes core effects on the engine and turns engine events back into
/// messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleDebounce { ticket, delay } => {
                    finder_debug!("ScheduleDebounce ticket={} delay={:?}", ticket.get(), delay);
                    self.engine.schedule_timer(ticket.get(), delay);
                }
                Effect::CancelDebounce => {
                    self.engine.cancel_timer();
                }
                Effect::SearchMovies { term } => self.engine.search(term),
            }
        }
    }

    /// Drains every event the engine has produced so far.
    pub fn poll(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(event_to_msg)
            .collect()
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::TimerElapsed { ticket } => Msg::DebounceElapsed(DebounceTicket::new(ticket)),
        EngineEvent::SearchCompleted { term, result } => {
            // The engine has already logged failures.
            let outcome: SearchOutcome = result.map(map_payload).map_err(|err| err.to_string());
            Msg::SearchFinished { term, outcome }
        }
    }
}

fn map_payload(payload: SearchPayload) -> SearchResponse {
    if !payload.is_found() {
        return SearchResponse::Rejected {
            message: payload.error.unwrap_or_default(),
        };
    }
    let total_results = payload
        .total_results
        .as_deref()
        .and_then(|raw| raw.trim().parse().ok());
    let movies = payload
        .search
        .into_iter()
        .map(|record| MovieSummary {
            id: record.imdb_id,
            title: record.title,
            year: record.year,
            poster_url: record.poster,
            media_type: record.kind,
        })
        .collect();
    SearchResponse::Found {
        movies,
        total_results,
    }
}
