use finder_core::{
    update, AppState, Effect, MemoryLocation, Msg, QuerySync, ResultsView, UrlStatePort,
};

/// Minimal root view: the address bar binding feeds the state machine.
struct Root<P: UrlStatePort> {
    sync: QuerySync<P>,
    state: AppState,
    effects: Vec<Effect>,
}

impl<P: UrlStatePort> Root<P> {
    fn mount(port: P) -> Self {
        let sync = QuerySync::new(port);
        let initial = sync.current().to_string();
        let mut root = Self {
            sync,
            state: AppState::new(),
            effects: Vec::new(),
        };
        root.dispatch(Msg::SearchChanged(initial));
        root
    }

    fn type_text(&mut self, text: &str) {
        let value = self.sync.on_change(text).to_string();
        self.dispatch(Msg::SearchChanged(value));
    }

    fn fire_latest_timer(&mut self) {
        let ticket = self.effects.iter().rev().find_map(|effect| match effect {
            Effect::ScheduleDebounce { ticket, .. } => Some(*ticket),
            _ => None,
        });
        if let Some(ticket) = ticket {
            self.dispatch(Msg::DebounceElapsed(ticket));
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.extend(effects);
    }

    fn requests(&self) -> Vec<&str> {
        self.effects
            .iter()
            .filter_map(|effect| match effect {
                Effect::SearchMovies { term } => Some(term.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[test]
fn shared_link_initializes_box_and_requests_after_debounce() {
    let location = MemoryLocation::parse("http://localhost/?search=batman").unwrap();
    let mut root = Root::mount(location);

    assert_eq!(root.state.search(), "batman");
    assert!(root.requests().is_empty());

    root.fire_latest_timer();
    assert_eq!(root.requests(), vec!["batman"]);
    // Mounting alone does not rewrite the address bar.
    assert_eq!(root.sync.port().writes(), 0);
}

#[test]
fn typing_rewrites_address_bar_synchronously() {
    let location = MemoryLocation::parse("http://localhost/app?theme=dark").unwrap();
    let mut root = Root::mount(location);

    root.type_text("ali");
    assert_eq!(root.sync.port().url().as_str(), "http://localhost/app?theme=dark&search=ali");
    assert_eq!(root.sync.port().writes(), 1);
    assert_eq!(root.state.search(), "ali");

    root.type_text("alien");
    assert_eq!(root.sync.port().url().query(), Some("theme=dark&search=alien"));
    assert_eq!(root.sync.port().writes(), 2);
    assert!(root.requests().is_empty());

    root.fire_latest_timer();
    assert_eq!(root.requests(), vec!["alien"]);
}

#[test]
fn empty_location_shows_prompt() {
    let location = MemoryLocation::parse("http://localhost/").unwrap();
    let root = Root::mount(location);

    assert_eq!(root.state.view().results, ResultsView::Prompt);
    assert!(root.effects.is_empty());
}
