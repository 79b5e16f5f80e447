use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::event::{self, Event, KeyEvent};
use finder_core::{update, AppState, AppViewModel, MemoryLocation, Msg, QuerySync, ResultsView};
use finder_engine::EngineHandle;
use finder_logging::{finder_info, finder_warn, parse_level};
use ratatui::DefaultTerminal;

use super::config::Args;
use super::effects::EffectRunner;
use super::input::{InputAction, InputState};
use super::logging;
use super::ui::layout::{grid_columns, total_rows};
use super::ui::render::{self, Chrome};

/// How often the skeleton pulses.
const TICK_RATE: Duration = Duration::from_millis(400);
const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub fn run_app() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = parse_level(&args.log_level)
        .with_context(|| format!("unknown log level {:?}", args.log_level))?;
    logging::initialize(&args.log_file, level);

    if args.api_key.is_empty() {
        finder_warn!("No API key configured; the search API will reject requests");
    }
    let location = MemoryLocation::parse(&args.location)
        .with_context(|| format!("invalid --location {:?}", args.location))?;
    let engine =
        EngineHandle::new(args.client_settings()).context("failed to start search engine")?;

    let mut root = RootView::mount(
        location,
        AppState::with_debounce(args.debounce()),
        EffectRunner::new(engine),
    );

    let mut terminal = ratatui::try_init().context("failed to initialize terminal")?;
    let result = root.run(&mut terminal);
    ratatui::restore();
    root.unmount();
    result
}

/// Wires the address bar binding, the core state machine and the engine.
struct RootView {
    sync: QuerySync<MemoryLocation>,
    state: AppState,
    view: AppViewModel,
    runner: EffectRunner,
    input: InputState,
    scroll_rows: usize,
    /// Grid columns at the last draw.
    columns: u16,
    should_quit: bool,
}

impl RootView {
    fn mount(location: MemoryLocation, state: AppState, runner: EffectRunner) -> Self {
        let sync = QuerySync::new(location);
        let initial = sync.current().to_string();
        finder_info!("Mounted at {} initial_search={:?}", sync.port().url(), initial);

        let mut root = Self {
            input: InputState::at_end_of(&initial),
            view: state.view(),
            sync,
            state,
            runner,
            scroll_rows: 0,
            columns: 1,
            should_quit: false,
        };
        root.dispatch(Msg::SearchChanged(initial));
        root
    }

    fn run(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        let mut last_tick = Instant::now();
        let mut needs_draw = true;

        loop {
            if needs_draw {
                self.draw(terminal)?;
                needs_draw = false;
            }

            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => needs_draw |= self.handle_key(key),
                    Event::Resize(..) => needs_draw = true,
                    _ => {}
                }
            }

            needs_draw |= self.process_engine_events();

            if last_tick.elapsed() >= TICK_RATE {
                needs_draw |= self.dispatch(Msg::Tick);
                last_tick = Instant::now();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    fn unmount(mut self) {
        self.dispatch(Msg::Closing);
        finder_info!("Unmounted at {}", self.sync.port().url());
    }

    fn draw(&mut self, terminal: &mut DefaultTerminal) -> anyhow::Result<()> {
        let width = terminal.size()?.width;
        self.set_columns(grid_columns(width));

        let chrome = Chrome {
            location: self.sync.port().url().as_str(),
            cursor_column: self.input.cursor_column(self.sync.current()),
            scroll_rows: self.scroll_rows,
        };
        terminal.draw(|frame| render::draw(frame, &self.view, &chrome))?;
        Ok(())
    }

    /// Records the grid width and pulls the scroll offset back onto the last row.
    fn set_columns(&mut self, columns: u16) {
        self.columns = columns;
        self.scroll_rows = self.scroll_rows.min(self.last_row());
    }

    fn last_row(&self) -> usize {
        match &self.view.results {
            ResultsView::Grid { cards, .. } => total_rows(cards.len(), self.columns).saturating_sub(1),
            _ => 0,
        }
    }

    /// Returns whether the screen needs redrawing.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.input.handle_key(self.sync.current(), key) {
            InputAction::Edited(text) => {
                // The address bar is rewritten before the state machine sees the change.
                let value = self.sync.on_change(text).to_string();
                self.dispatch(Msg::SearchChanged(value));
                true
            }
            InputAction::CursorMoved => true,
            InputAction::Scroll(delta) => self.scroll_by(delta),
            InputAction::Quit => {
                self.should_quit = true;
                false
            }
            InputAction::Ignored => false,
        }
    }

    fn process_engine_events(&mut self) -> bool {
        let mut changed = false;
        for msg in self.runner.poll() {
            changed |= self.dispatch(msg);
        }
        changed
    }

    fn dispatch(&mut self, msg: Msg) -> bool {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);

        if was_dirty {
            let view = self.state.view();
            if view.results != self.view.results {
                self.scroll_rows = 0;
            }
            self.view = view;
        }
        was_dirty
    }

    fn scroll_by(&mut self, delta: i32) -> bool {
        if !matches!(self.view.results, ResultsView::Grid { .. }) {
            return false;
        }
        let max = self.last_row();
        let next = if delta < 0 {
            self.scroll_rows.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            self.scroll_rows.saturating_add(delta as usize).min(max)
        };
        let moved = next != self.scroll_rows;
        self.scroll_rows = next;
        moved
    }
}
