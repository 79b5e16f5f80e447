use std::time::Duration;

/// Quiet period before a typed search term is acted upon.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Identifies one scheduled countdown. Only the most recently issued ticket
/// can settle a [`Debounced`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DebounceTicket(u64);

impl DebounceTicket {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Trailing-edge debounced copy of a rapidly changing value.
///
/// The holder does not own a clock. `observe` hands out a ticket that the
/// caller must arm a timer with for `delay()`; when the timer fires the caller
/// passes the ticket back to `elapse`. Any newer `observe` (or `cancel`)
/// invalidates older tickets, so a late timer can never settle a stale value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debounced<T> {
    stable: T,
    pending: Option<(DebounceTicket, T)>,
    issued: u64,
    delay: Duration,
}

impl<T: Clone + Default> Default for Debounced<T> {
    fn default() -> Self {
        Self::new(T::default(), SEARCH_DEBOUNCE)
    }
}

impl<T: Clone> Debounced<T> {
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            stable: initial,
            pending: None,
            issued: 0,
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn stable(&self) -> &T {
        &self.stable
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|(_, value)| value)
    }

    /// Records a new input and restarts the countdown.
    pub fn observe(&mut self, value: T) -> DebounceTicket {
        self.issued += 1;
        let ticket = DebounceTicket(self.issued);
        self.pending = Some((ticket, value));
        ticket
    }

    /// Settles the pending value if `ticket` is the latest countdown.
    ///
    /// Returns the new stable value, or `None` when the ticket was superseded
    /// or cancelled.
    pub fn elapse(&mut self, ticket: DebounceTicket) -> Option<&T> {
        match self.pending.take() {
            Some((current, value)) if current == ticket => {
                self.stable = value;
                Some(&self.stable)
            }
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Drops the pending value. Returns the ticket that was armed, if any.
    pub fn cancel(&mut self) -> Option<DebounceTicket> {
        self.pending.take().map(|(ticket, _)| ticket)
    }
}
