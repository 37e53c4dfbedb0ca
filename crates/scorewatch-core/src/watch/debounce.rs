use std::time::{Duration, Instant};

/// Debounce state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    Idle,
    /// At least one modification is waiting to be reported
    PendingEmit {
        /// First modification since the previous emission
        pending_since: Instant,
        last_modified_at: Instant,
        /// Modifications folded into the pending signal
        events: usize,
    },
}

/// Coalesces bursts of file modifications into single settled signals.
///
/// A pending change is emitted once both hold:
/// - `interval` has passed since the previous emission
/// - the file has been quiet for `settle`, or the change has been pending
///   for `max(interval, settle)`
///
/// The interval is measured from the last *emission*, not from the last
/// event, so a writer that rewrites the file every second still produces at
/// most one signal per interval. The pending cap keeps a writer that never
/// goes quiet for `settle` from suppressing signals altogether.
#[derive(Debug, Clone)]
pub struct Debouncer {
    interval: Duration,
    settle: Duration,
    last_emission: Option<Instant>,
    state: DebounceState,
}

impl Debouncer {
    pub fn new(interval: Duration, settle: Duration) -> Self {
        Self {
            interval,
            settle,
            last_emission: None,
            state: DebounceState::Idle,
        }
    }

    pub fn state(&self) -> DebounceState {
        self.state
    }

    pub fn last_emission(&self) -> Option<Instant> {
        self.last_emission
    }

    /// Record a modification of the watched file
    pub fn record_modification(&mut self, at: Instant) {
        self.state = match self.state {
            DebounceState::Idle => DebounceState::PendingEmit {
                pending_since: at,
                last_modified_at: at,
                events: 1,
            },
            DebounceState::PendingEmit {
                pending_since,
                last_modified_at,
                events,
            } => DebounceState::PendingEmit {
                pending_since: pending_since.min(at),
                last_modified_at: last_modified_at.max(at),
                events: events + 1,
            },
        };
    }

    /// When the pending signal becomes due, `None` while idle
    pub fn next_deadline(&self) -> Option<Instant> {
        let DebounceState::PendingEmit {
            pending_since,
            last_modified_at,
            ..
        } = self.state
        else {
            return None;
        };

        let quiet = last_modified_at + self.settle;
        let cap = pending_since + self.interval.max(self.settle);
        let settled = quiet.min(cap);
        Some(match self.last_emission {
            Some(emitted) => settled.max(emitted + self.interval),
            None => settled,
        })
    }

    /// Emit if due.
    ///
    /// Returns the number of modifications coalesced into the signal and
    /// goes back to idle, or `None` if nothing is due yet.
    pub fn poll(&mut self, now: Instant) -> Option<usize> {
        let deadline = self.next_deadline()?;
        if now < deadline {
            return None;
        }

        let DebounceState::PendingEmit { events, .. } = self.state else {
            return None;
        };
        self.last_emission = Some(now);
        self.state = DebounceState::Idle;
        Some(events)
    }
}
