//! Input events for the catalog TUI.

use crate::{TuiError, TuiErrorKind, TuiResult};
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;

/// Events the main loop reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// No input arrived within the poll window; drives the reference
    /// panel's fetch check
    Tick,
    /// Key press
    Key(KeyEvent),
    /// Terminal resized; the next draw re-flows the catalog layout
    Resize(u16, u16),
}

/// Polls the terminal for input, emitting a tick when none arrives.
///
/// The tick guarantees the loop keeps running even when the user does
/// nothing, which is how the reference panel settles after its fetch.
pub struct EventHandler {
    poll_window: Duration,
}

impl EventHandler {
    /// Create a handler that waits up to `poll_window_ms` for input.
    pub fn new(poll_window_ms: u64) -> Self {
        Self {
            poll_window: Duration::from_millis(poll_window_ms),
        }
    }

    /// Block until input arrives or the poll window elapses.
    ///
    /// Key releases and event types the catalog has no binding for (mouse,
    /// focus, paste) are folded into ticks so they still advance the loop.
    pub fn next(&self) -> TuiResult<Event> {
        if !event::poll(self.poll_window)
            .map_err(|e| TuiError::new(TuiErrorKind::EventPoll(e.to_string())))?
        {
            return Ok(Event::Tick);
        }

        match event::read().map_err(|e| TuiError::new(TuiErrorKind::EventRead(e.to_string())))? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),
            CrosstermEvent::Resize(columns, rows) => Ok(Event::Resize(columns, rows)),
            _ => Ok(Event::Tick),
        }
    }
}
