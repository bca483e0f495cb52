use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// What the main loop wakes up on. A tick fires whenever the poll
/// window closes without terminal input, so the fetch and cleanup
/// channels get drained even while the user is idle.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Terminal poller with a fixed tick rate
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    pub fn next(&self) -> color_eyre::Result<AppEvent> {
        if !event::poll(self.tick_rate)? {
            return Ok(AppEvent::Tick);
        }
        Ok(match event::read()? {
            // Some terminals report key releases too; act on presses only
            Event::Key(key) if key.kind != KeyEventKind::Release => AppEvent::Key(key),
            Event::Resize(_, _) => AppEvent::Resize,
            _ => AppEvent::Tick,
        })
    }
}
