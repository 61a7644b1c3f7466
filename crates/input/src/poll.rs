//! Per-frame event drain.
//!
//! Waits up to the remaining frame budget for the first terminal event, then
//! takes whatever else is already queued without blocking.

use std::time::Duration;

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event};

use crate::map::map_event;
use crate::types::InputEvent;

/// Upper bound on logical events kept per frame. Extra flaps are dropped.
pub const MAX_EVENTS_PER_FRAME: usize = 16;

/// Everything the terminal delivered during one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub events: ArrayVec<InputEvent, MAX_EVENTS_PER_FRAME>,
    /// The terminal was resized; the renderer should redraw from scratch.
    pub resized: bool,
}

impl FrameInput {
    /// Record one raw terminal event.
    pub fn push_raw(&mut self, event: &Event) {
        if let Event::Resize(..) = event {
            self.resized = true;
            return;
        }
        let Some(mapped) = map_event(event) else {
            return;
        };
        if self.events.is_full() {
            // Only flaps are dropped. Quit and restart evict the newest
            // buffered flap; a quit evicts the newest event if no flap is left.
            let victim = match mapped {
                InputEvent::FlapPressed => None,
                InputEvent::RestartPressed => self
                    .events
                    .iter()
                    .rposition(|e| *e == InputEvent::FlapPressed),
                InputEvent::Quit => self
                    .events
                    .iter()
                    .rposition(|e| *e == InputEvent::FlapPressed)
                    .or(Some(self.events.len() - 1)),
            };
            match victim {
                Some(i) => {
                    self.events.remove(i);
                }
                None => return,
            }
        }
        self.events.push(mapped);
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.resized = false;
    }
}

#[derive(Debug, Default)]
pub struct InputPoller {
    frame: FrameInput,
}

impl InputPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect events for one frame, blocking at most `timeout`.
    pub fn poll(&mut self, timeout: Duration) -> Result<&FrameInput> {
        self.frame.clear();
        let mut wait = timeout;
        while event::poll(wait)? {
            let raw = event::read()?;
            self.frame.push_raw(&raw);
            wait = Duration::ZERO;
        }
        Ok(&self.frame)
    }
}
