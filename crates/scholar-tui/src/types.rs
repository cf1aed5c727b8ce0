use std::time::Instant;

use crate::constants::COPY_FEEDBACK;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

/// Transient "Copied" acknowledgement after a copy.
#[derive(Debug, Default)]
pub struct CopyFeedback {
    copied_at: Option<Instant>,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&mut self, now: Instant) {
        self.copied_at = Some(now);
    }

    pub fn is_shown(&self) -> bool {
        self.copied_at.is_some()
    }

    /// Clears the acknowledgement once [`COPY_FEEDBACK`] has passed.
    /// Returns true on the call that clears it.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.copied_at {
            Some(at) if now.saturating_duration_since(at) >= COPY_FEEDBACK => {
                self.copied_at = None;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct ScrollState {
    pub offset: u16,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn scroll(&mut self, direction: ScrollDirection, amount: u16, max: u16) {
        self.offset = match direction {
            ScrollDirection::Up | ScrollDirection::PageUp => self.offset.saturating_sub(amount),
            ScrollDirection::Down | ScrollDirection::PageDown => self.offset.saturating_add(amount),
            ScrollDirection::Home => 0,
            ScrollDirection::End => max,
        }
        .min(max);
    }
}
