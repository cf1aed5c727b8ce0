use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::Instant;

use scholar_core::{parse_sections, FrameworkGenerator, FrameworkSection, ResearchState, Transition};

use crate::backend::{GenerationBridge, GenerationOutcome};
use crate::constants::{SCROLL_PAGE, SPINNER_FRAMES, SPINNER_FRAME_INTERVAL};
use crate::services::ClipboardService;
use crate::types::{CopyFeedback, Focus, ScrollDirection, ScrollState};
use crate::ui::OutputPanel;

/// Root controller: the only writer of [`ResearchState`].
pub struct App {
    state: ResearchState,
    pub focus: Focus,
    pub scroll: ScrollState,
    pub copy_feedback: CopyFeedback,
    /// Time of the latest tick.
    now: Instant,
    /// When the outstanding call started; drives the spinner.
    loading_since: Option<Instant>,
    /// Terminal area of the last drawn frame.
    pub viewport: Rect,
    bridge: GenerationBridge,
    clipboard: Box<dyn ClipboardService>,
}

impl App {
    pub fn new(generator: Arc<dyn FrameworkGenerator>, clipboard: Box<dyn ClipboardService>) -> Self {
        Self {
            state: ResearchState::new(),
            focus: Focus::Input,
            scroll: ScrollState::new(),
            copy_feedback: CopyFeedback::new(),
            now: Instant::now(),
            loading_since: None,
            viewport: Rect::default(),
            bridge: GenerationBridge::new(generator),
            clipboard,
        }
    }

    pub fn state(&self) -> &ResearchState {
        &self.state
    }

    pub fn generator_name(&self) -> &str {
        self.bridge.generator_name()
    }

    /// Sections of the current result; empty while loading or without one.
    pub fn sections(&self) -> Vec<FrameworkSection> {
        match self.state.result() {
            Some(result) if !self.state.is_loading() => parse_sections(result),
            _ => Vec::new(),
        }
    }

    pub fn can_copy(&self) -> bool {
        !self.state.is_loading() && self.state.result().is_some()
    }

    pub fn generate(&mut self) -> bool {
        self.generate_at(Instant::now())
    }

    /// Trigger generation. Returns true when a call was started.
    pub fn generate_at(&mut self, now: Instant) -> bool {
        match self.state.begin_generation() {
            Transition::Started(idea) => {
                tracing::info!(chars = self.state.idea_char_count(), "Generation started");
                self.loading_since = Some(now);
                self.now = now;
                self.copy_feedback = CopyFeedback::new();
                self.scroll.reset();
                self.bridge.spawn(idea);
                true
            }
            Transition::Ignored(reason) => {
                tracing::debug!(?reason, "Generate ignored");
                false
            }
        }
    }

    /// Apply every outcome that has arrived since the last frame.
    pub fn poll_generation(&mut self) {
        while let Some(outcome) = self.bridge.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    /// Wait for the outstanding call to settle and apply it.
    pub async fn wait_for_generation(&mut self) {
        if !self.state.is_loading() {
            return;
        }
        if let Some(outcome) = self.bridge.recv().await {
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: GenerationOutcome) {
        match &outcome {
            Ok(text) => tracing::info!(chars = text.len(), "Generation finished"),
            Err(e) => tracing::warn!(kind = ?e.kind(), "Generation failed: {}", e.detail()),
        }
        if self.state.complete_generation(outcome) {
            self.loading_since = None;
            self.scroll.reset();
        } else {
            tracing::warn!("Dropped generation outcome with no call outstanding");
        }
    }

    pub fn copy_result(&mut self) -> bool {
        self.copy_result_at(Instant::now())
    }

    /// Copy the full raw result. Returns true when the clipboard took it.
    pub fn copy_result_at(&mut self, now: Instant) -> bool {
        if !self.can_copy() {
            return false;
        }
        let Some(result) = self.state.result() else {
            return false;
        };
        match self.clipboard.copy_to_clipboard(result) {
            Ok(()) => {
                tracing::info!(chars = result.len(), "Copied framework to clipboard");
                self.copy_feedback.mark(now);
                true
            }
            Err(e) => {
                tracing::warn!("Copy failed: {:#}", e);
                false
            }
        }
    }

    pub fn on_tick(&mut self) {
        self.on_tick_at(Instant::now());
    }

    pub fn on_tick_at(&mut self, now: Instant) {
        self.now = now;
        self.copy_feedback.expire(now);
    }

    /// Spinner frame for the time spent loading so far, independent of how
    /// often the screen is redrawn.
    pub fn spinner_frame(&self) -> usize {
        let Some(since) = self.loading_since else {
            return 0;
        };
        let elapsed = self.now.saturating_duration_since(since);
        (elapsed.as_millis() / SPINNER_FRAME_INTERVAL.as_millis()) as usize % SPINNER_FRAMES.len()
    }

    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::Output,
            Focus::Output => Focus::Input,
        };
    }

    pub fn scroll_output(&mut self, direction: ScrollDirection, amount: u16) {
        let amount = match direction {
            ScrollDirection::PageUp | ScrollDirection::PageDown => SCROLL_PAGE,
            _ => amount,
        };
        let max = OutputPanel::max_scroll(self);
        self.scroll.scroll(direction, amount, max);
    }

    pub fn insert_char(&mut self, c: char) -> bool {
        self.state.push_char(c)
    }

    /// Insert pasted text, normalising line endings.
    pub fn insert_str(&mut self, text: &str) -> bool {
        let normalised = text.replace("\r\n", "\n").replace('\r', "\n");
        self.state.push_str(&normalised)
    }

    pub fn backspace(&mut self) -> bool {
        self.state.pop_char()
    }

    pub fn clear_idea(&mut self) -> bool {
        self.state.clear_idea()
    }

    pub fn set_idea(&mut self, idea: impl Into<String>) -> bool {
        self.state.set_idea(idea)
    }
}
