use std::fmt::Display;

/// Shown when a failure carries no message of its own.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Outcome of asking to start a generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// A call should be made for this idea.
    Started(String),
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    BlankIdea,
    AlreadyLoading,
}

/// Everything the screen shows about the current research idea.
///
/// Fields are private: the owner changes them only through the transition
/// methods below, which keep `is_loading`, `result` and `error` consistent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResearchState {
    idea: String,
    is_loading: bool,
    result: Option<String>,
    error: Option<String>,
}

impl ResearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn idea(&self) -> &str {
        &self.idea
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn idea_char_count(&self) -> usize {
        self.idea.chars().count()
    }

    pub fn idea_is_blank(&self) -> bool {
        self.idea.trim().is_empty()
    }

    /// Whether triggering generation right now would start a call.
    pub fn can_generate(&self) -> bool {
        !self.is_loading && !self.idea_is_blank()
    }

    /// The idea is frozen while a call is outstanding.
    pub fn can_edit(&self) -> bool {
        !self.is_loading
    }

    pub fn set_idea(&mut self, idea: impl Into<String>) -> bool {
        if !self.can_edit() {
            return false;
        }
        self.idea = idea.into();
        true
    }

    pub fn push_str(&mut self, text: &str) -> bool {
        if !self.can_edit() {
            return false;
        }
        self.idea.push_str(text);
        true
    }

    pub fn push_char(&mut self, c: char) -> bool {
        if !self.can_edit() {
            return false;
        }
        self.idea.push(c);
        true
    }

    pub fn pop_char(&mut self) -> bool {
        self.can_edit() && self.idea.pop().is_some()
    }

    pub fn clear_idea(&mut self) -> bool {
        if !self.can_edit() {
            return false;
        }
        self.idea.clear();
        true
    }

    /// Start a generation: raise the loading flag and drop the previous
    /// result and error. Blank ideas and a call already in flight are ignored
    /// without touching any field.
    pub fn begin_generation(&mut self) -> Transition {
        if self.is_loading {
            return Transition::Ignored(IgnoreReason::AlreadyLoading);
        }
        if self.idea_is_blank() {
            return Transition::Ignored(IgnoreReason::BlankIdea);
        }

        self.is_loading = true;
        self.error = None;
        self.result = None;
        Transition::Started(self.idea.clone())
    }

    /// Settle the outstanding call. Returns false (and changes nothing) when
    /// no call is outstanding.
    pub fn complete_generation<E: Display>(&mut self, outcome: Result<String, E>) -> bool {
        if !self.is_loading {
            return false;
        }

        match outcome {
            Ok(text) => {
                self.result = Some(text);
                self.error = None;
            }
            Err(err) => {
                let message = err.to_string();
                self.error = Some(if message.trim().is_empty() {
                    UNEXPECTED_ERROR_MESSAGE.to_string()
                } else {
                    message
                });
            }
        }
        self.is_loading = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_idea(idea: &str) -> ResearchState {
        let mut state = ResearchState::new();
        state.set_idea(idea);
        state
    }

    #[test]
    fn blank_idea_is_ignored() {
        let mut state = with_idea("  \n\t ");
        let before = state.clone();
        assert_eq!(state.begin_generation(), Transition::Ignored(IgnoreReason::BlankIdea));
        assert_eq!(state, before);
    }

    #[test]
    fn begin_clears_previous_outcome() {
        let mut state = with_idea("pricing");
        state.begin_generation();
        state.complete_generation::<String>(Err("boom".into()));
        assert_eq!(state.error(), Some("boom"));

        assert_eq!(state.begin_generation(), Transition::Started("pricing".into()));
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.result(), None);
    }

    #[test]
    fn second_trigger_while_loading_is_ignored() {
        let mut state = with_idea("pricing");
        state.begin_generation();
        assert_eq!(state.begin_generation(), Transition::Ignored(IgnoreReason::AlreadyLoading));
        assert!(state.is_loading());
    }

    #[test]
    fn success_sets_result_and_lowers_flag() {
        let mut state = with_idea("pricing");
        state.begin_generation();
        assert!(state.complete_generation::<String>(Ok("### A\nb".into())));
        assert!(!state.is_loading());
        assert_eq!(state.result(), Some("### A\nb"));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn failure_without_message_uses_fallback() {
        let mut state = with_idea("pricing");
        state.begin_generation();
        state.complete_generation::<String>(Err(String::new()));
        assert_eq!(state.error(), Some(UNEXPECTED_ERROR_MESSAGE));
        assert_eq!(state.result(), None);
        assert!(!state.is_loading());
    }

    #[test]
    fn settling_twice_is_a_no_op() {
        let mut state = with_idea("pricing");
        state.begin_generation();
        assert!(state.complete_generation::<String>(Ok("first".into())));
        assert!(!state.complete_generation::<String>(Ok("second".into())));
        assert_eq!(state.result(), Some("first"));
    }

    #[test]
    fn idea_is_frozen_while_loading() {
        let mut state = with_idea("pricing");
        state.begin_generation();
        assert!(!state.push_char('x'));
        assert!(!state.pop_char());
        assert!(!state.clear_idea());
        assert_eq!(state.idea(), "pricing");
    }

    #[test]
    fn char_count_counts_scalars() {
        let state = with_idea("café ✓");
        assert_eq!(state.idea_char_count(), 6);
    }
}
