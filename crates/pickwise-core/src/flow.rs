//! Flow session state and phase types.
//!
//! The session state is owned by the flow controller and mutated only
//! through the methods here, never as ambient globals. It is created at
//! startup and discarded on exit; only the theme survives a restart.

use crate::locale::Language;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};

/// The phase the interaction flow is currently in.
///
/// Phases advance `Landing` → `AwaitingCategoryDetection` →
/// `AwaitingQuestion` → `QuestionDisplayed` (looping per step) →
/// `AwaitingRecommendations` → `RecommendationsDisplayed`, and return to
/// `Landing` on reset. `ErrorDisplayed` is reachable from any in-flight
/// phase and is recovered from by a user-initiated reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FlowPhase {
    /// No active flow; the landing screen is shown.
    Landing,
    /// A free-text query was submitted; category not yet known.
    AwaitingCategoryDetection,
    /// Category known; the question for the current step is being fetched.
    AwaitingQuestion,
    /// The current step's question and options are rendered.
    QuestionDisplayed,
    /// The final answer was submitted; the recommendation fetch is pending.
    AwaitingRecommendations,
    /// A recommendation list is rendered.
    RecommendationsDisplayed,
    /// A full-screen error overlay is shown.
    ErrorDisplayed,
}

/// Mutable session state for one question/answer flow.
///
/// Invariants, upheld by the mutators below:
/// - `category` is `Some` whenever `step > 0`
/// - `answers.len() == step - 1` while a flow is active
/// - at most one outstanding backend call (`request_in_flight`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowState {
    /// Answers submitted + 1 while a flow is active; 0 means no active flow.
    pub step: u32,
    /// Active product category; `None` when no flow is active.
    pub category: Option<String>,
    /// One answer per completed question, insertion order = question order.
    pub answers: Vec<String>,
    /// Single-flight guard against overlapping backend calls.
    #[serde(default)]
    pub request_in_flight: bool,
    /// Display language; never affects control flow.
    #[serde(default)]
    pub language: Language,
    /// Visual theme; persisted across restarts by the preference store.
    #[serde(default)]
    pub theme: Theme,
}

impl FlowState {
    /// Creates an idle state with no active flow.
    pub fn new(language: Language, theme: Theme) -> Self {
        Self {
            step: 0,
            category: None,
            answers: Vec::new(),
            request_in_flight: false,
            language,
            theme,
        }
    }

    /// True when a flow is active (a category has been chosen).
    pub fn is_active(&self) -> bool {
        self.step > 0
    }

    /// Starts a fresh flow for the given category.
    ///
    /// Sets `step = 1` and clears any previous answers, so the state is
    /// ready for the first question request.
    pub fn begin_flow(&mut self, category: String) {
        self.category = Some(category);
        self.step = 1;
        self.answers.clear();
    }

    /// Records one submitted answer: appends it, then increments the step.
    ///
    /// Must only be called while a flow is active.
    pub fn record_answer(&mut self, answer: String) {
        debug_assert!(self.is_active(), "record_answer with no active flow");
        self.answers.push(answer);
        self.step += 1;
    }

    /// Resets the flow back to the idle landing state.
    ///
    /// Clears `step`, `category` and `answers` together; language and theme
    /// are preserved. Idempotent.
    pub fn reset(&mut self) {
        self.step = 0;
        self.category = None;
        self.answers.clear();
        self.request_in_flight = false;
    }
}

impl Default for FlowState {
    fn default() -> Self {
        Self::new(Language::default(), Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = FlowState::default();
        assert_eq!(state.step, 0);
        assert!(state.category.is_none());
        assert!(state.answers.is_empty());
        assert!(!state.request_in_flight);
        assert!(!state.is_active());
    }

    #[test]
    fn test_begin_flow_sets_step_and_clears_answers() {
        let mut state = FlowState::default();
        state.answers.push("stale".to_string());
        state.begin_flow("Headphones".to_string());

        assert_eq!(state.step, 1);
        assert_eq!(state.category.as_deref(), Some("Headphones"));
        assert!(state.answers.is_empty());
        assert!(state.is_active());
    }

    #[test]
    fn test_record_answer_appends_then_increments() {
        let mut state = FlowState::default();
        state.begin_flow("Television".to_string());

        state.record_answer("Yes".to_string());
        assert_eq!(state.step, 2);
        assert_eq!(state.answers, vec!["Yes".to_string()]);

        state.record_answer("55 inch".to_string());
        assert_eq!(state.step, 3);
        // step is always answers submitted + 1
        assert_eq!(state.answers.len() as u32, state.step - 1);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = FlowState::default();
        state.begin_flow("Tire".to_string());
        state.record_answer("Summer".to_string());
        state.request_in_flight = true;

        state.reset();
        let snapshot = state.clone();
        state.reset();

        assert_eq!(state, snapshot);
        assert_eq!(state.step, 0);
        assert!(state.category.is_none());
        assert!(state.answers.is_empty());
        assert!(!state.request_in_flight);
    }

    #[test]
    fn test_reset_preserves_language_and_theme() {
        let mut state = FlowState::new(Language::Tr, Theme::Dark);
        state.begin_flow("Klima".to_string());
        state.reset();

        assert_eq!(state.language, Language::Tr);
        assert_eq!(state.theme, Theme::Dark);
    }
}
