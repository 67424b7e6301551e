//! The interaction flow controller.
//!
//! Owns the step/category/answer session state, issues backend requests,
//! interprets the classified response variants, and emits display events
//! for the presentation layer. All session mutation goes through the
//! operations here; the presentation layer never mutates state.

use crate::backend::BackendClient;
use crate::protocol::{AskRequest, AskResponse, QuestionCard};
use pickwise_core::category::{expected_question_count, CategoryMap, DEFAULT_QUESTION_COUNT};
use pickwise_core::flow::{FlowPhase, FlowState};
use pickwise_core::locale::Language;
use pickwise_core::recommendation::Recommendation;
use pickwise_core::theme::Theme;
use pickwise_core::Result;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Client-side watchdog for the question endpoint.
pub const ASK_TIMEOUT: Duration = Duration::from_secs(45);

/// Short fixed visual delay between accepting an answer and requesting the
/// next step.
pub const ANSWER_SUBMIT_DELAY: Duration = Duration::from_millis(350);

/// Delay before a second fallback banner is shown.
pub const SECOND_BANNER_DELAY: Duration = Duration::from_millis(1500);

/// Severity of a transient notification banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Info,
    Warning,
}

/// A transient notification banner.
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
    /// Shown after [`SECOND_BANNER_DELAY`] instead of immediately.
    pub delayed: bool,
}

impl Banner {
    fn info(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Info,
            text: text.into(),
            delayed: false,
        }
    }

    fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Warning,
            text: text.into(),
            delayed: false,
        }
    }

    fn delayed_info(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Info,
            text: text.into(),
            delayed: true,
        }
    }
}

/// Display events emitted by controller operations.
///
/// The presentation layer consumes these in order; rendering is a pure
/// function of the event payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowEvent {
    /// Show the transient "processing" overlay.
    ShowProcessing(String),
    /// Show the pre-emptive "generating results" overlay.
    ShowGenerating(String),
    /// Hide any visible overlay.
    HideOverlay,
    /// Inline warning on the current screen; no state change happened.
    InlineWarning(String),
    /// The chosen option was accepted and marked; input is disabled.
    AnswerAccepted(String),
    /// Render the next question.
    QuestionReady(QuestionCard),
    /// Render a recommendation list with its banners.
    RecommendationsReady {
        items: Vec<Recommendation>,
        banners: Vec<Banner>,
    },
    /// Re-render the landing screen with this category list.
    CategoriesRefreshed(Vec<String>),
    /// Show the full-screen error state.
    ErrorScreen(String),
    /// The flow was reset; clear everything back to the landing screen.
    LandingCleared,
}

/// Drives one question/answer flow against the backend.
pub struct FlowController {
    state: FlowState,
    phase: FlowPhase,
    backend: Arc<dyn BackendClient>,
    categories: CategoryMap,
    expected_total: usize,
    session_id: String,
    ask_timeout: Duration,
    answer_delay: Duration,
}

impl FlowController {
    /// Creates a controller in the landing phase.
    pub fn new(backend: Arc<dyn BackendClient>, language: Language, theme: Theme) -> Self {
        Self {
            state: FlowState::new(language, theme),
            phase: FlowPhase::Landing,
            backend,
            categories: CategoryMap::new(),
            expected_total: DEFAULT_QUESTION_COUNT,
            session_id: Uuid::new_v4().to_string(),
            ask_timeout: ASK_TIMEOUT,
            answer_delay: ANSWER_SUBMIT_DELAY,
        }
    }

    /// Overrides the ask watchdog after construction.
    pub fn with_ask_timeout(mut self, timeout: Duration) -> Self {
        self.ask_timeout = timeout;
        self
    }

    /// Overrides the answer visual delay after construction.
    pub fn with_answer_delay(mut self, delay: Duration) -> Self {
        self.answer_delay = delay;
        self
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn phase(&self) -> &FlowPhase {
        &self.phase
    }

    pub fn categories(&self) -> &CategoryMap {
        &self.categories
    }

    /// Expected question count for the active flow's category.
    pub fn expected_total(&self) -> usize {
        self.expected_total
    }

    pub fn language(&self) -> Language {
        self.state.language
    }

    /// Switches the display language; callers re-fetch the category map
    /// afterwards since the backend serves localized specs.
    pub fn set_language(&mut self, language: Language) {
        self.state.language = language;
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.state.theme = theme;
    }

    /// Fetches the category descriptor map (startup and language change).
    pub async fn load_categories(&mut self) -> Result<()> {
        self.categories = self.backend.categories().await?;
        log::info!(
            "[{}] loaded {} categories",
            self.session_id,
            self.categories.len()
        );
        Ok(())
    }

    /// Submits a free-text product query.
    ///
    /// Empty or whitespace-only input yields a localized inline warning and
    /// no state change. Otherwise a category detection request is issued;
    /// success starts the flow and immediately requests the first question.
    pub async fn submit_query(&mut self, raw: &str) -> Vec<FlowEvent> {
        let language = self.state.language;
        let query = raw.trim();
        if query.is_empty() {
            return vec![FlowEvent::InlineWarning(
                language.empty_query_warning().to_string(),
            )];
        }

        let mut events = vec![FlowEvent::ShowProcessing(language.processing().to_string())];
        self.phase = FlowPhase::AwaitingCategoryDetection;
        log::info!("[{}] detecting category for '{}'", self.session_id, query);

        match self.backend.detect_category(query).await {
            Ok(Some(category)) => {
                events.push(FlowEvent::HideOverlay);
                self.start_flow(category, &mut events).await;
            }
            Ok(None) => {
                log::warn!("[{}] no category detected", self.session_id);
                self.fail_request(&mut events);
            }
            Err(err) => {
                log::error!("[{}] category detection failed: {}", self.session_id, err);
                self.fail_request(&mut events);
            }
        }
        events
    }

    /// Selects a category directly, bypassing free-text detection.
    pub async fn select_category(&mut self, category: &str) -> Vec<FlowEvent> {
        if self.state.request_in_flight {
            log::warn!(
                "[{}] category selection ignored, request in flight",
                self.session_id
            );
            return Vec::new();
        }
        let mut events = Vec::new();
        self.start_flow(category.to_string(), &mut events).await;
        events
    }

    /// Answers the currently displayed question.
    ///
    /// A no-op while a request is in flight (single-flight guard). Appends
    /// the answer, increments the step, then after a short fixed visual
    /// delay requests the next question or the final recommendations.
    pub async fn answer(&mut self, option: &str) -> Vec<FlowEvent> {
        if self.state.request_in_flight {
            log::warn!("[{}] answer ignored, request in flight", self.session_id);
            return Vec::new();
        }

        // Local bookkeeping guard: answering with no displayed question is
        // recoverable inline, with no network call.
        if self.phase != FlowPhase::QuestionDisplayed || !self.state.is_active() {
            self.state.request_in_flight = false;
            return vec![FlowEvent::InlineWarning(
                self.state.language.answer_error().to_string(),
            )];
        }

        let mut events = vec![FlowEvent::AnswerAccepted(option.to_string())];
        self.state.record_answer(option.to_string());

        tokio::time::sleep(self.answer_delay).await;
        self.request_next_step(&mut events).await;
        events
    }

    /// Resets the flow back to the landing screen. Idempotent.
    pub fn reset(&mut self) -> Vec<FlowEvent> {
        self.state.reset();
        self.phase = FlowPhase::Landing;
        self.expected_total = DEFAULT_QUESTION_COUNT;
        vec![FlowEvent::HideOverlay, FlowEvent::LandingCleared]
    }

    async fn start_flow(&mut self, category: String, events: &mut Vec<FlowEvent>) {
        self.expected_total = expected_question_count(&self.categories, &category);
        self.state.begin_flow(category);
        self.phase = FlowPhase::AwaitingQuestion;
        self.request_next_step(events).await;
    }

    /// Issues the `/ask` request for the current step and dispatches on the
    /// classified response.
    ///
    /// The request runs under the ask watchdog; when the watchdog fires the
    /// request future is dropped, so a late response can never mutate state.
    /// The in-flight guard is set before the call and cleared exactly once
    /// on every terminal branch.
    async fn request_next_step(&mut self, events: &mut Vec<FlowEvent>) {
        let language = self.state.language;
        let request = AskRequest {
            step: self.state.step,
            category: self.state.category.clone().unwrap_or_default(),
            answers: self.state.answers.clone(),
            language,
        };

        if self.state.answers.len() >= self.expected_total {
            // Best-effort UX signal; the response branch still governs state.
            self.phase = FlowPhase::AwaitingRecommendations;
            events.push(FlowEvent::ShowGenerating(
                language.generating_results().to_string(),
            ));
        } else {
            self.phase = FlowPhase::AwaitingQuestion;
        }

        self.state.request_in_flight = true;
        let outcome = tokio::time::timeout(self.ask_timeout, self.backend.ask(&request)).await;
        self.state.request_in_flight = false;

        match outcome {
            Err(_elapsed) => {
                log::error!(
                    "[{}] /ask timed out after {:?} at step {}",
                    self.session_id,
                    self.ask_timeout,
                    request.step
                );
                self.fail_request(events);
            }
            Ok(Err(err)) => {
                log::error!("[{}] /ask failed: {}", self.session_id, err);
                self.fail_request(events);
            }
            Ok(Ok(response)) => self.dispatch(response, events),
        }
    }

    fn dispatch(&mut self, response: AskResponse, events: &mut Vec<FlowEvent>) {
        let language = self.state.language;
        match response {
            AskResponse::Question(card) => {
                // Never alters the category.
                self.phase = FlowPhase::QuestionDisplayed;
                events.push(FlowEvent::HideOverlay);
                events.push(FlowEvent::QuestionReady(card));
            }
            AskResponse::ModernBatch(items) => {
                self.phase = FlowPhase::RecommendationsDisplayed;
                events.push(FlowEvent::HideOverlay);
                events.push(FlowEvent::RecommendationsReady {
                    items,
                    banners: vec![Banner::info(language.live_data_banner())],
                });
            }
            AskResponse::FallbackBatch { items, message } => {
                self.phase = FlowPhase::RecommendationsDisplayed;
                let mut banners = vec![Banner::warning(language.fallback_banner())];
                if let Some(message) = message {
                    if message != language.fallback_banner() {
                        banners.push(Banner::delayed_info(message));
                    }
                }
                events.push(FlowEvent::HideOverlay);
                events.push(FlowEvent::RecommendationsReady { items, banners });
            }
            AskResponse::LegacyList(items) => {
                self.phase = FlowPhase::RecommendationsDisplayed;
                events.push(FlowEvent::HideOverlay);
                events.push(FlowEvent::RecommendationsReady {
                    items,
                    banners: Vec::new(),
                });
            }
            AskResponse::CategoryRefresh(names) => {
                self.state.reset();
                self.phase = FlowPhase::Landing;
                events.push(FlowEvent::HideOverlay);
                events.push(FlowEvent::CategoriesRefreshed(names));
            }
            AskResponse::Failure(message) => {
                log::warn!("[{}] backend error: {}", self.session_id, message);
                self.fail_request(events);
            }
            AskResponse::FailureWithFallback { items, message } => {
                log::warn!(
                    "[{}] backend error with backup set: {}",
                    self.session_id,
                    message
                );
                self.phase = FlowPhase::RecommendationsDisplayed;
                events.push(FlowEvent::HideOverlay);
                events.push(FlowEvent::RecommendationsReady {
                    items,
                    banners: vec![Banner::info(language.backup_banner())],
                });
            }
        }
    }

    /// Terminal failure for the current request: overlays hidden, exactly
    /// one transition to the error state.
    fn fail_request(&mut self, events: &mut Vec<FlowEvent>) {
        self.state.request_in_flight = false;
        self.phase = FlowPhase::ErrorDisplayed;
        events.push(FlowEvent::HideOverlay);
        events.push(FlowEvent::ErrorScreen(
            self.state.language.error_screen().to_string(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::classify;
    use pickwise_core::catalog::CatalogItem;
    use pickwise_core::PickwiseError;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // Mock backend with queued ask responses and captured requests.
    struct MockBackend {
        detected: Option<String>,
        responses: Mutex<VecDeque<Result<AskResponse>>>,
        requests: Mutex<Vec<AskRequest>>,
        ask_delay: Option<Duration>,
    }

    impl MockBackend {
        fn new(detected: Option<&str>) -> Self {
            Self {
                detected: detected.map(str::to_string),
                responses: Mutex::new(VecDeque::new()),
                requests: Mutex::new(Vec::new()),
                ask_delay: None,
            }
        }

        fn queue(self, response: Result<AskResponse>) -> Self {
            self.responses.lock().unwrap().push_back(response);
            self
        }

        fn queue_json(self, value: serde_json::Value) -> Self {
            let classified = classify(value);
            self.queue(classified)
        }

        fn hanging(mut self) -> Self {
            self.ask_delay = Some(Duration::from_secs(600));
            self
        }

        fn requests(&self) -> Vec<AskRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl BackendClient for MockBackend {
        async fn categories(&self) -> Result<CategoryMap> {
            let raw = json!({
                "Headphones": {
                    "emoji": "🎧",
                    "specs": [
                        {"id": "wireless"},
                        {"id": "anc"},
                        {"id": "budget_band"}
                    ]
                }
            });
            Ok(serde_json::from_value(raw).unwrap())
        }

        async fn detect_category(&self, _query: &str) -> Result<Option<String>> {
            Ok(self.detected.clone())
        }

        async fn ask(&self, request: &AskRequest) -> Result<AskResponse> {
            self.requests.lock().unwrap().push(request.clone());
            if let Some(delay) = self.ask_delay {
                tokio::time::sleep(delay).await;
            }
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(PickwiseError::transport("no queued response")))
        }

        async fn products(&self) -> Result<Vec<CatalogItem>> {
            Ok(Vec::new())
        }
    }

    fn question_json(text: &str) -> serde_json::Value {
        json!({"question": text, "options": ["Yes", "No", "No preference"], "emoji": "🎧"})
    }

    fn controller(backend: MockBackend) -> FlowController {
        FlowController::new(Arc::new(backend), Language::En, Theme::Light)
            .with_answer_delay(Duration::ZERO)
    }

    fn has_error_screen(events: &[FlowEvent]) -> bool {
        events.iter().any(|e| matches!(e, FlowEvent::ErrorScreen(_)))
    }

    #[tokio::test]
    async fn test_empty_query_is_rejected_inline() {
        let mut controller = controller(MockBackend::new(None));
        let events = controller.submit_query("   ").await;

        assert!(matches!(events[0], FlowEvent::InlineWarning(_)));
        assert_eq!(controller.state().step, 0);
        assert_eq!(*controller.phase(), FlowPhase::Landing);
    }

    #[tokio::test]
    async fn test_query_detection_starts_flow_and_fetches_first_question() {
        let backend =
            MockBackend::new(Some("Headphones")).queue_json(question_json("Wireless?"));
        let mut controller = controller(backend);
        let events = controller.submit_query("kulaklık").await;

        assert_eq!(controller.state().step, 1);
        assert_eq!(controller.state().category.as_deref(), Some("Headphones"));
        assert!(controller.state().answers.is_empty());
        assert_eq!(*controller.phase(), FlowPhase::QuestionDisplayed);
        assert!(events
            .iter()
            .any(|e| matches!(e, FlowEvent::QuestionReady(card) if card.question == "Wireless?")));
    }

    #[tokio::test]
    async fn test_detection_without_category_shows_error() {
        let mut controller = controller(MockBackend::new(None));
        let events = controller.submit_query("gizmo").await;

        assert!(has_error_screen(&events));
        assert_eq!(*controller.phase(), FlowPhase::ErrorDisplayed);
        assert!(!controller.state().request_in_flight);
    }

    #[tokio::test]
    async fn test_answer_appends_then_increments_before_request() {
        let mock = Arc::new(
            MockBackend::new(Some("Headphones"))
                .queue_json(question_json("Wireless?"))
                .queue_json(question_json("Noise cancelling?")),
        );
        let mut controller =
            FlowController::new(mock.clone(), Language::En, Theme::Light)
                .with_answer_delay(Duration::ZERO);
        controller.submit_query("kulaklık").await;

        controller.answer("Yes").await;

        assert_eq!(controller.state().answers, vec!["Yes".to_string()]);
        assert_eq!(controller.state().step, 2);

        // The second request carried the appended answer and the bumped step.
        let requests = mock.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].step, 2);
        assert_eq!(requests[1].answers, vec!["Yes".to_string()]);
        assert_eq!(requests[1].category, "Headphones");
    }

    #[tokio::test]
    async fn test_single_flight_guard_drops_answer() {
        let backend =
            MockBackend::new(Some("Headphones")).queue_json(question_json("Wireless?"));
        let mut controller = controller(backend);
        controller.submit_query("kulaklık").await;

        controller.state.request_in_flight = true;
        let events = controller.answer("Yes").await;

        assert!(events.is_empty());
        assert!(controller.state().answers.is_empty());
        assert_eq!(controller.state().step, 1);
    }

    #[tokio::test]
    async fn test_answer_without_displayed_question_is_inline_error() {
        let mut controller = controller(MockBackend::new(None));
        let events = controller.answer("Yes").await;

        assert!(matches!(events[0], FlowEvent::InlineWarning(_)));
        assert!(!controller.state().request_in_flight);
        assert_eq!(*controller.phase(), FlowPhase::Landing);
    }

    #[tokio::test]
    async fn test_question_response_never_alters_category() {
        let backend = MockBackend::new(Some("Headphones"))
            .queue_json(question_json("Wireless?"))
            .queue_json(question_json("Budget?"));
        let mut controller = controller(backend);
        controller.submit_query("kulaklık").await;
        controller.answer("Yes").await;

        assert_eq!(controller.state().category.as_deref(), Some("Headphones"));
        assert_eq!(*controller.phase(), FlowPhase::QuestionDisplayed);
    }

    #[tokio::test]
    async fn test_modern_batch_renders_with_one_live_banner() {
        let backend = MockBackend::new(Some("Headphones"))
            .queue_json(question_json("Wireless?"))
            .queue_json(json!({
                "type": "modern_recommendation",
                "recommendations": [{"title": "Sony WH-1000XM5"}, {"title": "AirPods Pro 2"}]
            }));
        let mut controller = controller(backend);
        controller.submit_query("kulaklık").await;
        let events = controller.answer("Yes").await;

        let (items, banners) = events
            .iter()
            .find_map(|e| match e {
                FlowEvent::RecommendationsReady { items, banners } => Some((items, banners)),
                _ => None,
            })
            .expect("recommendations rendered");
        assert_eq!(items.len(), 2);
        assert_eq!(banners.len(), 1);
        assert_eq!(banners[0].kind, BannerKind::Info);
        assert!(!banners[0].delayed);
        assert_eq!(*controller.phase(), FlowPhase::RecommendationsDisplayed);
    }

    #[tokio::test]
    async fn test_fallback_batch_adds_second_delayed_banner_for_distinct_message() {
        let backend = MockBackend::new(Some("Headphones"))
            .queue_json(question_json("Wireless?"))
            .queue_json(json!({
                "type": "fallback_recommendation",
                "message": "No products in your budget range, showing similar picks",
                "recommendations": [{"title": "JBL Tune 770NC"}]
            }));
        let mut controller = controller(backend);
        controller.submit_query("kulaklık").await;
        let events = controller.answer("Yes").await;

        let banners = events
            .iter()
            .find_map(|e| match e {
                FlowEvent::RecommendationsReady { banners, .. } => Some(banners),
                _ => None,
            })
            .expect("recommendations rendered");
        assert_eq!(banners.len(), 2);
        assert_eq!(banners[0].kind, BannerKind::Warning);
        assert!(!banners[0].delayed);
        assert!(banners[1].delayed);
        assert_eq!(
            banners[1].text,
            "No products in your budget range, showing similar picks"
        );
    }

    #[tokio::test]
    async fn test_legacy_list_renders_without_banner() {
        let backend = MockBackend::new(Some("Headphones"))
            .queue_json(question_json("Wireless?"))
            .queue_json(json!({
                "recommendations": [{"title": "Pick A"}, {"title": "Pick B"}, {"title": "Pick C"}]
            }));
        let mut controller = controller(backend);
        controller.submit_query("kulaklık").await;
        let events = controller.answer("Yes").await;

        let (items, banners) = events
            .iter()
            .find_map(|e| match e {
                FlowEvent::RecommendationsReady { items, banners } => Some((items, banners)),
                _ => None,
            })
            .expect("recommendations rendered");
        assert_eq!(items.len(), 3);
        assert!(banners.is_empty());
    }

    #[tokio::test]
    async fn test_error_with_backup_set_renders_with_info_banner() {
        let backend = MockBackend::new(Some("Headphones"))
            .queue_json(question_json("Wireless?"))
            .queue_json(json!({
                "error": "search engine down",
                "fallback_recommendations": [{"title": "Backup pick"}]
            }));
        let mut controller = controller(backend);
        controller.submit_query("kulaklık").await;
        let events = controller.answer("Yes").await;

        assert!(!has_error_screen(&events));
        assert_eq!(*controller.phase(), FlowPhase::RecommendationsDisplayed);
    }

    #[tokio::test]
    async fn test_backend_error_flag_shows_error_screen() {
        let backend = MockBackend::new(Some("Headphones"))
            .queue_json(question_json("Wireless?"))
            .queue_json(json!({"error": "Invalid category or step"}));
        let mut controller = controller(backend);
        controller.submit_query("kulaklık").await;
        let events = controller.answer("Yes").await;

        assert!(has_error_screen(&events));
        assert_eq!(*controller.phase(), FlowPhase::ErrorDisplayed);
        assert!(!controller.state().request_in_flight);
    }

    #[tokio::test]
    async fn test_unexpected_shape_shows_error_screen() {
        let backend = MockBackend::new(Some("Headphones"))
            .queue_json(question_json("Wireless?"))
            .queue_json(json!({"unrelated": true}));
        let mut controller = controller(backend);
        controller.submit_query("kulaklık").await;
        let events = controller.answer("Yes").await;

        assert!(has_error_screen(&events));
        assert_eq!(*controller.phase(), FlowPhase::ErrorDisplayed);
    }

    #[tokio::test]
    async fn test_timeout_transitions_to_error_exactly_once() {
        let backend = MockBackend::new(Some("Headphones")).hanging();
        let mut controller = FlowController::new(
            Arc::new(backend),
            Language::En,
            Theme::Light,
        )
        .with_answer_delay(Duration::ZERO)
        .with_ask_timeout(Duration::from_millis(20));

        let events = controller.submit_query("kulaklık").await;

        let error_count = events
            .iter()
            .filter(|e| matches!(e, FlowEvent::ErrorScreen(_)))
            .count();
        assert_eq!(error_count, 1);
        assert_eq!(*controller.phase(), FlowPhase::ErrorDisplayed);
        assert!(!controller.state().request_in_flight);
    }

    #[tokio::test]
    async fn test_category_refresh_re_renders_landing() {
        let backend = MockBackend::new(Some("Headphones")).queue_json(json!({
            "question": "What are you shopping for?",
            "categories": ["Headphones", "Klima", "Television"]
        }));
        let mut controller = controller(backend);
        let events = controller.submit_query("kulaklık").await;

        assert!(events
            .iter()
            .any(|e| matches!(e, FlowEvent::CategoriesRefreshed(names) if names.len() == 3)));
        assert_eq!(*controller.phase(), FlowPhase::Landing);
        assert_eq!(controller.state().step, 0);
    }

    #[tokio::test]
    async fn test_generating_overlay_before_final_request() {
        let backend = MockBackend::new(None)
            .queue_json(question_json("q1"))
            .queue_json(question_json("q2"))
            .queue_json(question_json("q3"))
            .queue_json(json!({"recommendations": [{"title": "Pick"}]}));
        let mut controller = controller(backend);
        controller.load_categories().await.unwrap();
        controller.select_category("Headphones").await;

        controller.answer("Yes").await;
        controller.answer("No").await;
        let events = controller.answer("15-30k₺").await;

        // Three answers collected == expected total for Headphones, so the
        // generating overlay is emitted before the final response arrives.
        assert!(events
            .iter()
            .any(|e| matches!(e, FlowEvent::ShowGenerating(_))));
    }

    #[tokio::test]
    async fn test_reset_clears_everything_and_is_idempotent() {
        let backend =
            MockBackend::new(Some("Headphones")).queue_json(question_json("Wireless?"));
        let mut controller = controller(backend);
        controller.submit_query("kulaklık").await;

        let events = controller.reset();
        assert!(events.contains(&FlowEvent::LandingCleared));
        assert_eq!(controller.state().step, 0);
        assert!(controller.state().category.is_none());
        assert!(controller.state().answers.is_empty());
        assert_eq!(*controller.phase(), FlowPhase::Landing);

        let again = controller.reset();
        assert_eq!(events, again);
    }
}
