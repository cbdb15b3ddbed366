//! Native session
//!
//! Ties the store to an analysis client and the two timers (welcome splash
//! and notification auto-hide). The store lock is taken to issue a token and
//! to apply the result, never across the network call.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::analysis::{AnalysisClient, ImageUpload};
use crate::config::UiConfig;
use crate::results::EditedMeal;
use crate::store::{AppStore, SharedStore, SplashTimer, SubmissionOutcome};

/// One user's session against an analysis backend
pub struct Session<C: AnalysisClient> {
    store: SharedStore,
    client: Arc<C>,
    splash_duration: Duration,
    notification_duration: Duration,
    splash: Option<SplashTimer>,
    auto_hide: Mutex<Option<JoinHandle<()>>>,
}

impl<C: AnalysisClient> Session<C> {
    pub fn new(client: C, ui: &UiConfig) -> Self {
        let store = Arc::new(RwLock::new(AppStore::with_stale_policy(ui.stale_responses)));
        Self::from_shared(store, Arc::new(client), ui)
    }

    pub fn from_shared(store: SharedStore, client: Arc<C>, ui: &UiConfig) -> Self {
        Self {
            store,
            client,
            splash_duration: ui.splash_duration(),
            notification_duration: ui.notification_duration(),
            splash: None,
            auto_hide: Mutex::new(None),
        }
    }

    pub fn store(&self) -> SharedStore {
        Arc::clone(&self.store)
    }

    /// Start the welcome splash countdown. Restarting replaces the old timer.
    pub fn start_splash(&mut self) {
        self.splash = Some(SplashTimer::start(self.store(), self.splash_duration));
    }

    /// Send one image for analysis and apply the answer.
    pub async fn submit_image(&self, upload: ImageUpload) -> SubmissionOutcome {
        let token = self.store.write().await.begin_submission();

        let result = self.client.analyze(upload).await;

        let (outcome, serial) = {
            let mut store = self.store.write().await;
            let outcome = store.finish_submission(token, result);
            (outcome, store.notification_serial())
        };

        if matches!(outcome, SubmissionOutcome::Rejected(_)) {
            self.schedule_auto_hide(serial);
        }
        outcome
    }

    pub async fn complete_edit(&self, edited: EditedMeal) {
        self.store.write().await.complete_edit(edited);
    }

    pub async fn dismiss_notification(&self) {
        self.store.write().await.dismiss_notification();
    }

    /// Copy of the current state
    pub async fn snapshot(&self) -> AppStore {
        self.store.read().await.clone()
    }

    /// Cancel pending timers.
    pub fn shutdown(&mut self) {
        if let Some(splash) = self.splash.take() {
            splash.cancel();
        }
        if let Some(handle) = self.take_auto_hide() {
            handle.abort();
        }
        tracing::debug!("Session timers cancelled");
    }

    fn schedule_auto_hide(&self, serial: u64) {
        let store = self.store();
        let duration = self.notification_duration;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            if store.write().await.expire_notification(serial) {
                tracing::debug!(serial, "Notification auto-hidden");
            }
        });

        if let Some(previous) = self.replace_auto_hide(handle) {
            previous.abort();
        }
    }

    fn replace_auto_hide(&self, handle: JoinHandle<()>) -> Option<JoinHandle<()>> {
        match self.auto_hide.lock() {
            Ok(mut slot) => slot.replace(handle),
            Err(poisoned) => poisoned.into_inner().replace(handle),
        }
    }

    fn take_auto_hide(&self) -> Option<JoinHandle<()>> {
        match self.auto_hide.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        }
    }
}

impl<C: AnalysisClient> Drop for Session<C> {
    fn drop(&mut self) {
        let handle = match self.auto_hide.get_mut() {
            Ok(slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(handle) = handle {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{
        AnalysisError, AnalysisFailure, AnalysisResponse, AnalysisResult, NutritionPayload,
    };
    use crate::meal::Macros;
    use crate::results::{MacroField, ResultView, ViewMode};
    use crate::store::{Severity, StalePolicy};
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use tokio::sync::{mpsc, oneshot};

    /// Answers every request with the same canned response, or a transport
    /// error when `response` is `None`.
    struct FixedClient {
        response: Option<AnalysisResponse>,
    }

    #[async_trait]
    impl AnalysisClient for FixedClient {
        async fn analyze(&self, _upload: ImageUpload) -> AnalysisResult<AnalysisResponse> {
            self.response.clone().ok_or(AnalysisError::Unavailable)
        }
    }

    /// Holds each request open until the test releases it.
    struct ScriptedClient {
        replies: std::sync::Mutex<VecDeque<oneshot::Receiver<AnalysisResponse>>>,
        called: mpsc::UnboundedSender<()>,
    }

    #[async_trait]
    impl AnalysisClient for ScriptedClient {
        async fn analyze(&self, _upload: ImageUpload) -> AnalysisResult<AnalysisResponse> {
            let reply = self.replies.lock().unwrap().pop_front().unwrap();
            self.called.send(()).unwrap();
            reply.await.map_err(|_| AnalysisError::Unavailable)
        }
    }

    fn salad() -> AnalysisResponse {
        AnalysisResponse::success(&NutritionPayload {
            dish: "Salad".to_string(),
            image_url: "x.jpg".to_string(),
            macros: Macros::new(120.0, 10.0, 3.0, 5.0),
            ingredients: vec![],
        })
    }

    fn soup() -> AnalysisResponse {
        AnalysisResponse::success(&NutritionPayload {
            dish: "Soup".to_string(),
            image_url: "soup.jpg".to_string(),
            macros: Macros::new(200.0, 20.0, 8.0, 9.0),
            ingredients: vec![],
        })
    }

    fn upload() -> ImageUpload {
        ImageUpload::new("plate.jpg", vec![0xff, 0xd8])
    }

    fn session_with(response: Option<AnalysisResponse>) -> Session<FixedClient> {
        Session::new(FixedClient { response }, &UiConfig::default())
    }

    #[tokio::test]
    async fn test_salad_opens_editor() {
        let session = session_with(Some(salad()));

        let outcome = session.submit_image(upload()).await;
        assert_eq!(outcome, SubmissionOutcome::Accepted);

        let state = session.snapshot().await;
        assert!(state.show_edit_modal());
        assert_eq!(state.record().dish, "Salad");

        let view = ResultView::load_from_source(state.record());
        assert_eq!(view.mode(), ViewMode::Editing);
        assert_eq!(view.draft().get(MacroField::TotalCalories), 120.0);
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let session = session_with(None);

        let outcome = session.submit_image(upload()).await;
        assert_eq!(outcome, SubmissionOutcome::Rejected(AnalysisFailure::Transport));

        let state = session.snapshot().await;
        assert!(state.notification().open);
        assert_eq!(state.notification().severity, Severity::Error);
        assert_eq!(state.notification().message, "Failed to connect to the server.");
        assert!(!state.record().has_data());
    }

    #[tokio::test]
    async fn test_server_failure_keeps_record() {
        let session = session_with(Some(salad()));
        session.submit_image(upload()).await;
        let before = session.snapshot().await.record().clone();

        let failing = Session::from_shared(
            session.store(),
            Arc::new(FixedClient {
                response: Some(AnalysisResponse::failure("Image too large")),
            }),
            &UiConfig::default(),
        );
        failing.submit_image(upload()).await;

        let state = session.snapshot().await;
        assert_eq!(state.record(), &before);
        assert_eq!(state.notification().message, "Image too large");
    }

    #[tokio::test]
    async fn test_edit_round_trip() {
        let session = session_with(Some(salad()));
        session.submit_image(upload()).await;

        let mut view = ResultView::load_from_source(session.snapshot().await.record());
        view.edit_field(MacroField::TotalCalories, "150");
        session.complete_edit(view.save()).await;

        let state = session.snapshot().await;
        assert_eq!(state.record().macros.calories, 150.0);
        assert_eq!(state.record().macros, state.record().original_macros);
        assert_eq!(state.record().edit_version, 2);
        assert!(!state.show_edit_modal());
        assert_eq!(view.summary_lines().unwrap()[0], "Calories: 150 kcal");
    }

    #[tokio::test]
    async fn test_notification_auto_hides() {
        let ui = UiConfig {
            notification_duration_ms: 20,
            ..UiConfig::default()
        };
        let session = Session::new(FixedClient { response: None }, &ui);

        session.submit_image(upload()).await;
        assert!(session.snapshot().await.notification().open);

        tokio::time::sleep(Duration::from_millis(100)).await;
        let state = session.snapshot().await;
        assert!(!state.notification().open);
        assert_eq!(state.notification().message, "Failed to connect to the server.");
    }

    #[tokio::test]
    async fn test_dismiss_notification() {
        let session = session_with(None);
        session.submit_image(upload()).await;
        session.dismiss_notification().await;

        assert!(!session.snapshot().await.notification().open);
    }

    #[tokio::test]
    async fn test_splash_and_shutdown() {
        let ui = UiConfig {
            splash_duration_ms: 10,
            ..UiConfig::default()
        };
        let mut session = Session::new(FixedClient { response: None }, &ui);
        session.start_splash();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!session.snapshot().await.show_welcome());

        let ui = UiConfig {
            splash_duration_ms: 50,
            ..UiConfig::default()
        };
        let mut session = Session::new(FixedClient { response: None }, &ui);
        session.start_splash();
        session.shutdown();

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(session.snapshot().await.show_welcome());
    }

    async fn overlapping_submissions(
        policy: StalePolicy,
    ) -> (SubmissionOutcome, SubmissionOutcome, AppStore) {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let (called_tx, mut called_rx) = mpsc::unbounded_channel();

        let client = ScriptedClient {
            replies: std::sync::Mutex::new(VecDeque::from([first_rx, second_rx])),
            called: called_tx,
        };
        let ui = UiConfig {
            stale_responses: policy,
            ..UiConfig::default()
        };
        let session = Session::new(client, &ui);

        let first = session.submit_image(upload());
        let second = async {
            called_rx.recv().await;
            let submission = session.submit_image(upload());
            let release = async {
                called_rx.recv().await;
                // Newer answer lands first, older one after it.
                second_tx.send(soup()).unwrap();
                tokio::task::yield_now().await;
                first_tx.send(salad()).unwrap();
            };
            let (outcome, ()) = tokio::join!(submission, release);
            outcome
        };

        let (first, second) = tokio::join!(first, second);
        let state = session.snapshot().await;
        (first, second, state)
    }

    #[tokio::test]
    async fn test_stale_response_ignored() {
        let (first, second, state) = overlapping_submissions(StalePolicy::Ignore).await;

        assert_eq!(second, SubmissionOutcome::Accepted);
        assert_eq!(first, SubmissionOutcome::Stale);
        assert_eq!(state.record().dish, "Soup");
        assert_eq!(state.record().edit_version, 1);
    }

    #[tokio::test]
    async fn test_last_writer_wins() {
        let (first, second, state) = overlapping_submissions(StalePolicy::LastWriterWins).await;

        assert_eq!(first, SubmissionOutcome::Accepted);
        assert_eq!(second, SubmissionOutcome::Accepted);
        assert_eq!(state.record().edit_version, 2);
    }
}
