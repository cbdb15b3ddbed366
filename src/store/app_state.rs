//! Root State Container
//!
//! Owns the canonical meal, the notification banner and the two view flags.
//! Every mutation goes through a method here; front ends only read.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::notification::{Notification, Severity};
use crate::analysis::{AnalysisFailure, AnalysisResponse, NutritionPayload};
use crate::meal::{lenient, Macros, MealRecord};
use crate::results::EditedMeal;

/// What to do with a response that arrives after a newer submission started
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalePolicy {
    /// Drop responses to superseded submissions
    #[default]
    #[serde(alias = "ignore_stale")]
    Ignore,
    /// Apply every response in completion order
    LastWriterWins,
}

/// Identifies one submission; later submissions get larger tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionToken(u64);

impl fmt::Display for SubmissionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a response was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Record replaced, editor opened
    Accepted,
    /// Error banner raised, record untouched
    Rejected(AnalysisFailure),
    /// Superseded by a newer submission, nothing changed
    Stale,
}

/// Application state
#[derive(Debug, Clone, PartialEq)]
pub struct AppStore {
    record: MealRecord,
    notification: Notification,
    notification_serial: u64,
    show_welcome: bool,
    show_edit_modal: bool,
    stale_policy: StalePolicy,
    last_token: u64,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AppStore {
    pub fn new() -> Self {
        Self::with_stale_policy(StalePolicy::default())
    }

    pub fn with_stale_policy(stale_policy: StalePolicy) -> Self {
        Self {
            record: MealRecord::default(),
            notification: Notification::default(),
            notification_serial: 0,
            show_welcome: true,
            show_edit_modal: false,
            stale_policy,
            last_token: 0,
        }
    }

    pub fn record(&self) -> &MealRecord {
        &self.record
    }

    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    /// Increments every time a banner is raised
    pub fn notification_serial(&self) -> u64 {
        self.notification_serial
    }

    pub fn show_welcome(&self) -> bool {
        self.show_welcome
    }

    pub fn show_edit_modal(&self) -> bool {
        self.show_edit_modal
    }

    /// Splash delay elapsed. The welcome screen never comes back.
    pub fn on_splash_timeout(&mut self) {
        if self.show_welcome {
            tracing::debug!("Welcome splash dismissed");
        }
        self.show_welcome = false;
    }

    /// Take a token for a new outbound request.
    pub fn begin_submission(&mut self) -> SubmissionToken {
        self.last_token += 1;
        let token = SubmissionToken(self.last_token);
        tracing::info!(%token, "Image submitted for analysis");
        token
    }

    /// Whether a response for `token` would be dropped
    pub fn is_stale(&self, token: SubmissionToken) -> bool {
        self.stale_policy == StalePolicy::Ignore && token.0 < self.last_token
    }

    /// Apply the result of the request issued under `token`.
    ///
    /// Transport errors, `success: false` and missing payloads each raise an
    /// error banner; a usable payload replaces the record.
    pub fn finish_submission<E: fmt::Display>(
        &mut self,
        token: SubmissionToken,
        result: Result<AnalysisResponse, E>,
    ) -> SubmissionOutcome {
        if self.is_stale(token) {
            tracing::debug!(%token, latest = self.last_token, "Ignoring stale analysis response");
            return SubmissionOutcome::Stale;
        }

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(%token, error = %e, "Analysis request failed");
                return self.reject(AnalysisFailure::Transport);
            }
        };

        match response.classify() {
            Ok(payload) => self.accept(payload),
            Err(failure) => {
                tracing::warn!(%token, error = %failure, "Analysis rejected");
                self.reject(failure)
            }
        }
    }

    /// Validate a response and, if it carries nutrition data, replace the
    /// record and open the editor.
    pub fn receive_analysis(&mut self, response: &AnalysisResponse) -> SubmissionOutcome {
        match response.classify() {
            Ok(payload) => self.accept(payload),
            Err(_) => {
                tracing::warn!("Analysis response without nutrition data");
                self.reject(AnalysisFailure::MissingPayload)
            }
        }
    }

    fn accept(&mut self, payload: NutritionPayload) -> SubmissionOutcome {
        let macros = payload.macros.sanitized();
        self.record = MealRecord {
            dish: payload.dish,
            image_url: payload.image_url,
            macros,
            original_macros: macros,
            ingredients: payload.ingredients,
            edit_version: self.record.edit_version + 1,
        };
        self.show_edit_modal = true;

        tracing::info!(
            dish = %self.record.dish,
            calories = self.record.macros.calories,
            version = self.record.edit_version,
            "Nutrition data received"
        );
        SubmissionOutcome::Accepted
    }

    /// Overwrite the record with a saved draft and close the editor.
    pub fn complete_edit(&mut self, edited: EditedMeal) {
        let macros = Macros {
            calories: lenient::finite_or_zero(edited.total_calories),
            carbohydrates: lenient::finite_or_zero(edited.total_carbs),
            protein: lenient::finite_or_zero(edited.total_proteins),
            fat: lenient::finite_or_zero(edited.total_fat),
        };

        self.record = MealRecord {
            dish: edited.meal_name,
            image_url: edited.image_url,
            macros,
            original_macros: macros,
            ingredients: edited.ingredients,
            edit_version: self.record.edit_version + 1,
        };
        self.show_edit_modal = false;

        tracing::info!(
            dish = %self.record.dish,
            calories = macros.calories,
            version = self.record.edit_version,
            last_updated = %edited.last_updated,
            "Meal edit saved"
        );
    }

    /// Raise a banner, replacing whatever was shown.
    pub fn notify(&mut self, severity: Severity, message: impl Into<String>) -> u64 {
        self.notification = Notification::new(severity, message);
        self.notification_serial += 1;
        self.notification_serial
    }

    /// Close the banner, keeping its text.
    pub fn dismiss_notification(&mut self) {
        self.notification.open = false;
    }

    /// Auto-hide: close the banner only if it is still the one raised as
    /// `serial`. Returns whether it was closed.
    pub fn expire_notification(&mut self, serial: u64) -> bool {
        if serial != self.notification_serial || !self.notification.open {
            return false;
        }
        self.dismiss_notification();
        true
    }

    fn reject(&mut self, failure: AnalysisFailure) -> SubmissionOutcome {
        self.notify(Severity::Error, failure.message());
        SubmissionOutcome::Rejected(failure)
    }
}
