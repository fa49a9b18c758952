//! Transient toolbar feedback.
//!
//! Holds at most one message. A message is visible for `display` after it
//! was posted and is dropped the first time it's queried past that window;
//! there is no timer.

use crate::config::{as_millis_f64, millis};
use dsp_core::{Outcome, Rejection};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// How long a message stays visible (default: 3s).
    #[serde(rename = "display_ms", deserialize_with = "millis")]
    pub display: Duration,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            display: Duration::from_secs(3),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feedback {
    pub status: FeedbackStatus,
    /// Rejection code for failures (`EmptyStructure`, `NotFound`, ...).
    pub code: Option<&'static str>,
    pub message: String,
    #[serde(skip)]
    pub posted_at_ms: f64,
}

impl Feedback {
    pub fn success(outcome: &Outcome, now_ms: f64) -> Self {
        Self {
            status: FeedbackStatus::Success,
            code: None,
            message: outcome.to_string(),
            posted_at_ms: now_ms,
        }
    }

    pub fn failure(rejection: &Rejection, now_ms: f64) -> Self {
        Self {
            status: FeedbackStatus::Failure,
            code: Some(rejection.code()),
            message: rejection.to_string(),
            posted_at_ms: now_ms,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.status == FeedbackStatus::Failure
    }
}

#[derive(Debug, Clone, Default)]
pub struct FeedbackChannel {
    config: FeedbackConfig,
    current: Option<Feedback>,
}

impl FeedbackChannel {
    pub fn new(config: FeedbackConfig) -> Self {
        Self {
            config,
            current: None,
        }
    }

    /// Replace whatever is showing.
    pub fn post(&mut self, feedback: Feedback) {
        log::debug!("feedback: {:?} {}", feedback.status, feedback.message);
        self.current = Some(feedback);
    }

    /// The visible message at `now_ms`, clearing it once expired.
    pub fn current(&mut self, now_ms: f64) -> Option<&Feedback> {
        if self
            .current
            .as_ref()
            .is_some_and(|fb| self.expired(fb, now_ms))
        {
            self.current = None;
        }
        self.current.as_ref()
    }

    fn expired(&self, fb: &Feedback, now_ms: f64) -> bool {
        now_ms - fb.posted_at_ms >= as_millis_f64(self.config.display)
    }
}
