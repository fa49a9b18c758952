//! Playground configuration.
//!
//! Every field has a default; hosts may override any subset (e.g. from JSON).
//! Durations are written as whole milliseconds.

use crate::feedback::FeedbackConfig;
use crate::gesture::GestureConfig;
use dsp_core::StructureKind;
use serde::{Deserialize, Deserializer};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub gesture: GestureConfig,
    pub feedback: FeedbackConfig,
    /// Kind preselected for placement on startup.
    pub default_kind: StructureKind,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            gesture: GestureConfig::default(),
            feedback: FeedbackConfig::default(),
            default_kind: StructureKind::Array,
        }
    }
}

/// `deserialize_with` helper: whole milliseconds → `Duration`.
pub(crate) fn millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_millis)
}

/// `Duration` → fractional milliseconds, the unit of event timestamps.
pub(crate) fn as_millis_f64(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
