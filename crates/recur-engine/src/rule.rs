//! Repeat rule types.
//!
//! The serialized forms match the strings the calendar application stores on
//! its event records (`"none"`, `"daily"`, `"weekly"`, `"monthly"`,
//! `"yearly"`), so a rule deserializes straight out of an event payload.

use serde::{Deserialize, Serialize};

/// How often a series repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatType {
    /// No repetition — the series is the start date alone.
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// A repeat rule: kind plus step count.
///
/// The anchor day/month of a series is derived from the start date at
/// generation time, not stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub repeat: RepeatType,
    /// Step count between occurrences. Must be at least 1.
    pub interval: u32,
}

impl RecurrenceRule {
    pub fn new(repeat: RepeatType, interval: u32) -> Self {
        Self { repeat, interval }
    }
}

impl Default for RecurrenceRule {
    fn default() -> Self {
        Self {
            repeat: RepeatType::None,
            interval: 1,
        }
    }
}
