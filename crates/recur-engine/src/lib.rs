//! # recur-engine
//!
//! Deterministic recurrence-date generation for calendar events.
//!
//! Given a start date, a repeat rule, and an optional end bound, the engine
//! produces the exact ordered set of calendar dates the event occurs on —
//! with month-length overflow and leap years handled by *omission*, never by
//! clamping an occurrence onto the wrong day. A monthly series anchored on
//! Jan 31 skips February; a yearly series anchored on Feb 29 only fires in
//! leap years.
//!
//! ## Quick start
//!
//! ```rust
//! use recur_engine::{generate_occurrences, RepeatType};
//!
//! let dates = generate_occurrences(
//!     "2025-01-31",
//!     RepeatType::Monthly,
//!     1,
//!     Some("2025-05-31"),
//! )
//! .unwrap();
//!
//! // February and April have no 31st, so those months are skipped.
//! assert_eq!(dates, ["2025-01-31", "2025-03-31", "2025-05-31"]);
//! ```
//!
//! ## Modules
//!
//! - [`generator`] — repeat rule → list of concrete occurrence dates
//! - [`calendar`] — calendar arithmetic (leap years, month lengths, week grids)
//! - [`rule`] — repeat rule types
//! - [`error`] — error types

pub mod calendar;
pub mod error;
pub mod generator;
pub mod rule;

pub use error::RecurError;
pub use generator::{generate_for_rule, generate_occurrences, DEFAULT_HORIZON_YEARS};
pub use rule::{RecurrenceRule, RepeatType};
