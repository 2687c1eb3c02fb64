//! Score-related types and formulas.
//!
//! This module contains types for representing scores and results:
//! - `DjLevel` - letter grades (F, E, D, C, B, A, AA, AAA)
//! - `ClearType` - clear lamps as written by the e-amusement export
//! - `ParsedScore`, `HistoryMap` - raw per-chart scores from a play history export
//! - score rate, MAX-minus and display formatting

mod clear_type;
mod grade;
mod history;
mod math;

pub use clear_type::*;
pub use grade::*;
pub use history::*;
pub use math::*;
