//! Chart-related types and the master catalog.
//!
//! This module contains types for representing charts (songs + difficulties):
//! - `Difficulty` - single-play difficulty tags (SPB, SPN, SPH, SPA, SPL)
//! - `MasterChart` - one raw row of the chart master table
//! - `TargetChart` - a playable SP chart with its BPI anchors
//! - `MasterCatalog` - load-once cache of the master table

mod catalog;
mod difficulty;
mod master;
mod target;

pub use catalog::*;
pub use difficulty::*;
pub use master::*;
pub use target::*;
