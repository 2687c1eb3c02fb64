//! CLI command implementations.

pub mod aggregate;
pub mod catalog;
pub mod titles;
