//! Output formatters for ferret results.

pub mod human;
pub mod json;
pub mod markdown;
