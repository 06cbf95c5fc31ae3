//! Record types for every agent operation.
//!
//! Each record declares its `shape()`, the contract the gateway back-fills against.
//! Field names are the wire names the model is asked to produce.
//!
//! Default policy, identical across operations: scores → 0, qualitative ratings →
//! "Unknown", lists → [], narrative text → a placeholder sentence where one is
//! declared, otherwise "".

pub mod cv;
pub mod dossier;
pub mod opportunity;
pub mod outreach;
pub mod strategy;

/// Placeholder for qualitative ratings the model did not provide.
pub const UNKNOWN: &str = "Unknown";
