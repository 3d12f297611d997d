#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! High-level operations facade for banker
//!
//! This crate sits between the shell (CLI, or any transport a deployment
//! wraps around it) and the arbitration core. It owns the single shared
//! arbiter behind a read/write lock and exposes the four public
//! operations: `request`, `safety`, `current_state` and `reconfigure`.

mod context;
mod operations;

pub use context::OpsCtx;
pub use operations::{current_state, reconfigure, request, safety};

use banker_errors::Error;
use banker_types::{RequestOutcome, SafetyReport, SystemSnapshot};

/// Operation result that can be serialized for shell output
#[derive(Clone, Debug, serde::Serialize)]
#[serde(tag = "type", content = "data")]
pub enum OperationResult {
    /// Outcome of one arbitrated request
    Request(RequestOutcome),
    /// Safe-state analysis of the current configuration
    Safety(SafetyReport),
    /// Read-only state dump
    State(SystemSnapshot),
    /// Generic success message
    Success(String),
}

impl OperationResult {
    /// Convert to JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(Into::into)
    }

    /// Check if this is a success result
    #[must_use]
    pub fn is_success(&self) -> bool {
        match self {
            OperationResult::Request(outcome) => outcome.granted,
            OperationResult::Safety(report) => report.safe,
            OperationResult::State(_) | OperationResult::Success(_) => true,
        }
    }
}
