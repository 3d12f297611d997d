//! Serializable operation reports
//!
//! Both reports carry their decision trace as ordered data; how (or
//! whether) to display it is the caller's choice.

use serde::{Deserialize, Serialize};

/// Verdict of a safe-state analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyReport {
    /// Whether every process can still run to completion
    pub safe: bool,

    /// Completion order found by the analysis. Covers every process index
    /// exactly when `safe`; otherwise holds the prefix of processes that
    /// could still finish before the scan stalled.
    pub order: Vec<usize>,

    /// Ordered log of decision steps
    pub trace: Vec<String>,
}

/// Result of arbitrating a single resource request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOutcome {
    /// Whether the request was granted and its mutation retained
    pub granted: bool,

    /// Completion order of the post-request state when granted; the partial
    /// order when the request was denied as unsafe; empty when denied by an
    /// admission check.
    pub order: Vec<usize>,

    /// Ordered log of decision steps
    pub trace: Vec<String>,
}

impl RequestOutcome {
    /// Denied outcome with a trace but no completion order.
    #[must_use]
    pub fn denied(trace: Vec<String>) -> Self {
        Self {
            granted: false,
            order: Vec::new(),
            trace,
        }
    }
}
