//! External state shapes
//!
//! [`SystemConfig`] is the full `(P, R, total, allocation, maximum)` bundle
//! a caller supplies at construction or reconfiguration; [`SystemSnapshot`]
//! is the read-only dump of the arbitrated state. The serde field names are
//! the stable wire contract the surrounding shell must preserve, whatever
//! transport it uses.
//!
//! Quantities are `i64`-typed, so fractional numbers are rejected at the
//! deserialization boundary before any core object is built.

use serde::{Deserialize, Serialize};

use crate::{ResourceMatrix, ResourceVector};

/// Full system configuration bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Number of processes (`P`)
    #[serde(rename = "numProc")]
    pub num_proc: usize,

    /// Number of resource types (`R`)
    #[serde(rename = "numRes")]
    pub num_res: usize,

    /// Fixed capacity per resource type, length `R`
    pub total: ResourceVector,

    /// Current allocation, `P` rows of length `R`
    pub allocation: ResourceMatrix,

    /// Declared maximum demand, `P` rows of length `R`
    pub maximum: ResourceMatrix,
}

/// Read-only dump of the current arbitrated state.
///
/// Same shape as [`SystemConfig`]; produced by the `currentState` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemSnapshot {
    #[serde(rename = "numProc")]
    pub num_proc: usize,

    #[serde(rename = "numRes")]
    pub num_res: usize,

    pub total: ResourceVector,

    pub allocation: ResourceMatrix,

    pub maximum: ResourceMatrix,
}
