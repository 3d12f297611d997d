#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions for the banker resource arbiter
//!
//! This crate provides the fundamental types used throughout the system:
//! resource vectors and matrices, the configuration bundle exchanged with
//! the surrounding shell, and the serializable operation reports.

pub mod reports;
pub mod system;

// Re-export commonly used types
pub use reports::{RequestOutcome, SafetyReport};
pub use system::{SystemConfig, SystemSnapshot};

use serde::{Deserialize, Serialize};

/// Per-resource-type quantities, indexed by resource type.
///
/// Entries are signed: committed ledger state is always non-negative, but
/// request deltas use negative entries for releases, and the arbiter's
/// tentative-apply protocol must be able to represent a transiently
/// negative allocation before rolling it back.
pub type ResourceVector = Vec<i64>;

/// One [`ResourceVector`] row per process.
pub type ResourceMatrix = Vec<ResourceVector>;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Plain
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
        }
    }
}
