//! Ledger construction error types
//!
//! Every variant is a dimension mismatch between a configuration bundle and
//! its declared process/resource counts. Construction either succeeds fully
//! or returns one of these with nothing built.

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum LedgerError {
    #[error("total vector has {actual} entries, expected one per resource type ({expected})")]
    TotalLength { expected: usize, actual: usize },

    #[error("allocation matrix has {actual} rows, expected one per process ({expected})")]
    AllocationRows { expected: usize, actual: usize },

    #[error("allocation row {row} has {actual} entries, expected {expected}")]
    AllocationRowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("maximum matrix has {actual} rows, expected one per process ({expected})")]
    MaximumRows { expected: usize, actual: usize },

    #[error("maximum row {row} has {actual} entries, expected {expected}")]
    MaximumRowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

impl UserFacingError for LedgerError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        Some("The allocation and maximum matrices must be process-count rows of resource-count entries.")
    }

    fn user_code(&self) -> Option<&'static str> {
        match self {
            Self::TotalLength { .. } => Some("ledger.total_length"),
            Self::AllocationRows { .. } | Self::AllocationRowLength { .. } => {
                Some("ledger.allocation_shape")
            }
            Self::MaximumRows { .. } | Self::MaximumRowLength { .. } => {
                Some("ledger.maximum_shape")
            }
        }
    }
}
