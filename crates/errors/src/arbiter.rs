//! Request validation error types
//!
//! These cover malformed calls only. A request that is well-formed but
//! inadmissible (exceeds need or availability, would drive an allocation
//! negative, or would leave the system unsafe) is a normal outcome, not an
//! error.

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum ArbiterError {
    #[error("process index {index} out of range for {count} processes")]
    ProcessOutOfRange { index: usize, count: usize },

    #[error("request vector has {actual} entries, expected one per resource type ({expected})")]
    RequestLengthMismatch { expected: usize, actual: usize },
}

impl UserFacingError for ArbiterError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::ProcessOutOfRange { .. } => {
                Some("Process indices start at 0; check the configured process count.")
            }
            Self::RequestLengthMismatch { .. } => {
                Some("Supply exactly one amount per resource type.")
            }
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        match self {
            Self::ProcessOutOfRange { .. } => Some("arbiter.process_out_of_range"),
            Self::RequestLengthMismatch { .. } => Some("arbiter.request_length"),
        }
    }
}
