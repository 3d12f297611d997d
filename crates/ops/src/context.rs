//! Operations context owning the shared arbiter
//!
//! The original shell kept one process-wide mutable instance reachable by
//! every request handler. Here the arbiter is an explicitly owned,
//! lock-guarded value: handlers borrow the context, and every mutating
//! operation holds the write lock for its whole critical section.

use banker_core::RequestArbiter;
use banker_errors::Error;
use banker_types::SystemConfig;
use tokio::sync::RwLock;

/// Shared operations context
pub struct OpsCtx {
    pub(crate) arbiter: RwLock<RequestArbiter>,
}

impl OpsCtx {
    /// Build a context over a freshly validated arbiter.
    ///
    /// # Errors
    ///
    /// Returns an error when the configuration dimensions are inconsistent.
    pub fn new(config: &SystemConfig) -> Result<Self, Error> {
        let arbiter = RequestArbiter::new(config)?;
        Ok(Self {
            arbiter: RwLock::new(arbiter),
        })
    }
}
