//! The four public operations
//!
//! Locking discipline: `request` and `reconfigure` hold the write lock for
//! their entire critical section, so no caller can observe a ledger
//! mid-tentative-mutation or a torn configuration swap. `safety` and
//! `current_state` take the read lock and may overlap each other freely.

use banker_core::RequestArbiter;
use banker_errors::Result;
use banker_types::{RequestOutcome, SafetyReport, SystemConfig, SystemSnapshot};
use tracing::{debug, info};

use crate::context::OpsCtx;

/// Arbitrate one incremental resource request.
///
/// # Errors
///
/// Returns an error for a malformed call (process index out of range or
/// wrong request vector length); an inadmissible request is an `Ok`
/// outcome with `granted == false`.
pub async fn request(ctx: &OpsCtx, proc: usize, delta: &[i64]) -> Result<RequestOutcome> {
    let mut arbiter = ctx.arbiter.write().await;
    let outcome = arbiter.request(proc, delta)?;
    debug!(proc, granted = outcome.granted, "request arbitrated");
    Ok(outcome)
}

/// Run the safe-state analysis against the current, unmutated state.
pub async fn safety(ctx: &OpsCtx) -> SafetyReport {
    let arbiter = ctx.arbiter.read().await;
    let report = arbiter.safety();
    debug!(safe = report.safe, "safety analysis complete");
    report
}

/// Read-only dump of the current configuration and allocation.
pub async fn current_state(ctx: &OpsCtx) -> SystemSnapshot {
    ctx.arbiter.read().await.snapshot()
}

/// Replace the entire configuration atomically.
///
/// The replacement arbiter is constructed and validated before the swap;
/// on any validation failure the previously active configuration stays in
/// effect, untouched.
///
/// # Errors
///
/// Returns an error when the new configuration dimensions are
/// inconsistent.
pub async fn reconfigure(ctx: &OpsCtx, config: &SystemConfig) -> Result<()> {
    let replacement = RequestArbiter::new(config)?;
    let mut arbiter = ctx.arbiter.write().await;
    *arbiter = replacement;
    info!(
        processes = config.num_proc,
        resources = config.num_res,
        "configuration replaced"
    );
    Ok(())
}
