//! Request arbitration
//!
//! The arbiter is the only entry point that mutates the ledger. A request
//! is applied tentatively, the post-request state is verified with the
//! safety analysis, and the mutation is rolled back whenever any check
//! fails. Reusing the unmodified safety algorithm against the post-request
//! state keeps the arbitration logic small and directly testable.

use banker_errors::{ArbiterError, LedgerError};
use banker_types::{RequestOutcome, SafetyReport, SystemConfig, SystemSnapshot};

use crate::ledger::ResourceLedger;
use crate::safety;

/// Arbitrates incremental resource requests against a ledger.
#[derive(Debug, Clone)]
pub struct RequestArbiter {
    ledger: ResourceLedger,
}

impl RequestArbiter {
    /// Build an arbiter over a freshly validated ledger.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerError`] when the configuration dimensions are
    /// inconsistent; nothing is built on failure.
    pub fn new(config: &SystemConfig) -> Result<Self, LedgerError> {
        Ok(Self {
            ledger: ResourceLedger::new(config)?,
        })
    }

    /// Arbitrate one incremental request; negative entries release units
    /// back to the pool.
    ///
    /// A well-formed but inadmissible request (exceeds need or the free
    /// pool, would drive an allocation negative, or would leave the system
    /// unsafe) is reported as `Ok` with `granted == false` and the ledger
    /// unchanged. Only a malformed call is an `Err`.
    ///
    /// Callers sharing an arbiter must hold an exclusive lock across this
    /// whole call: the ledger transiently holds the tentative state between
    /// application and verification.
    ///
    /// # Errors
    ///
    /// [`ArbiterError::ProcessOutOfRange`] if `proc >= P`,
    /// [`ArbiterError::RequestLengthMismatch`] if `delta` is not length `R`.
    /// Neither touches the ledger.
    pub fn request(
        &mut self,
        proc: usize,
        delta: &[i64],
    ) -> Result<RequestOutcome, ArbiterError> {
        let num_proc = self.ledger.process_count();
        if proc >= num_proc {
            return Err(ArbiterError::ProcessOutOfRange {
                index: proc,
                count: num_proc,
            });
        }
        let num_res = self.ledger.resource_count();
        if delta.len() != num_res {
            return Err(ArbiterError::RequestLengthMismatch {
                expected: num_res,
                actual: delta.len(),
            });
        }

        let mut trace = vec![format!("process {proc} requests {delta:?}")];

        // Admission checks run against the current state; neither invokes
        // the safety analysis and neither mutates.
        let need = self.ledger.need();
        if let Some(res) = (0..num_res).find(|&res| delta[res] > need[proc][res]) {
            trace.push(format!(
                "denied: request for resource {res} exceeds declared need"
            ));
            return Ok(RequestOutcome::denied(trace));
        }
        let available = self.ledger.available();
        if let Some(res) = (0..num_res).find(|&res| delta[res] > available[res]) {
            trace.push(format!(
                "denied: request for resource {res} exceeds available pool"
            ));
            return Ok(RequestOutcome::denied(trace));
        }

        // Tentative application; every failure path below must reverse it
        // before returning.
        self.ledger.apply_delta(proc, delta);
        trace.push(format!("tentatively applied {delta:?} to process {proc}"));

        if self.ledger.allocation_row(proc).iter().any(|&held| held < 0) {
            self.rollback(proc, delta);
            trace.push(
                "denied: release would drive the allocation negative; rolled back".to_string(),
            );
            return Ok(RequestOutcome::denied(trace));
        }

        let report = safety::analyze(&self.ledger);
        trace.extend(report.trace);
        if report.safe {
            trace.push("granted: resulting state is safe".to_string());
            Ok(RequestOutcome {
                granted: true,
                order: report.order,
                trace,
            })
        } else {
            self.rollback(proc, delta);
            trace.push("denied: resulting state is unsafe; rolled back".to_string());
            Ok(RequestOutcome {
                granted: false,
                order: report.order,
                trace,
            })
        }
    }

    /// Safety query against the current, unmutated ledger. Side-effect-free
    /// and idempotent between requests.
    #[must_use]
    pub fn safety(&self) -> SafetyReport {
        safety::analyze(&self.ledger)
    }

    /// Read-only dump of the current state.
    #[must_use]
    pub fn snapshot(&self) -> SystemSnapshot {
        self.ledger.snapshot()
    }

    /// The underlying ledger, read-only.
    #[must_use]
    pub fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    fn rollback(&mut self, proc: usize, delta: &[i64]) {
        let negated: Vec<i64> = delta.iter().map(|amount| -amount).collect();
        self.ledger.apply_delta(proc, &negated);
    }
}
