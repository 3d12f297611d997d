//! Authoritative allocation state
//!
//! The ledger owns the total/allocation/maximum matrices and derives the
//! available and need views on demand, never caching them across mutations.
//! It performs no admission checking: [`ResourceLedger::apply_delta`] is a
//! raw, exactly reversible mutation primitive reserved for the arbiter's
//! tentative-apply/rollback protocol.

use banker_errors::LedgerError;
use banker_types::{ResourceMatrix, ResourceVector, SystemConfig, SystemSnapshot};

/// Single source of truth for resource accounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceLedger {
    total: ResourceVector,
    allocation: ResourceMatrix,
    maximum: ResourceMatrix,
}

impl ResourceLedger {
    /// Build a ledger from a configuration bundle.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerError`] if any vector or matrix dimension disagrees
    /// with the declared process or resource count. Nothing is built on
    /// failure.
    pub fn new(config: &SystemConfig) -> Result<Self, LedgerError> {
        let num_proc = config.num_proc;
        let num_res = config.num_res;

        if config.total.len() != num_res {
            return Err(LedgerError::TotalLength {
                expected: num_res,
                actual: config.total.len(),
            });
        }
        if config.allocation.len() != num_proc {
            return Err(LedgerError::AllocationRows {
                expected: num_proc,
                actual: config.allocation.len(),
            });
        }
        for (row, entries) in config.allocation.iter().enumerate() {
            if entries.len() != num_res {
                return Err(LedgerError::AllocationRowLength {
                    row,
                    expected: num_res,
                    actual: entries.len(),
                });
            }
        }
        if config.maximum.len() != num_proc {
            return Err(LedgerError::MaximumRows {
                expected: num_proc,
                actual: config.maximum.len(),
            });
        }
        for (row, entries) in config.maximum.iter().enumerate() {
            if entries.len() != num_res {
                return Err(LedgerError::MaximumRowLength {
                    row,
                    expected: num_res,
                    actual: entries.len(),
                });
            }
        }

        Ok(Self {
            total: config.total.clone(),
            allocation: config.allocation.clone(),
            maximum: config.maximum.clone(),
        })
    }

    /// Number of processes (`P`).
    #[must_use]
    pub fn process_count(&self) -> usize {
        self.allocation.len()
    }

    /// Number of resource types (`R`).
    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.total.len()
    }

    /// Units of each resource type not currently held by any process:
    /// `total[j] - Σ_i allocation[i][j]`.
    #[must_use]
    pub fn available(&self) -> ResourceVector {
        (0..self.resource_count())
            .map(|res| self.total[res] - self.allocation.iter().map(|row| row[res]).sum::<i64>())
            .collect()
    }

    /// Outstanding demand per process: `maximum[i][j] - allocation[i][j]`.
    #[must_use]
    pub fn need(&self) -> ResourceMatrix {
        self.allocation
            .iter()
            .zip(&self.maximum)
            .map(|(held, declared)| held.iter().zip(declared).map(|(a, m)| m - a).collect())
            .collect()
    }

    /// Add `delta` elementwise to the process's allocation row, in place.
    ///
    /// No bounds checking happens here; the arbiter is responsible for
    /// admission. Applying `delta` and then its negation restores the
    /// ledger exactly, which is what makes tentative mutation reversible.
    pub fn apply_delta(&mut self, proc: usize, delta: &[i64]) {
        for (slot, amount) in self.allocation[proc].iter_mut().zip(delta) {
            *slot += amount;
        }
    }

    /// Allocation row currently held by one process.
    #[must_use]
    pub fn allocation_row(&self, proc: usize) -> &[i64] {
        &self.allocation[proc]
    }

    /// Fixed capacity per resource type.
    #[must_use]
    pub fn total(&self) -> &ResourceVector {
        &self.total
    }

    /// Read-only dump of the full state in the external wire shape.
    #[must_use]
    pub fn snapshot(&self) -> SystemSnapshot {
        SystemSnapshot {
            num_proc: self.process_count(),
            num_res: self.resource_count(),
            total: self.total.clone(),
            allocation: self.allocation.clone(),
            maximum: self.maximum.clone(),
        }
    }
}
