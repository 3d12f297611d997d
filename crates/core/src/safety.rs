//! Safe-state analysis
//!
//! Classic resource-allocation graph reduction: repeatedly pick the lowest
//! indexed unfinished process whose outstanding need fits in the work pool,
//! retire it, and reclaim its held allocation into the pool. The scan
//! restarts from process 0 after every retirement, so the completion order
//! is deterministic for identical ledgers.
//!
//! O(P²·R) per call. P is small and the scan is order-sensitive, so the
//! loop stays sequential.

use banker_types::SafetyReport;

use crate::ledger::ResourceLedger;

/// Decide whether the ledger is in a safe state.
///
/// The returned order covers every process exactly when the state is safe;
/// on an unsafe state it holds the prefix of processes that could still
/// finish before the scan stalled. The trace records each decision step in
/// order; displaying it is the caller's business.
#[must_use]
pub fn analyze(ledger: &ResourceLedger) -> SafetyReport {
    let num_proc = ledger.process_count();
    let need = ledger.need();
    let mut work = ledger.available();
    let mut finished = vec![false; num_proc];
    let mut order = Vec::with_capacity(num_proc);
    let mut trace = Vec::new();

    loop {
        let mut retired = None;
        for proc in 0..num_proc {
            if finished[proc] {
                continue;
            }
            trace.push(format!("checking process {proc}"));
            let fits = need[proc].iter().zip(&work).all(|(needed, free)| needed <= free);
            if fits {
                retired = Some(proc);
                break;
            }
            trace.push(format!("process {proc} must wait"));
        }

        let Some(proc) = retired else { break };
        trace.push(format!(
            "process {proc} can finish; reclaiming its allocation"
        ));
        for (pool, held) in work.iter_mut().zip(ledger.allocation_row(proc)) {
            *pool += held;
        }
        finished[proc] = true;
        order.push(proc);
    }

    let safe = order.len() == num_proc;
    if safe {
        trace.push("all processes can run to completion".to_string());
    } else {
        trace.push("no remaining process can satisfy its need".to_string());
    }

    SafetyReport { safe, order, trace }
}
