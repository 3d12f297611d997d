//! End-to-end arbitration scenario over the reference system
//!
//! Drives the same five-process, three-resource configuration the shell
//! ships as its default through a full request/query cycle.

use banker_core::{safety, RequestArbiter, ResourceLedger};
use banker_types::SystemConfig;

fn reference_config() -> SystemConfig {
    SystemConfig {
        num_proc: 5,
        num_res: 3,
        total: vec![10, 5, 7],
        allocation: vec![
            vec![0, 1, 0],
            vec![2, 0, 0],
            vec![3, 0, 2],
            vec![2, 1, 1],
            vec![0, 0, 2],
        ],
        maximum: vec![
            vec![7, 5, 3],
            vec![3, 2, 2],
            vec![9, 0, 2],
            vec![2, 2, 2],
            vec![4, 3, 3],
        ],
    }
}

#[test]
fn reference_scenario_end_to_end() {
    let mut arbiter = RequestArbiter::new(&reference_config()).unwrap();

    // Initial state is safe with a full deterministic completion order.
    let report = arbiter.safety();
    assert!(report.safe);
    assert_eq!(report.order, vec![1, 3, 0, 2, 4]);

    // A modest grant goes through and is reflected in the allocation.
    let outcome = arbiter.request(0, &[0, 2, 0]).unwrap();
    assert!(outcome.granted);
    assert_eq!(arbiter.ledger().allocation_row(0), &[0, 3, 0]);
    assert_eq!(arbiter.ledger().available(), vec![3, 1, 2]);

    // Releasing the same units restores the previous state exactly.
    let before = arbiter.snapshot();
    let outcome = arbiter.request(0, &[0, 1, 0]).unwrap();
    assert!(outcome.granted);
    let outcome = arbiter.request(0, &[0, -1, 0]).unwrap();
    assert!(outcome.granted);
    assert_eq!(arbiter.snapshot(), before);
}

#[test]
fn rejected_requests_leave_state_bit_identical() {
    let mut arbiter = RequestArbiter::new(&reference_config()).unwrap();
    let before = arbiter.snapshot();

    // Beyond declared need.
    assert!(!arbiter.request(0, &[8, 0, 0]).unwrap().granted);
    assert_eq!(arbiter.snapshot(), before);

    // Would leave the system unsafe.
    assert!(!arbiter.request(4, &[3, 3, 0]).unwrap().granted);
    assert_eq!(arbiter.snapshot(), before);

    // Would drive an allocation negative.
    assert!(!arbiter.request(1, &[-3, 0, 0]).unwrap().granted);
    assert_eq!(arbiter.snapshot(), before);

    // Malformed calls change nothing either.
    assert!(arbiter.request(9, &[0, 0, 0]).is_err());
    assert!(arbiter.request(0, &[0]).is_err());
    assert_eq!(arbiter.snapshot(), before);
}

#[test]
fn negativity_is_checked_before_safety() {
    // A release that drives the allocation negative must be reported as
    // such even though the resulting state would also be analyzed; the
    // trace must name the negativity check, not the safety verdict.
    let mut arbiter = RequestArbiter::new(&reference_config()).unwrap();
    let outcome = arbiter.request(2, &[0, 0, -3]).unwrap();
    assert!(!outcome.granted);
    assert!(outcome
        .trace
        .iter()
        .any(|line| line.contains("allocation negative")));
    assert!(!outcome.trace.iter().any(|line| line.contains("unsafe")));
}

#[test]
fn conservation_holds_across_a_request_sequence() {
    let config = reference_config();
    let mut arbiter = RequestArbiter::new(&config).unwrap();
    let requests: [(usize, [i64; 3]); 6] = [
        (0, [0, 2, 0]),
        (1, [1, 0, 2]),
        (4, [3, 3, 0]),
        (2, [6, 0, 0]),
        (0, [0, -2, 0]),
        (3, [0, 1, 1]),
    ];

    for (proc, delta) in requests {
        let _ = arbiter.request(proc, &delta).unwrap();
        let available = arbiter.ledger().available();
        let snapshot = arbiter.snapshot();
        for res in 0..config.num_res {
            let allocated: i64 = snapshot.allocation.iter().map(|row| row[res]).sum();
            assert_eq!(allocated + available[res], config.total[res]);
            assert!(available[res] >= 0);
        }
        for proc in 0..config.num_proc {
            for res in 0..config.num_res {
                assert!(snapshot.allocation[proc][res] >= 0);
                assert!(snapshot.allocation[proc][res] <= snapshot.maximum[proc][res]);
            }
        }
    }
}

#[test]
fn standalone_analysis_matches_arbiter_query() {
    let config = reference_config();
    let arbiter = RequestArbiter::new(&config).unwrap();
    let ledger = ResourceLedger::new(&config).unwrap();
    assert_eq!(safety::analyze(&ledger), arbiter.safety());
}
