//! Integration tests for the operations facade

use banker_ops::{current_state, reconfigure, request, safety, OperationResult, OpsCtx};
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

#[tokio::test]
async fn request_and_state_round_trip() {
    let ctx = OpsCtx::new(&reference_config()).unwrap();

    let outcome = request(&ctx, 0, &[0, 2, 0]).await.unwrap();
    assert!(outcome.granted);

    let snapshot = current_state(&ctx).await;
    assert_eq!(snapshot.allocation[0], vec![0, 3, 0]);
    assert_eq!(snapshot.num_proc, 5);
}

#[tokio::test]
async fn rejected_request_is_not_an_error() {
    let ctx = OpsCtx::new(&reference_config()).unwrap();
    let before = current_state(&ctx).await;

    let outcome = request(&ctx, 4, &[3, 3, 0]).await.unwrap();
    assert!(!outcome.granted);
    assert_eq!(current_state(&ctx).await, before);
}

#[tokio::test]
async fn malformed_request_is_an_error() {
    let ctx = OpsCtx::new(&reference_config()).unwrap();
    assert!(request(&ctx, 99, &[0, 0, 0]).await.is_err());
    assert!(request(&ctx, 0, &[0]).await.is_err());
}

#[tokio::test]
async fn safety_is_idempotent_between_requests() {
    let ctx = OpsCtx::new(&reference_config()).unwrap();
    let first = safety(&ctx).await;
    let second = safety(&ctx).await;
    assert_eq!(first, second);
    assert!(first.safe);
    assert_eq!(first.order, vec![1, 3, 0, 2, 4]);
}

#[tokio::test]
async fn reconfigure_swaps_the_whole_system() {
    let ctx = OpsCtx::new(&reference_config()).unwrap();

    let replacement = SystemConfig {
        num_proc: 2,
        num_res: 1,
        total: vec![4],
        allocation: vec![vec![1], vec![1]],
        maximum: vec![vec![2], vec![3]],
    };
    reconfigure(&ctx, &replacement).await.unwrap();

    let snapshot = current_state(&ctx).await;
    assert_eq!(snapshot.num_proc, 2);
    assert_eq!(snapshot.num_res, 1);
    assert_eq!(snapshot.total, vec![4]);
}

#[tokio::test]
async fn failed_reconfigure_keeps_previous_state() {
    let ctx = OpsCtx::new(&reference_config()).unwrap();
    let before = current_state(&ctx).await;

    let mut bad = reference_config();
    bad.allocation.pop();
    assert!(reconfigure(&ctx, &bad).await.is_err());

    assert_eq!(current_state(&ctx).await, before);
    assert!(safety(&ctx).await.safe);
}

#[tokio::test]
async fn concurrent_safety_queries_share_the_read_lock() {
    let ctx = std::sync::Arc::new(OpsCtx::new(&reference_config()).unwrap());

    let mut handles = Vec::new();
    for _ in 0..8 {
        let ctx = ctx.clone();
        handles.push(tokio::spawn(async move { safety(&ctx).await }));
    }

    let baseline = safety(&ctx).await;
    for handle in handles {
        assert_eq!(handle.await.unwrap(), baseline);
    }
}

#[tokio::test]
async fn operation_result_serializes_with_stable_names() {
    let ctx = OpsCtx::new(&reference_config()).unwrap();

    let outcome = request(&ctx, 0, &[0, 2, 0]).await.unwrap();
    let json = OperationResult::Request(outcome).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["type"], "Request");
    assert_eq!(value["data"]["granted"], true);
    assert!(value["data"]["order"].is_array());
    assert!(value["data"]["trace"].is_array());

    let snapshot = current_state(&ctx).await;
    let json = OperationResult::State(snapshot).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["data"]["numProc"], 5);
    assert_eq!(value["data"]["numRes"], 3);
}
