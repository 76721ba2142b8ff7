//! Dashboard service tests — derived view ordering and filtering.

use chrono::{TimeZone, Utc};
use frauddesk_core::dashboard_service::DashboardService;
use frauddesk_core::store::{
    AlertStatus, RiskLevel, Transaction, TransactionStore, TransactionType,
};

fn txn(id: &str, hour: u32, risk: RiskLevel, status: Option<AlertStatus>) -> Transaction {
    Transaction {
        id: id.into(),
        member_id: format!("m-{id}"),
        member_name: "Test Member".into(),
        account_number: "0000-0000".into(),
        amount: 100.0,
        txn_type: TransactionType::Transfer,
        timestamp: Utc.with_ymd_and_hms(2025, 6, 6, hour, 0, 0).unwrap(),
        description: "test".into(),
        location: None,
        device_id: None,
        ip_address: None,
        risk_score: 0.5,
        risk_level: risk,
        alert_status: status,
        flagged_reasons: vec![],
    }
}

fn service(seed: Vec<Transaction>) -> DashboardService {
    DashboardService::new(TransactionStore::from_seed(seed).unwrap())
}

/// all_transactions is ordered by timestamp descending: every adjacent
/// pair satisfies a.timestamp >= b.timestamp.
#[test]
fn all_transactions_sorted_most_recent_first() {
    let svc = service(vec![
        txn("tx-a", 9, RiskLevel::Low, None),
        txn("tx-b", 17, RiskLevel::Low, None),
        txn("tx-c", 12, RiskLevel::Low, None),
    ]);

    let all = svc.all_transactions();
    assert_eq!(all.len(), 3);
    for pair in all.windows(2) {
        assert!(pair[0].timestamp >= pair[1].timestamp);
    }
    assert_eq!(all[0].id, "tx-b");
    assert_eq!(all[2].id, "tx-a");
}

/// Equal timestamps keep their seed order — the sort is stable.
#[test]
fn equal_timestamps_keep_seed_order() {
    let svc = service(vec![
        txn("tx-first", 12, RiskLevel::Low, None),
        txn("tx-second", 12, RiskLevel::Low, None),
        txn("tx-third", 12, RiskLevel::Low, None),
    ]);

    let ids: Vec<_> = svc.all_transactions().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, ["tx-first", "tx-second", "tx-third"]);
}

/// The high-risk view equals the full view filtered to HIGH, in the same
/// relative order.
#[test]
fn high_risk_subset_matches_filtered_full_list() {
    let svc = service(vec![
        txn("tx-a", 9, RiskLevel::High, None),
        txn("tx-b", 17, RiskLevel::Low, None),
        txn("tx-c", 12, RiskLevel::High, None),
        txn("tx-d", 14, RiskLevel::Medium, None),
    ]);

    let expected: Vec<Transaction> = svc
        .all_transactions()
        .into_iter()
        .filter(|t| t.risk_level == RiskLevel::High)
        .collect();
    assert_eq!(svc.high_risk_transactions(), expected);
    assert_eq!(expected.len(), 2);
    assert_eq!(expected[0].id, "tx-c");
}

/// The review queue contains exactly the new and reviewing alerts.
#[test]
fn review_queue_contains_exactly_new_and_reviewing() {
    let svc = service(vec![
        txn("tx-new", 9, RiskLevel::High, Some(AlertStatus::New)),
        txn("tx-rev", 10, RiskLevel::Medium, Some(AlertStatus::Reviewing)),
        txn("tx-leg", 11, RiskLevel::High, Some(AlertStatus::ResolvedLegitimate)),
        txn("tx-fra", 12, RiskLevel::High, Some(AlertStatus::ResolvedFraudulent)),
        txn("tx-clo", 13, RiskLevel::Low, Some(AlertStatus::Closed)),
        txn("tx-non", 14, RiskLevel::Low, None),
    ]);

    let ids: Vec<_> = svc
        .transactions_for_review()
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, ["tx-rev", "tx-new"]);
}

/// A store holding one resolved-legitimate alert has nothing to review.
#[test]
fn resolved_only_store_has_empty_review_queue() {
    let svc = service(vec![txn(
        "tx-a",
        9,
        RiskLevel::High,
        Some(AlertStatus::ResolvedLegitimate),
    )]);

    assert!(svc.transactions_for_review().is_empty());
}

/// Updating through the service is visible in the next query — views are
/// recomputed, never cached.
#[test]
fn update_through_service_visible_in_requeried_view() {
    let mut svc = service(vec![txn("tx-a", 9, RiskLevel::High, Some(AlertStatus::New))]);
    assert_eq!(svc.transactions_for_review().len(), 1);

    svc.update_alert_status("tx-a", AlertStatus::Closed).unwrap();
    assert!(svc.transactions_for_review().is_empty());
    assert_eq!(
        svc.transaction("tx-a").unwrap().alert_status,
        Some(AlertStatus::Closed)
    );
}
