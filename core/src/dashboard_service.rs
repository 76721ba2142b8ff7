//! Dashboard query and metrics service.
//!
//! RULE: Stateless read logic layered over the store. Every call
//! recomputes its result from current store contents — derived views
//! are never cached, so a caller that mutates simply re-queries.

use crate::error::DeskResult;
use crate::store::{AlertStatus, RiskLevel, Transaction, TransactionStore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate snapshot over the full store, recomputed on demand and
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudMetrics {
    pub total_transactions: usize,
    pub high_risk_count: usize,
    pub medium_risk_count: usize,
    pub low_risk_count: usize,
    /// Alerts with status new or reviewing.
    pub alerts_to_review: usize,
    /// Resolved-fraudulent transactions dated on the reporting day.
    pub fraudulent_today: usize,
    pub fraud_rate_pct: f64,
    pub average_amount: f64,
}

/// The query/command surface the presentation layer talks to.
/// Owns the store; one mutating operation, everything else read-only.
pub struct DashboardService {
    store: TransactionStore,
}

impl DashboardService {
    pub fn new(store: TransactionStore) -> Self {
        Self { store }
    }

    /// All transactions, most recent first.
    pub fn all_transactions(&self) -> Vec<Transaction> {
        self.view(|_| true)
    }

    /// High-risk subset, most recent first.
    pub fn high_risk_transactions(&self) -> Vec<Transaction> {
        self.view(|t| t.risk_level == RiskLevel::High)
    }

    /// Transactions an operator still has to look at: alert status new or
    /// reviewing. Absent, resolved, and closed alerts are excluded.
    pub fn transactions_for_review(&self) -> Vec<Transaction> {
        self.view(|t| t.alert_status.is_some_and(AlertStatus::needs_review))
    }

    /// Look up one transaction by id.
    pub fn transaction(&self, id: &str) -> DeskResult<&Transaction> {
        self.store.get(id)
    }

    /// Set the alert status on one transaction. Views returned before this
    /// call are stale afterwards; callers re-query.
    pub fn update_alert_status(
        &mut self,
        id: &str,
        status: AlertStatus,
    ) -> DeskResult<Transaction> {
        self.store.update_alert_status(id, status)
    }

    /// Metrics over the whole store, computed fresh.
    ///
    /// `now` anchors the fraud-today window: a transaction counts when its
    /// alert status is resolved_fraudulent and its timestamp falls on the
    /// same UTC calendar day as `now`. An empty store yields zero rate and
    /// zero average, never a division error.
    pub fn metrics_at(&self, now: DateTime<Utc>) -> FraudMetrics {
        let txns = self.store.all();
        let total = txns.len();
        let today = now.date_naive();

        let mut high = 0;
        let mut medium = 0;
        let mut low = 0;
        let mut to_review = 0;
        let mut fraudulent_today = 0;
        let mut amount_sum = 0.0;

        for t in txns {
            match t.risk_level {
                RiskLevel::High => high += 1,
                RiskLevel::Medium => medium += 1,
                RiskLevel::Low => low += 1,
            }
            if t.alert_status.is_some_and(AlertStatus::needs_review) {
                to_review += 1;
            }
            if t.alert_status == Some(AlertStatus::ResolvedFraudulent)
                && t.timestamp.date_naive() == today
            {
                fraudulent_today += 1;
            }
            amount_sum += t.amount;
        }

        let (fraud_rate_pct, average_amount) = if total == 0 {
            (0.0, 0.0)
        } else {
            (
                fraudulent_today as f64 / total as f64 * 100.0,
                amount_sum / total as f64,
            )
        };

        FraudMetrics {
            total_transactions: total,
            high_risk_count: high,
            medium_risk_count: medium,
            low_risk_count: low,
            alerts_to_review: to_review,
            fraudulent_today,
            fraud_rate_pct,
            average_amount,
        }
    }

    /// Filter, then order by timestamp descending. The sort is stable, so
    /// equal timestamps keep their seed order.
    fn view<F>(&self, keep: F) -> Vec<Transaction>
    where
        F: Fn(&Transaction) -> bool,
    {
        let mut txns: Vec<Transaction> = self
            .store
            .all()
            .iter()
            .filter(|&t| keep(t))
            .cloned()
            .collect();
        txns.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        txns
    }
}
