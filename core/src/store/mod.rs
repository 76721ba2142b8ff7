//! In-memory transaction store.
//!
//! RULE: Only the store touches the record collection.
//! The dashboard service calls store methods — it never reaches into
//! the records directly.

mod transaction;

pub use transaction::{AlertStatus, RiskLevel, Transaction, TransactionType};

use crate::error::{DeskError, DeskResult};
use std::collections::HashMap;

/// Canonical mapping from transaction id to record.
///
/// Records keep their seed order. The derived views sort with a stable
/// sort, so equal timestamps resolve to this order.
#[derive(Debug)]
pub struct TransactionStore {
    records: Vec<Transaction>,
    index: HashMap<String, usize>,
}

impl TransactionStore {
    /// Build a store from a seed list. Seeding happens once at startup;
    /// duplicate ids are rejected and nothing inserts afterwards.
    pub fn from_seed(seed: Vec<Transaction>) -> DeskResult<Self> {
        let mut index = HashMap::with_capacity(seed.len());
        for (pos, txn) in seed.iter().enumerate() {
            if index.insert(txn.id.clone(), pos).is_some() {
                return Err(DeskError::DuplicateTransaction {
                    id: txn.id.clone(),
                });
            }
        }
        log::debug!("store seeded with {} transactions", seed.len());
        Ok(Self {
            records: seed,
            index,
        })
    }

    /// Look up one transaction by id. No side effects.
    pub fn get(&self, id: &str) -> DeskResult<&Transaction> {
        self.index
            .get(id)
            .map(|&pos| &self.records[pos])
            .ok_or_else(|| DeskError::TransactionNotFound { id: id.to_string() })
    }

    /// Overwrite the alert status of `id` in place and return the updated
    /// record. An unknown id leaves the store unchanged. This is the only
    /// mutation the store supports.
    pub fn update_alert_status(
        &mut self,
        id: &str,
        status: AlertStatus,
    ) -> DeskResult<Transaction> {
        let pos = *self
            .index
            .get(id)
            .ok_or_else(|| DeskError::TransactionNotFound { id: id.to_string() })?;
        let txn = &mut self.records[pos];
        log::info!("alert status updated: txn={} status={}", txn.id, status);
        txn.alert_status = Some(status);
        Ok(txn.clone())
    }

    /// All records in seed order. Display ordering is the dashboard
    /// service's job.
    pub fn all(&self) -> &[Transaction] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
