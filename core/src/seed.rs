//! Seed catalog — the transaction records loaded once at startup.
//!
//! The reference deployment ships a fixed demonstration set under
//! data/transactions/. A production deployment would put a real feed
//! behind the same loader.

use crate::store::{AlertStatus, RiskLevel, Transaction, TransactionType};
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct SeedFile {
    transactions: Vec<Transaction>,
}

pub struct SeedCatalog;

impl SeedCatalog {
    /// Load from the data/ directory.
    /// In tests, use SeedCatalog::default_test().
    pub fn load(data_dir: &str) -> anyhow::Result<Vec<Transaction>> {
        let path = format!("{data_dir}/transactions/seed_transactions.json");
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let file: SeedFile = serde_json::from_str(&content)?;
        Ok(file.transactions)
    }

    /// Small fixed seed for tests: one high-risk alert, one alert under
    /// review, one clean low-risk transfer.
    pub fn default_test() -> Vec<Transaction> {
        vec![
            Transaction {
                id: "tx-100".into(),
                member_id: "m-2001".into(),
                member_name: "Nora Brennan".into(),
                account_number: "2001-1111".into(),
                amount: 4200.0,
                txn_type: TransactionType::Deposit,
                timestamp: ts(11, 30),
                description: "Cash deposit".into(),
                location: Some("Dublin Branch".into()),
                device_id: Some("ATM-014".into()),
                ip_address: None,
                risk_score: 0.81,
                risk_level: RiskLevel::High,
                alert_status: Some(AlertStatus::New),
                flagged_reasons: vec!["Unusual large deposit".into()],
            },
            Transaction {
                id: "tx-101".into(),
                member_id: "m-2002".into(),
                member_name: "Declan Hughes".into(),
                account_number: "2002-2222".into(),
                amount: 950.0,
                txn_type: TransactionType::Withdrawal,
                timestamp: ts(10, 15),
                description: "ATM withdrawal".into(),
                location: Some("Cork Branch".into()),
                device_id: Some("ATM-007".into()),
                ip_address: None,
                risk_score: 0.41,
                risk_level: RiskLevel::Medium,
                alert_status: Some(AlertStatus::Reviewing),
                flagged_reasons: vec!["Withdrawal outside usual pattern".into()],
            },
            Transaction {
                id: "tx-102".into(),
                member_id: "m-2003".into(),
                member_name: "Orla Keane".into(),
                account_number: "2003-3333".into(),
                amount: 300.0,
                txn_type: TransactionType::Transfer,
                timestamp: ts(9, 0),
                description: "Online transfer".into(),
                location: Some("Online".into()),
                device_id: None,
                ip_address: Some("10.20.30.40".into()),
                risk_score: 0.08,
                risk_level: RiskLevel::Low,
                alert_status: None,
                flagged_reasons: vec![],
            },
        ]
    }
}

/// Fixed reference day for the test seed.
fn ts(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 6, hour, min, 0).unwrap()
}
