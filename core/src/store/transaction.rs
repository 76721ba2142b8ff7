//! The transaction record and its closed classification enums.

use crate::error::DeskError;
use crate::types::{MemberId, TransactionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One financial event attributed to a member account.
///
/// Risk score and risk level arrive with the record — the scoring engine
/// lives upstream. `alert_status` is the only field mutated after seeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub member_id: MemberId,
    pub member_name: String,
    pub account_number: String,
    pub amount: f64,
    pub txn_type: TransactionType,
    pub timestamp: DateTime<Utc>,
    pub description: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    /// Model output in [0, 1].
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    /// None until an alert is raised on the transaction.
    #[serde(default)]
    pub alert_status: Option<AlertStatus>,
    #[serde(default)]
    pub flagged_reasons: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Transfer,
    LoanPayment,
    LoanDisbursement,
    Fee,
    Interest,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Deposit          => "deposit",
            Self::Withdrawal       => "withdrawal",
            Self::Transfer         => "transfer",
            Self::LoanPayment      => "loan_payment",
            Self::LoanDisbursement => "loan_disbursement",
            Self::Fee              => "fee",
            Self::Interest         => "interest",
        })
    }
}

/// Coarse risk classification supplied with each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low    => "low",
            Self::Medium => "medium",
            Self::High   => "high",
        })
    }
}

/// Operator-controlled review lifecycle tag on a flagged transaction.
///
/// Transitions are unconstrained — the store records whatever the operator
/// set last. There is no state machine to enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    New,
    Reviewing,
    ResolvedLegitimate,
    ResolvedFraudulent,
    Closed,
}

impl AlertStatus {
    /// True for statuses still waiting on an operator.
    pub fn needs_review(self) -> bool {
        matches!(self, AlertStatus::New | AlertStatus::Reviewing)
    }
}

impl FromStr for AlertStatus {
    type Err = DeskError;

    /// Boundary validation for operator-supplied status strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new"                  => Ok(Self::New),
            "reviewing"            => Ok(Self::Reviewing),
            "resolved_legitimate"  => Ok(Self::ResolvedLegitimate),
            "resolved_fraudulent"  => Ok(Self::ResolvedFraudulent),
            "closed"               => Ok(Self::Closed),
            other => Err(DeskError::InvalidAlertStatus {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::New                => "new",
            Self::Reviewing          => "reviewing",
            Self::ResolvedLegitimate => "resolved_legitimate",
            Self::ResolvedFraudulent => "resolved_fraudulent",
            Self::Closed             => "closed",
        })
    }
}
