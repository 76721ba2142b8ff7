//! Shared primitive types used across the entire crate.

/// A stable, unique identifier for a transaction.
pub type TransactionId = String;

/// The member account a transaction is attributed to.
pub type MemberId = String;
