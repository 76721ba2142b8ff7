use crate::types::TransactionId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Transaction '{id}' not found")]
    TransactionNotFound { id: TransactionId },

    #[error("Duplicate transaction id '{id}' in seed data")]
    DuplicateTransaction { id: TransactionId },

    #[error("Invalid alert status: '{value}'")]
    InvalidAlertStatus { value: String },
}

pub type DeskResult<T> = Result<T, DeskError>;
