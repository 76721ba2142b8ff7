//! frauddesk-core — the query and metrics core of the fraud desk dashboard.
//!
//! RULE: The store owns the canonical transaction records.
//! The dashboard service is the only read/command surface above it;
//! the presentation layer never touches the store directly.

pub mod dashboard_service;
pub mod error;
pub mod seed;
pub mod store;
pub mod types;
