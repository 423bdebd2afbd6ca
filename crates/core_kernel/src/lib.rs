//! Core Kernel - Foundational types for the monthly close engine
//!
//! This crate provides the building blocks used across the journal and
//! reconciliation domains:
//! - Money with precise 2-decimal half-up arithmetic
//! - Percentage rates
//! - Common identifiers

pub mod error;
pub mod identifiers;
pub mod money;

pub use error::CoreError;
pub use identifiers::{JournalEntryId, LoanNumber, ReportId};
pub use money::{Money, MoneyError, Rate};
