//! Journal domain errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the journal domain
///
/// These guard the line invariant at the model boundary. The entry
/// generators never trigger them: a generator represents a negative
/// business delta by swapping sides and posting the absolute value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JournalError {
    /// A line amount was negative
    #[error("Negative line amount for account {account}: {amount}")]
    NegativeLineAmount { account: String, amount: Decimal },

    /// A single line carried both a nonzero debit and a nonzero credit
    #[error("Line for account {0} carries both a debit and a credit")]
    DebitAndCredit(String),
}
