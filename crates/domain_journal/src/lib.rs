//! Journal Domain - Monthly Close Entry Generation
//!
//! This crate turns aggregated monthly financial activity for a
//! consumer-finance lender into balanced double-entry journal entries.
//!
//! # Double-Entry Principles
//!
//! Every line carries a nonzero debit or a nonzero credit, never both and
//! never a negative amount. Negative business deltas swap sides and post
//! the absolute value. An entry's balance is a query, not an assertion:
//! imbalance is surfaced by the reconciliation layer, not at construction.
//!
//! # The Ten Entries
//!
//! - **JE-1** Finance income recognition (unearned interest delta)
//! - **JE-2** Insurance premium earnings (five categories)
//! - **JE-3** Loan originations
//! - **JE-4** Collections / payments received
//! - **JE-5** Charge-offs
//! - **JE-6** Bad-debt sale
//! - **JE-7** Credit facility interest accrual
//! - **JE-8** Related-party LOC interest
//! - **JE-9** Allowance for credit losses (always review-flagged)
//! - **JE-10** Recoveries
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_journal::{generators, ChartOfAccounts, FinanceIncomeInputs};
//!
//! let chart = ChartOfAccounts::standard();
//! let je1 = generators::finance_income(chart, &inputs, close_date);
//! assert!(je1.is_balanced());
//! ```

pub mod account;
pub mod entry;
pub mod error;
pub mod generators;
pub mod inputs;
pub mod portfolio;

pub use account::{
    AccountRef, BankPlaceholder, ChartOfAccounts, InsuranceCategory, InsurancePair,
};
pub use entry::{JournalEntry, JournalEntryLine};
pub use error::JournalError;
pub use inputs::{
    AllowanceInputs, ChargeOffInputs, CollectionInputs, DebtSaleInputs,
    FacilityInterestInputs, FinanceIncomeInputs, InsuranceBalances,
    InsuranceEarningsInputs, OriginationInputs, RecoveryInputs,
    RelatedPartyInterestInputs,
};
pub use portfolio::{BranchDirectory, PortfolioDirectory};
