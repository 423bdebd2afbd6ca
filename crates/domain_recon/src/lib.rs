//! Reconciliation Domain - Close Validation
//!
//! Compares the engine's computed totals against externally supplied
//! reference balances with tolerance-banded PASS/WARNING/FAIL
//! classification, and runs a fixed battery of internal consistency
//! validations (entry balance, component-sum identities, referential
//! validity of classification codes, duplicate detection).
//!
//! Business-rule anomalies are never thrown here; they become structured
//! findings on the [`ReconciliationReport`], so one failure never blocks
//! the rest of the period's checks.

pub mod checks;
pub mod item;
pub mod report;
pub mod rollforward;

pub use checks::{
    branch_code_check, charge_off_identity_check, collections_breakdown_check,
    duplicate_loan_check, entry_balance_checks, facility_balance_check,
    net_receivable_check, portfolio_code_check, unearned_interest_check, LedgerBalances,
};
pub use item::{exact_tolerance, standard_tolerance, unearned_tolerance, ReconItem, ReconStatus};
pub use report::{ReconciliationReport, ValidationCheck, ValidationStatus};
pub use rollforward::RollForward;
