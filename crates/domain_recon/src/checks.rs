//! Balance reconciliation builders and the fixed validation battery
//!
//! The builders compare engine-side totals against externally supplied
//! reference balances; the validations test internal consistency of the
//! period's data. Everything here records findings instead of raising, so
//! one anomaly never blocks the rest of the report.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use core_kernel::{LoanNumber, Money};
use domain_journal::{
    BranchDirectory, ChargeOffInputs, CollectionInputs, JournalEntry, PortfolioDirectory,
};

use crate::item::{exact_tolerance, standard_tolerance, unearned_tolerance, ReconItem};
use crate::report::{ValidationCheck, ValidationStatus};

/// Reference balances pulled from the external ledger for one period
///
/// Contra-asset balances (accumulated charge-offs, unearned, allowance)
/// are supplied ledger-signed, i.e. negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerBalances {
    pub gross_receivable: Money,
    pub accumulated_charge_offs: Money,
    pub allowance: Money,
    pub unearned_interest: Money,
    pub unearned_insurance: Money,
    pub facility_balance: Money,
    pub accrued_expenses: Money,
}

impl LedgerBalances {
    /// Net loans receivable as the ledger sees it
    ///
    /// Gross plus the (negative) contra balances.
    pub fn net_receivable(&self) -> Money {
        self.gross_receivable
            + self.accumulated_charge_offs
            + self.unearned_interest
            + self.unearned_insurance
            + self.allowance
    }
}

/// Reconciles the servicing system's ending balance to the ledger's net
/// loans receivable (standard 100.00 band)
pub fn net_receivable_check(servicing_balance: Money, ledger: &LedgerBalances) -> ReconItem {
    ReconItem::new(
        "Loans Receivable: Servicing vs Ledger",
        servicing_balance,
        ledger.net_receivable(),
        standard_tolerance(),
    )
}

/// Reconciles the unearned register total to the ledger's unearned
/// interest balance (50.00 band)
///
/// The ledger stores unearned as a negative contra-asset; the register is
/// positive, so the comparison uses the absolute ledger value.
pub fn unearned_interest_check(register_unearned: Money, ledger_unearned: Money) -> ReconItem {
    ReconItem::new(
        "Unearned Interest: Register vs Ledger",
        register_unearned,
        ledger_unearned.abs(),
        unearned_tolerance(),
    )
}

/// Reconciles the facility statement's ending balance to the ledger LOC
/// balance (exact match required)
pub fn facility_balance_check(statement_balance: Money, ledger_facility: Money) -> ReconItem {
    ReconItem::new(
        "Facility Balance: Statement vs Ledger",
        statement_balance,
        ledger_facility,
        exact_tolerance(),
    )
}

/// Validates the charge-off component identity
///
/// `net + unearned_reversed` must equal `gross` within 1.00.
pub fn charge_off_identity_check(inputs: &ChargeOffInputs) -> ValidationCheck {
    let calculated = inputs.net_charge_off + inputs.unearned_interest_rebate;
    let difference = calculated - inputs.gross_charge_off;
    let passed = difference.abs().amount() <= dec!(1.00);

    ValidationCheck::new(
        "Charge-Off Components (Net + Unearned = Gross)",
        if passed {
            ValidationStatus::Pass
        } else {
            ValidationStatus::Fail
        },
        format!(
            "Net {} + Unearned {} = {} vs Gross {}",
            inputs.net_charge_off,
            inputs.unearned_interest_rebate,
            calculated,
            inputs.gross_charge_off
        ),
    )
}

/// Records the collections component breakdown
///
/// Informational only: legitimate period noise (fee waivers) can make the
/// recomposition imprecise without indicating an error.
pub fn collections_breakdown_check(inputs: &CollectionInputs) -> ValidationCheck {
    let recomposed = inputs.principal
        + inputs.interest_collected
        + inputs.late_fees
        + inputs.nsf_fees
        + inputs.recoveries
        - inputs.refunds
        + inputs.insurance_rebates;

    ValidationCheck::new(
        "Collections Breakdown",
        ValidationStatus::Info,
        format!(
            "Principal {} + Interest {} + Fees {} + Recoveries {} - Refunds {} \
             + Ins Rebates {} = {} (cash received {})",
            inputs.principal,
            inputs.interest_collected,
            inputs.late_fees + inputs.nsf_fees,
            inputs.recoveries,
            inputs.refunds,
            inputs.insurance_rebates,
            recomposed,
            inputs.cash_received
        ),
    )
}

/// Validates that every generated entry with lines balances
///
/// Imbalance is recorded, not thrown: a single bad entry must not abort
/// the run. Returns one FAIL per unbalanced entry, or a single PASS when
/// all entries balance.
pub fn entry_balance_checks(entries: &[JournalEntry]) -> Vec<ValidationCheck> {
    let mut checks: Vec<ValidationCheck> = entries
        .iter()
        .filter(|je| !je.lines.is_empty() && !je.is_balanced())
        .map(|je| {
            ValidationCheck::new(
                format!("{} Balance Check", je.number),
                ValidationStatus::Fail,
                format!(
                    "Debits {} != Credits {}",
                    je.total_debits(),
                    je.total_credits()
                ),
            )
        })
        .collect();

    if checks.is_empty() {
        checks.push(ValidationCheck::new(
            "All Entries Balanced",
            ValidationStatus::Pass,
            "All journal entries have matching debits and credits",
        ));
    }
    checks
}

/// Validates that originated loan numbers contain no duplicates
pub fn duplicate_loan_check(loan_numbers: &[LoanNumber]) -> ValidationCheck {
    let mut seen = BTreeSet::new();
    let mut duplicates = BTreeSet::new();
    for number in loan_numbers {
        if !seen.insert(number) {
            duplicates.insert(number.clone());
        }
    }

    if duplicates.is_empty() {
        ValidationCheck::new(
            "No Duplicate Loan Numbers",
            ValidationStatus::Pass,
            "All loan numbers unique",
        )
    } else {
        let listed: Vec<&str> = duplicates.iter().map(LoanNumber::as_str).collect();
        ValidationCheck::new(
            "No Duplicate Loan Numbers",
            ValidationStatus::Fail,
            format!("Duplicates: {}", listed.join(", ")),
        )
    }
}

/// Validates portfolio classification codes against the directory
///
/// Unknown codes are recorded, never silently dropped. Zero is the
/// unassigned code and is always valid.
pub fn portfolio_code_check(directory: &PortfolioDirectory, codes: &[u32]) -> ValidationCheck {
    let invalid: BTreeSet<u32> = codes
        .iter()
        .copied()
        .filter(|code| !directory.is_valid(*code))
        .collect();

    classification_result("Valid Portfolio Codes", invalid)
}

/// Validates branch classification codes against the directory
pub fn branch_code_check(directory: &BranchDirectory, codes: &[u32]) -> ValidationCheck {
    let invalid: BTreeSet<u32> = codes
        .iter()
        .copied()
        .filter(|code| !directory.is_valid(*code))
        .collect();

    classification_result("Valid Branch Codes", invalid)
}

fn classification_result(name: &str, invalid: BTreeSet<u32>) -> ValidationCheck {
    if invalid.is_empty() {
        ValidationCheck::new(name, ValidationStatus::Pass, "All codes valid")
    } else {
        let listed: Vec<String> = invalid.iter().map(u32::to_string).collect();
        ValidationCheck::new(
            name,
            ValidationStatus::Fail,
            format!("Invalid codes: {}", listed.join(", ")),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_net_receivable_combines_contras() {
        let ledger = LedgerBalances {
            gross_receivable: Money::new(dec!(35243907.50)),
            accumulated_charge_offs: Money::new(dec!(-33313354.46)),
            allowance: Money::new(dec!(-328194.02)),
            unearned_interest: Money::new(dec!(-55038.50)),
            unearned_insurance: Money::new(dec!(-1.99)),
            ..Default::default()
        };
        assert_eq!(ledger.net_receivable(), Money::new(dec!(1547318.53)));
    }

    #[test]
    fn test_charge_off_identity_pass_and_fail() {
        // difference 0.50, within the 1.00 band
        let check = charge_off_identity_check(&ChargeOffInputs {
            gross_charge_off: Money::new(dec!(9500.50)),
            net_charge_off: Money::new(dec!(9000.00)),
            unearned_interest_rebate: Money::new(dec!(500.00)),
        });
        assert_eq!(check.status, ValidationStatus::Pass);

        // difference 2.00
        let check = charge_off_identity_check(&ChargeOffInputs {
            gross_charge_off: Money::new(dec!(9502.00)),
            net_charge_off: Money::new(dec!(9000.00)),
            unearned_interest_rebate: Money::new(dec!(500.00)),
        });
        assert_eq!(check.status, ValidationStatus::Fail);
        assert!(check.detail.contains("$9500.00"));
    }

    #[test]
    fn test_collections_breakdown_is_informational() {
        let check = collections_breakdown_check(&CollectionInputs::default());
        assert_eq!(check.status, ValidationStatus::Info);
    }

    #[test]
    fn test_duplicate_loans_listed_once() {
        let numbers = vec![
            LoanNumber::new("L-1"),
            LoanNumber::new("L-2"),
            LoanNumber::new("L-1"),
            LoanNumber::new("L-1"),
        ];
        let check = duplicate_loan_check(&numbers);
        assert_eq!(check.status, ValidationStatus::Fail);
        assert_eq!(check.detail, "Duplicates: L-1");

        let unique = vec![LoanNumber::new("L-1"), LoanNumber::new("L-2")];
        assert_eq!(duplicate_loan_check(&unique).status, ValidationStatus::Pass);
    }

    #[test]
    fn test_portfolio_codes_zero_always_valid() {
        let dir = PortfolioDirectory::standard();
        let check = portfolio_code_check(dir, &[0, 1, 5, 13]);
        assert_eq!(check.status, ValidationStatus::Pass);

        let check = portfolio_code_check(dir, &[0, 2, 99, 99]);
        assert_eq!(check.status, ValidationStatus::Fail);
        assert_eq!(check.detail, "Invalid codes: 2, 99");
    }
}
