//! The ten monthly close entry generators
//!
//! Each generator is a pure function: aggregated period inputs plus an
//! accounting date in, one journal entry out. No I/O, no shared state,
//! no recoverable failure mode. Zero-valued components are omitted as
//! lines; negative business deltas swap sides and post absolute values.
//!
//! Anomalies (unearned growing net, allowance adjustments) are recorded
//! via `review_required` and `notes`, never raised, so one odd category
//! cannot block the rest of the close.

use chrono::NaiveDate;
use core_kernel::Money;
use tracing::debug;

use crate::account::{self, BankPlaceholder, ChartOfAccounts, InsuranceCategory};
use crate::entry::JournalEntry;
use crate::inputs::{
    AllowanceInputs, ChargeOffInputs, CollectionInputs, DebtSaleInputs,
    FacilityInterestInputs, FinanceIncomeInputs, InsuranceEarningsInputs,
    OriginationInputs, RecoveryInputs, RelatedPartyInterestInputs,
};

/// JE-1: Finance income recognition (earned interest)
///
/// Earned = prior month unearned − current month unearned. New
/// originations add to unearned in JE-3, so the delta here reflects the
/// earning process. A negative delta (unearned grew net of earning) is
/// booked reversed and flagged for review.
pub fn finance_income(
    chart: &ChartOfAccounts,
    inputs: &FinanceIncomeInputs,
    date: NaiveDate,
) -> JournalEntry {
    let earned = inputs.earned();

    let mut je = JournalEntry::new(
        "JE-1",
        "Finance Income Recognition - Earned Interest",
        date,
        "Unearned Register",
    );

    if earned.is_positive() {
        je.debit(
            chart,
            account::UNEARNED_PRECOMPUTED_INTEREST,
            earned,
            "Decrease in unearned interest (earning)",
        );
        je.credit(
            chart,
            account::FINANCE_INCOME,
            earned,
            "Earned interest revenue",
        );
    } else if earned.is_negative() {
        je.debit(
            chart,
            account::FINANCE_INCOME,
            earned.abs(),
            "Adjustment - unearned increase exceeded earning",
        );
        je.credit(
            chart,
            account::UNEARNED_PRECOMPUTED_INTEREST,
            earned.abs(),
            "Increase in unearned interest",
        );
        je.review_required = true;
        je.notes =
            "Unearned interest increased net. Verify new originations against earnings."
                .to_string();
    }

    debug!(entry = %je.number, earned = %earned, "generated finance income entry");
    je
}

/// JE-2: Insurance premium earnings
///
/// Each of the five categories is processed independently; a category
/// produces lines only when its earned delta is at least one cent.
pub fn insurance_earnings(
    chart: &ChartOfAccounts,
    inputs: &InsuranceEarningsInputs,
    date: NaiveDate,
) -> JournalEntry {
    let mut je = JournalEntry::new(
        "JE-2",
        "Insurance Premium Earnings",
        date,
        "Unearned Register",
    );

    for category in InsuranceCategory::ALL {
        let earned = inputs.earned(category);
        if earned.abs() < Money::from_cents(1) {
            continue;
        }

        let pair = chart.insurance_pair(category);
        if earned.is_positive() {
            je.debit(
                chart,
                pair.unearned,
                earned,
                format!("Earned {category} premium"),
            );
            je.credit(
                chart,
                pair.earned,
                earned,
                format!("{category} commission earned"),
            );
        } else {
            je.debit(
                chart,
                pair.earned,
                earned.abs(),
                format!("Reverse {category} over-earned"),
            );
            je.credit(
                chart,
                pair.unearned,
                earned.abs(),
                format!("Increase unearned {category}"),
            );
        }
    }

    je
}

/// JE-3: Loan originations
///
/// Gross receivable is debited for the full note amount and credited again
/// for the renewed-balance total; the same account appears on both sides
/// on purpose, netting out balances rolled from a prior loan.
pub fn originations(
    chart: &ChartOfAccounts,
    inputs: &OriginationInputs,
    date: NaiveDate,
) -> JournalEntry {
    let mut je = JournalEntry::new("JE-3", "Loan Originations", date, "Loan Register");

    if inputs.note_amount.is_positive() {
        je.debit(
            chart,
            account::LOANS_RECEIVABLE_GROSS,
            inputs.note_amount,
            "New loan originations - note amount",
        );
    }
    if inputs.finance_charge.is_positive() {
        je.credit(
            chart,
            account::UNEARNED_PRECOMPUTED_INTEREST,
            inputs.finance_charge,
            "Unearned interest on new loans",
        );
    }
    if inputs.credit_life_premium.is_positive() {
        je.credit(
            chart,
            account::UNEARNED_LIFE_INS,
            inputs.credit_life_premium,
            "Unearned life insurance on new loans",
        );
    }
    if inputs.ah_premium.is_positive() {
        je.credit(
            chart,
            account::UNEARNED_AH_INS,
            inputs.ah_premium,
            "Unearned A&H insurance on new loans",
        );
    }
    if inputs.cash_to_borrower.is_positive() {
        je.credit(
            chart,
            BankPlaceholder::Funding,
            inputs.cash_to_borrower,
            "Cash disbursed to borrowers",
        );
    }
    if inputs.balance_renewed.is_positive() {
        je.credit(
            chart,
            account::LOANS_RECEIVABLE_GROSS,
            inputs.balance_renewed,
            "Balance renewed on renewal loans (reduces net new receivable)",
        );
    }

    je
}

/// JE-4: Collections / payments received
///
/// Interest collected reduces the gross receivable here; the matching
/// earned-interest recognition lives in JE-1. The renewal debit offsets
/// the renewal credit booked in JE-3 on the old loan.
pub fn collections(
    chart: &ChartOfAccounts,
    inputs: &CollectionInputs,
    date: NaiveDate,
) -> JournalEntry {
    let mut je = JournalEntry::new(
        "JE-4",
        "Collections / Payments Received",
        date,
        "Collection Register",
    );

    if inputs.cash_received.is_positive() {
        je.debit(
            chart,
            BankPlaceholder::Payment,
            inputs.cash_received,
            "Cash collections received",
        );
    }
    if inputs.balance_renewed.is_positive() {
        je.debit(
            chart,
            account::LOANS_RECEIVABLE_GROSS,
            inputs.balance_renewed,
            "Renewal balances (old loan paid by new loan)",
        );
    }

    let receivable_reduction = inputs.receivable_reduction();
    if receivable_reduction.is_positive() {
        je.credit(
            chart,
            account::LOANS_RECEIVABLE_GROSS,
            receivable_reduction,
            format!(
                "Loan balance reduction (principal {} + interest {})",
                inputs.principal, inputs.interest_collected
            ),
        );
    }

    if inputs.late_fees.is_positive() {
        je.credit(
            chart,
            account::DELINQUENT_NSF_FEES,
            inputs.late_fees,
            "Late fees collected",
        );
    }
    if inputs.nsf_fees.is_positive() {
        je.credit(
            chart,
            account::DELINQUENT_NSF_FEES,
            inputs.nsf_fees,
            "NSF fees collected",
        );
    }
    if inputs.refunds.is_positive() {
        je.debit(
            chart,
            account::REFUNDS,
            inputs.refunds,
            "Customer refunds issued",
        );
    }
    if inputs.insurance_rebates.is_positive() {
        je.credit(
            chart,
            account::EARNED_INS_REBATES,
            inputs.insurance_rebates,
            "Insurance premium rebates",
        );
    }
    if inputs.recoveries.is_positive() {
        je.credit(
            chart,
            account::CUSTOMER_RECOVERIES,
            inputs.recoveries,
            "Collections on charged-off accounts",
        );
    }

    debug!(
        entry = %je.number,
        cash = %inputs.cash_received,
        receivable_reduction = %receivable_reduction,
        "generated collections entry"
    );
    je
}

/// JE-5: Monthly charge-offs
///
/// The generator posts whatever components it is given; the identity
/// `net + unearned_rebate ≈ gross` is validated by the reconciliation
/// layer, not enforced here.
pub fn charge_offs(
    chart: &ChartOfAccounts,
    inputs: &ChargeOffInputs,
    date: NaiveDate,
) -> JournalEntry {
    let mut je = JournalEntry::new("JE-5", "Monthly Charge-Offs", date, "Charge Off Register");

    if inputs.net_charge_off.is_positive() {
        je.debit(
            chart,
            account::BAD_DEBT_WRITEOFFS,
            inputs.net_charge_off,
            "Net charge-off expense (P&L impact)",
        );
    }
    if inputs.unearned_interest_rebate.is_positive() {
        je.debit(
            chart,
            account::UNEARNED_PRECOMPUTED_INTEREST,
            inputs.unearned_interest_rebate,
            "Reverse unearned interest on charged-off loans",
        );
    }
    if inputs.gross_charge_off.is_positive() {
        je.credit(
            chart,
            account::ACCUMULATED_CHARGE_OFFS,
            inputs.gross_charge_off,
            "Record charge-offs in contra account",
        );
    }

    je
}

/// JE-6: Bad-debt sale settlement
pub fn debt_sale(
    chart: &ChartOfAccounts,
    inputs: &DebtSaleInputs,
    date: NaiveDate,
) -> JournalEntry {
    let mut je = JournalEntry::new(
        "JE-6",
        format!(
            "Bad Debt Sale ({} accounts, {} balance)",
            inputs.account_count, inputs.balance_sold
        ),
        date,
        "Debt Sale Closing Statement",
    );

    if inputs.transfer_amount.is_positive() {
        je.debit(
            chart,
            BankPlaceholder::Operating,
            inputs.transfer_amount,
            format!("Sale proceeds ({} accts)", inputs.account_count),
        );
        je.credit(
            chart,
            account::SALE_OF_BAD_DEBT,
            inputs.transfer_amount,
            "Revenue from bad debt sale",
        );
    }

    je
}

/// JE-7: Fixed-rate credit facility interest accrual
pub fn facility_interest(
    chart: &ChartOfAccounts,
    inputs: &FacilityInterestInputs,
    date: NaiveDate,
) -> JournalEntry {
    let mut je = JournalEntry::new(
        "JE-7",
        format!(
            "Credit Facility Interest Accrual (balance: {})",
            inputs.ending_balance
        ),
        date,
        "Facility Statement",
    );

    if inputs.accrued_interest.is_positive() {
        je.debit(
            chart,
            account::INTEREST_EXPENSE,
            inputs.accrued_interest,
            "Facility monthly interest",
        );
        je.credit(
            chart,
            account::ACCRUED_EXPENSES,
            inputs.accrued_interest,
            "Accrued facility interest payable",
        );
    }

    je
}

/// JE-8: Related-party line-of-credit interest
///
/// The bank leg is auto-debited from the related party's DDA, so the
/// credit goes to a bank placeholder rather than an accrual.
pub fn related_party_interest(
    chart: &ChartOfAccounts,
    inputs: &RelatedPartyInterestInputs,
    date: NaiveDate,
) -> JournalEntry {
    let mut je = JournalEntry::new(
        "JE-8",
        format!(
            "Related Party LOC Interest (balance: {})",
            inputs.principal_balance
        ),
        date,
        "Related Party Invoice",
    );

    if inputs.interest_amount.is_positive() {
        je.debit(
            chart,
            account::RELATED_PARTY_INTEREST,
            inputs.interest_amount,
            "Related party LOC interest",
        );
        je.credit(
            chart,
            BankPlaceholder::RelatedParty,
            inputs.interest_amount,
            "Auto-debited from DDA",
        );
    }

    je
}

/// JE-9: Allowance for credit losses adjustment
///
/// Always flagged for review: the adjustment is judgment-based, unlike
/// the mechanical entries.
pub fn allowance_adjustment(
    chart: &ChartOfAccounts,
    inputs: &AllowanceInputs,
    date: NaiveDate,
) -> JournalEntry {
    let mut je = JournalEntry::new(
        "JE-9",
        "Allowance for Credit Losses Adjustment",
        date,
        "Management Estimate",
    );
    je.review_required = true;
    je.notes = match inputs.target_pct {
        Some(pct) => format!(
            "Net receivable: {}. Target allowance: {}. \
             Judgment-based entry requiring management review.",
            inputs.net_receivable, pct
        ),
        None => format!(
            "Net receivable: {}. \
             Judgment-based entry requiring management review.",
            inputs.net_receivable
        ),
    };

    if inputs.adjustment.is_positive() {
        je.debit(
            chart,
            account::ALLOWANCE_ADJUSTMENT,
            inputs.adjustment,
            "Provision for credit losses",
        );
        je.credit(
            chart,
            account::ALLOWANCE_CREDIT_LOSSES,
            inputs.adjustment,
            "Increase allowance balance",
        );
    } else if inputs.adjustment.is_negative() {
        je.debit(
            chart,
            account::ALLOWANCE_CREDIT_LOSSES,
            inputs.adjustment.abs(),
            "Release excess allowance",
        );
        je.credit(
            chart,
            account::ALLOWANCE_ADJUSTMENT,
            inputs.adjustment.abs(),
            "Allowance release (benefit)",
        );
    }

    je
}

/// JE-10: Recoveries on charged-off accounts
///
/// Recoveries also flow through JE-4's credit component; callers using
/// both entries in one period must not post the amount twice.
pub fn recoveries(
    chart: &ChartOfAccounts,
    inputs: &RecoveryInputs,
    date: NaiveDate,
) -> JournalEntry {
    let mut je = JournalEntry::new(
        "JE-10",
        "Recoveries on Charged-Off Accounts",
        date,
        "Collection Register (Recovery column)",
    );

    if inputs.amount.is_positive() {
        je.debit(
            chart,
            BankPlaceholder::Payment,
            inputs.amount,
            "Cash recovered on charged-off accounts",
        );
        je.credit(
            chart,
            account::CUSTOMER_RECOVERIES,
            inputs.amount,
            "Recovery revenue",
        );
    }

    je
}
