//! Pre-built test fixtures
//!
//! Ready-to-use period data with magnitudes resembling a real close month.
//! Designed to be consistent and predictable across the test suite.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{LoanNumber, Money, Rate};
use domain_journal::{
    AllowanceInputs, ChargeOffInputs, CollectionInputs, DebtSaleInputs, FacilityInterestInputs,
    FinanceIncomeInputs, InsuranceBalances, InsuranceEarningsInputs, OriginationInputs,
    RecoveryInputs, RelatedPartyInterestInputs,
};
use domain_recon::LedgerBalances;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    pub fn hundred() -> Money {
        Money::new(dec!(100.00))
    }

    pub fn cents(n: i64) -> Money {
        Money::from_cents(n)
    }
}

/// Fixture for the accounting date
pub struct PeriodFixtures;

impl PeriodFixtures {
    /// The standard close date used across tests (Jan 31, 2026)
    pub fn close_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 31).expect("valid date")
    }

    pub fn period_label() -> &'static str {
        "January 2026"
    }
}

/// Fixture for per-generator period inputs
pub struct InputFixtures;

impl InputFixtures {
    pub fn finance_income() -> FinanceIncomeInputs {
        FinanceIncomeInputs {
            prior_unearned_interest: Money::new(dec!(50000.00)),
            current_unearned_interest: Money::new(dec!(48000.00)),
        }
    }

    pub fn insurance_earnings() -> InsuranceEarningsInputs {
        InsuranceEarningsInputs {
            prior: InsuranceBalances {
                credit_life: Money::new(dec!(120.50)),
                disability: Money::new(dec!(80.25)),
                ..Default::default()
            },
            current: InsuranceBalances {
                credit_life: Money::new(dec!(100.00)),
                disability: Money::new(dec!(85.25)),
                ..Default::default()
            },
        }
    }

    pub fn originations() -> OriginationInputs {
        OriginationInputs {
            note_amount: Money::new(dec!(500000.00)),
            finance_charge: Money::new(dec!(90000.00)),
            credit_life_premium: Money::new(dec!(4000.00)),
            ah_premium: Money::new(dec!(3000.00)),
            cash_to_borrower: Money::new(dec!(350000.00)),
            balance_renewed: Money::new(dec!(53000.00)),
        }
    }

    pub fn collections() -> CollectionInputs {
        CollectionInputs {
            cash_received: Money::new(dec!(400000.00)),
            principal: Money::new(dec!(240000.00)),
            interest_collected: Money::new(dec!(159298.55)),
            interest_rebate: Money::new(dec!(1200.00)),
            balance_renewed: Money::new(dec!(53000.00)),
            late_fees: Money::new(dec!(2500.00)),
            nsf_fees: Money::new(dec!(350.00)),
            refunds: Money::new(dec!(800.00)),
            insurance_rebates: Money::new(dec!(450.00)),
            recoveries: Money::new(dec!(1200.00)),
        }
    }

    pub fn charge_offs() -> ChargeOffInputs {
        ChargeOffInputs {
            gross_charge_off: Money::new(dec!(9500.00)),
            net_charge_off: Money::new(dec!(9000.00)),
            unearned_interest_rebate: Money::new(dec!(500.00)),
        }
    }

    pub fn debt_sale() -> DebtSaleInputs {
        DebtSaleInputs {
            transfer_amount: Money::new(dec!(25000.00)),
            account_count: 412,
            balance_sold: Money::new(dec!(610000.00)),
        }
    }

    pub fn facility_interest() -> FacilityInterestInputs {
        FacilityInterestInputs {
            accrued_interest: Money::new(dec!(14500.75)),
            ending_balance: Money::new(dec!(1591414.81)),
        }
    }

    pub fn related_party_interest() -> RelatedPartyInterestInputs {
        RelatedPartyInterestInputs {
            interest_amount: Money::new(dec!(5200.10)),
            principal_balance: Money::new(dec!(900000.00)),
        }
    }

    /// Allowance trued up to an 18% target on the month-end net receivable
    pub fn allowance() -> AllowanceInputs {
        AllowanceInputs::from_target(
            Money::new(dec!(1824411.17)),
            Rate::from_percentage(dec!(18)),
            Money::new(dec!(328194.02)),
        )
    }

    pub fn recoveries() -> RecoveryInputs {
        RecoveryInputs {
            amount: Money::new(dec!(1200.00)),
        }
    }
}

/// Fixture for external ledger reference balances
pub struct LedgerFixtures;

impl LedgerFixtures {
    /// Month-end balances as the remote ledger reports them
    /// (contra balances negative)
    pub fn month_end() -> LedgerBalances {
        LedgerBalances {
            gross_receivable: Money::new(dec!(35243907.50)),
            accumulated_charge_offs: Money::new(dec!(-33313354.46)),
            allowance: Money::new(dec!(-328194.02)),
            unearned_interest: Money::new(dec!(-55038.50)),
            unearned_insurance: Money::new(dec!(-1.99)),
            facility_balance: Money::new(dec!(1591414.81)),
            accrued_expenses: Money::new(dec!(95349.58)),
        }
    }
}

/// Fixture for loan identifiers
pub struct LoanFixtures;

impl LoanFixtures {
    pub fn unique_loans() -> Vec<LoanNumber> {
        ["NLS-104522", "NLS-104523", "NLS-104524"]
            .into_iter()
            .map(LoanNumber::new)
            .collect()
    }

    pub fn loans_with_duplicate() -> Vec<LoanNumber> {
        ["NLS-104522", "NLS-104523", "NLS-104522"]
            .into_iter()
            .map(LoanNumber::new)
            .collect()
    }
}
