//! Property-based test generators
//!
//! Proptest strategies for random period data that maintains domain
//! invariants (nonnegative aggregates, cent precision).

use proptest::prelude::*;

use core_kernel::Money;
use domain_journal::{ChargeOffInputs, FinanceIncomeInputs, InsuranceBalances};

/// Strategy for nonnegative amounts in cents
pub fn nonnegative_cents_strategy() -> impl Strategy<Value = i64> {
    0i64..1_000_000_000i64
}

/// Strategy for nonnegative Money values
pub fn nonnegative_money_strategy() -> impl Strategy<Value = Money> {
    nonnegative_cents_strategy().prop_map(Money::from_cents)
}

/// Strategy for Money values of either sign
pub fn money_strategy() -> impl Strategy<Value = Money> {
    (-1_000_000_000i64..1_000_000_000i64).prop_map(Money::from_cents)
}

/// Strategy for month-over-month unearned interest balances
pub fn finance_income_inputs_strategy() -> impl Strategy<Value = FinanceIncomeInputs> {
    (nonnegative_money_strategy(), nonnegative_money_strategy()).prop_map(|(prior, current)| {
        FinanceIncomeInputs {
            prior_unearned_interest: prior,
            current_unearned_interest: current,
        }
    })
}

/// Strategy for per-category unearned insurance balances
pub fn insurance_balances_strategy() -> impl Strategy<Value = InsuranceBalances> {
    (
        nonnegative_money_strategy(),
        nonnegative_money_strategy(),
        nonnegative_money_strategy(),
        nonnegative_money_strategy(),
        nonnegative_money_strategy(),
    )
        .prop_map(|(credit_life, disability, iui, property, auto_vsi)| InsuranceBalances {
            credit_life,
            disability,
            involuntary_unemployment: iui,
            property,
            auto_vsi,
        })
}

/// Strategy for charge-off components that satisfy the identity exactly
pub fn consistent_charge_off_strategy() -> impl Strategy<Value = ChargeOffInputs> {
    (nonnegative_cents_strategy(), nonnegative_cents_strategy()).prop_map(|(net, rebate)| {
        ChargeOffInputs {
            net_charge_off: Money::from_cents(net),
            unearned_interest_rebate: Money::from_cents(rebate),
            gross_charge_off: Money::from_cents(net + rebate),
        }
    })
}
