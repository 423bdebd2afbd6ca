//! Aggregated period inputs for the entry generators
//!
//! Each generator takes one explicit input struct of already-aggregated
//! monthly totals. Extraction of these figures from the source registers
//! and statements happens upstream; the engine only consumes decimals.

use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};

use crate::account::InsuranceCategory;

/// JE-1: month-over-month unearned interest balances
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceIncomeInputs {
    pub prior_unearned_interest: Money,
    pub current_unearned_interest: Money,
}

impl FinanceIncomeInputs {
    /// Interest earned during the period; negative means unearned grew net
    pub fn earned(&self) -> Money {
        self.prior_unearned_interest - self.current_unearned_interest
    }
}

/// Unearned balances by insurance category
///
/// An absent category is simply zero; that is a defined default, not
/// error suppression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceBalances {
    pub credit_life: Money,
    pub disability: Money,
    pub involuntary_unemployment: Money,
    pub property: Money,
    pub auto_vsi: Money,
}

impl InsuranceBalances {
    pub fn balance(&self, category: InsuranceCategory) -> Money {
        match category {
            InsuranceCategory::CreditLife => self.credit_life,
            InsuranceCategory::Disability => self.disability,
            InsuranceCategory::InvoluntaryUnemployment => self.involuntary_unemployment,
            InsuranceCategory::Property => self.property,
            InsuranceCategory::AutoVsi => self.auto_vsi,
        }
    }
}

/// JE-2: prior and current unearned insurance balances
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceEarningsInputs {
    pub prior: InsuranceBalances,
    pub current: InsuranceBalances,
}

impl InsuranceEarningsInputs {
    pub fn earned(&self, category: InsuranceCategory) -> Money {
        self.prior.balance(category) - self.current.balance(category)
    }
}

/// JE-3: loan register origination totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginationInputs {
    /// Full contractual note amount originated
    pub note_amount: Money,
    /// Finance charge on pre-computed loans (goes to unearned interest)
    pub finance_charge: Money,
    pub credit_life_premium: Money,
    pub ah_premium: Money,
    /// Net cash disbursed to borrowers
    pub cash_to_borrower: Money,
    /// Balances rolled from a prior loan into a new one
    pub balance_renewed: Money,
}

/// JE-4: collection register totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInputs {
    /// Actual cash deposited
    pub cash_received: Money,
    pub principal: Money,
    pub interest_collected: Money,
    pub interest_rebate: Money,
    /// Old-loan balances paid off by a renewal
    pub balance_renewed: Money,
    pub late_fees: Money,
    pub nsf_fees: Money,
    /// Customer refunds issued
    pub refunds: Money,
    pub insurance_rebates: Money,
    /// Collections on charged-off accounts
    pub recoveries: Money,
}

impl CollectionInputs {
    /// The non-receivable portion of collections: fees, rebates, and
    /// recoveries, net of refunds
    pub fn fees_and_other(&self) -> Money {
        self.late_fees + self.nsf_fees + self.insurance_rebates + self.recoveries - self.refunds
    }

    /// The credit that reduces gross receivable
    pub fn receivable_reduction(&self) -> Money {
        self.cash_received + self.balance_renewed - self.fees_and_other()
    }
}

/// JE-5: charge-off register totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeOffInputs {
    /// Full balance removed from gross receivable
    pub gross_charge_off: Money,
    /// Net P&L expense portion
    pub net_charge_off: Money,
    /// Unearned interest reversed on charged-off loans
    pub unearned_interest_rebate: Money,
}

/// JE-6: debt-sale settlement figures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtSaleInputs {
    /// Wire proceeds received
    pub transfer_amount: Money,
    pub account_count: u32,
    /// Aggregate balance of the accounts sold
    pub balance_sold: Money,
}

/// JE-7: fixed-rate credit facility statement figures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityInterestInputs {
    pub accrued_interest: Money,
    pub ending_balance: Money,
}

/// JE-8: related-party line-of-credit interest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedPartyInterestInputs {
    pub interest_amount: Money,
    pub principal_balance: Money,
}

/// JE-9: allowance for credit losses adjustment
///
/// The adjustment is signed and judgment-based; the target-percentage math
/// lives with the caller, not in the generator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceInputs {
    /// Signed adjustment: positive increases the allowance
    pub adjustment: Money,
    /// Net receivable the target was computed from, for the review note
    pub net_receivable: Money,
    /// Target allowance percentage, for the review note
    pub target_pct: Option<Rate>,
}

impl AllowanceInputs {
    /// Computes the adjustment from a policy target percentage
    ///
    /// `adjustment = target_pct × net_receivable − current_allowance`
    pub fn from_target(net_receivable: Money, target_pct: Rate, current_allowance: Money) -> Self {
        let target_allowance = target_pct.apply(net_receivable);
        Self {
            adjustment: target_allowance - current_allowance,
            net_receivable,
            target_pct: Some(target_pct),
        }
    }
}

/// JE-10: isolated recovery visibility
///
/// Recoveries are also folded into JE-4; a caller using both entries in
/// one period must not post the amount twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryInputs {
    pub amount: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_finance_income_earned_delta() {
        let inputs = FinanceIncomeInputs {
            prior_unearned_interest: Money::new(dec!(50000.00)),
            current_unearned_interest: Money::new(dec!(48000.00)),
        };
        assert_eq!(inputs.earned(), Money::new(dec!(2000.00)));
    }

    #[test]
    fn test_collections_receivable_reduction() {
        let inputs = CollectionInputs {
            cash_received: Money::new(dec!(1000.00)),
            balance_renewed: Money::new(dec!(200.00)),
            late_fees: Money::new(dec!(30.00)),
            nsf_fees: Money::new(dec!(10.00)),
            insurance_rebates: Money::new(dec!(5.00)),
            recoveries: Money::new(dec!(15.00)),
            refunds: Money::new(dec!(20.00)),
            ..Default::default()
        };
        // 1000 + 200 - (30 + 10 + 5 + 15 - 20)
        assert_eq!(inputs.receivable_reduction(), Money::new(dec!(1160.00)));
    }

    #[test]
    fn test_allowance_from_target() {
        let inputs = AllowanceInputs::from_target(
            Money::new(dec!(1000000.00)),
            Rate::from_percentage(dec!(18)),
            Money::new(dec!(150000.00)),
        );
        assert_eq!(inputs.adjustment, Money::new(dec!(30000.00)));
        assert!(inputs.target_pct.is_some());
    }

    #[test]
    fn test_absent_insurance_category_defaults_to_zero() {
        let inputs = InsuranceEarningsInputs {
            prior: InsuranceBalances {
                credit_life: Money::new(dec!(1.28)),
                ..Default::default()
            },
            current: InsuranceBalances::default(),
        };
        assert_eq!(
            inputs.earned(InsuranceCategory::CreditLife),
            Money::new(dec!(1.28))
        );
        assert!(inputs.earned(InsuranceCategory::Property).is_zero());
    }
}
