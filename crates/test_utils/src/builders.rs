//! Test data builders
//!
//! Builder patterns for constructing generator inputs with sensible
//! defaults, so tests specify only the fields they care about.

use rust_decimal_macros::dec;

use core_kernel::Money;
use domain_journal::{CollectionInputs, OriginationInputs};

/// Builder for collection register inputs
pub struct CollectionInputsBuilder {
    inputs: CollectionInputs,
}

impl Default for CollectionInputsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectionInputsBuilder {
    /// A quiet month: cash in, no fees, renewals, or refunds
    pub fn new() -> Self {
        Self {
            inputs: CollectionInputs {
                cash_received: Money::new(dec!(100000.00)),
                principal: Money::new(dec!(60000.00)),
                interest_collected: Money::new(dec!(40000.00)),
                ..Default::default()
            },
        }
    }

    pub fn cash_received(mut self, amount: Money) -> Self {
        self.inputs.cash_received = amount;
        self
    }

    pub fn balance_renewed(mut self, amount: Money) -> Self {
        self.inputs.balance_renewed = amount;
        self
    }

    pub fn late_fees(mut self, amount: Money) -> Self {
        self.inputs.late_fees = amount;
        self
    }

    pub fn nsf_fees(mut self, amount: Money) -> Self {
        self.inputs.nsf_fees = amount;
        self
    }

    pub fn refunds(mut self, amount: Money) -> Self {
        self.inputs.refunds = amount;
        self
    }

    pub fn insurance_rebates(mut self, amount: Money) -> Self {
        self.inputs.insurance_rebates = amount;
        self
    }

    pub fn recoveries(mut self, amount: Money) -> Self {
        self.inputs.recoveries = amount;
        self
    }

    pub fn build(self) -> CollectionInputs {
        self.inputs
    }
}

/// Builder for loan register origination inputs
pub struct OriginationInputsBuilder {
    inputs: OriginationInputs,
}

impl Default for OriginationInputsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginationInputsBuilder {
    /// A balanced origination month: note = charge + premiums + cash + renewed
    pub fn new() -> Self {
        Self {
            inputs: OriginationInputs {
                note_amount: Money::new(dec!(500000.00)),
                finance_charge: Money::new(dec!(90000.00)),
                credit_life_premium: Money::new(dec!(4000.00)),
                ah_premium: Money::new(dec!(3000.00)),
                cash_to_borrower: Money::new(dec!(350000.00)),
                balance_renewed: Money::new(dec!(53000.00)),
            },
        }
    }

    pub fn note_amount(mut self, amount: Money) -> Self {
        self.inputs.note_amount = amount;
        self
    }

    pub fn finance_charge(mut self, amount: Money) -> Self {
        self.inputs.finance_charge = amount;
        self
    }

    pub fn cash_to_borrower(mut self, amount: Money) -> Self {
        self.inputs.cash_to_borrower = amount;
        self
    }

    pub fn balance_renewed(mut self, amount: Money) -> Self {
        self.inputs.balance_renewed = amount;
        self
    }

    pub fn build(self) -> OriginationInputs {
        self.inputs
    }
}
