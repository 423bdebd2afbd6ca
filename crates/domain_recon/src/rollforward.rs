//! Roll-forward reconciliation
//!
//! Proves `beginning + additions − subtractions = ending` for a balance
//! over one period. Roll-forwards are arithmetic identities rather than
//! cross-system comparisons, so the bands are fixed and tighter than the
//! configurable ReconItem tolerances.

use serde::{Deserialize, Serialize};

use core_kernel::Money;

use crate::item::ReconStatus;

/// A roll-forward over one balance for one period
///
/// Additions and subtractions are ordered, labelled components; the
/// calculated ending and the difference are derived on read, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollForward {
    pub name: String,
    pub beginning_balance: Money,
    additions: Vec<(String, Money)>,
    subtractions: Vec<(String, Money)>,
    pub actual_ending: Money,
}

impl RollForward {
    pub fn new(name: impl Into<String>, beginning_balance: Money, actual_ending: Money) -> Self {
        Self {
            name: name.into(),
            beginning_balance,
            additions: Vec::new(),
            subtractions: Vec::new(),
            actual_ending,
        }
    }

    /// Appends a labelled addition
    pub fn add(mut self, label: impl Into<String>, amount: Money) -> Self {
        self.additions.push((label.into(), amount));
        self
    }

    /// Appends a labelled subtraction
    pub fn subtract(mut self, label: impl Into<String>, amount: Money) -> Self {
        self.subtractions.push((label.into(), amount));
        self
    }

    pub fn additions(&self) -> &[(String, Money)] {
        &self.additions
    }

    pub fn subtractions(&self) -> &[(String, Money)] {
        &self.subtractions
    }

    pub fn total_additions(&self) -> Money {
        self.additions.iter().map(|(_, m)| m).sum()
    }

    pub fn total_subtractions(&self) -> Money {
        self.subtractions.iter().map(|(_, m)| m).sum()
    }

    /// `beginning + Σadditions − Σsubtractions`
    pub fn calculated_ending(&self) -> Money {
        self.beginning_balance + self.total_additions() - self.total_subtractions()
    }

    /// `actual − calculated`
    pub fn difference(&self) -> Money {
        self.actual_ending - self.calculated_ending()
    }

    /// PASS within 1.00, WARNING within 100.00, else FAIL
    pub fn status(&self) -> ReconStatus {
        let abs = self.difference().abs();
        if abs <= Money::from_cents(100) {
            ReconStatus::Pass
        } else if abs <= Money::from_cents(10_000) {
            ReconStatus::Warning
        } else {
            ReconStatus::Fail
        }
    }
}
