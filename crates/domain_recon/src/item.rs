//! Tolerance-banded reconciliation checks
//!
//! A ReconItem compares a source-system value against an external
//! reference value. Its status is computed once at construction from the
//! difference and the tolerance band and never transitions afterward.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::Money;

/// Three-tier outcome of a balance comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReconStatus {
    Pass,
    Warning,
    Fail,
}

impl fmt::Display for ReconStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReconStatus::Pass => "PASS",
            ReconStatus::Warning => "WARNING",
            ReconStatus::Fail => "FAIL",
        };
        f.write_str(s)
    }
}

/// A single reconciliation check
///
/// Tolerance is a construction parameter, not a global constant: each
/// check expresses its own materiality threshold. The standard band for
/// balance checks is 100.00; a facility check uses 0.01 (exact match);
/// the unearned-interest check uses 50.00.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconItem {
    pub name: String,
    pub source_value: Money,
    pub target_value: Money,
    pub tolerance: Money,
    pub difference: Money,
    pub status: ReconStatus,
    pub notes: String,
}

impl ReconItem {
    /// Builds a check, classifying the difference at construction
    ///
    /// PASS if `|difference| ≤ 0.01`, WARNING if within the tolerance
    /// band, FAIL beyond it.
    pub fn new(
        name: impl Into<String>,
        source_value: Money,
        target_value: Money,
        tolerance: Money,
    ) -> Self {
        let difference = source_value - target_value;
        let abs_diff = difference.abs();

        let (status, notes) = if abs_diff.amount() <= dec!(0.01) {
            (ReconStatus::Pass, String::new())
        } else if abs_diff <= tolerance {
            (
                ReconStatus::Warning,
                format!("Within tolerance ({tolerance})"),
            )
        } else {
            (
                ReconStatus::Fail,
                format!("Exceeds tolerance of {tolerance}"),
            )
        };

        Self {
            name: name.into(),
            source_value,
            target_value,
            tolerance,
            difference,
            status,
            notes,
        }
    }

    /// Replaces the notes, e.g. to attach a period caveat
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// The standard tolerance band for cross-system balance checks
pub fn standard_tolerance() -> Money {
    Money::from_cents(10_000)
}

/// Exact-match band for statements that must tie to the cent
pub fn exact_tolerance() -> Money {
    Money::from_cents(1)
}

/// Narrower band for the unearned-interest register check
pub fn unearned_tolerance() -> Money {
    Money::from_cents(5_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(diff_cents: i64, tolerance: Money) -> ReconItem {
        ReconItem::new(
            "check",
            Money::from_cents(1_000_000 + diff_cents),
            Money::from_cents(1_000_000),
            tolerance,
        )
    }

    #[test]
    fn test_tier_boundaries_at_standard_tolerance() {
        let t = standard_tolerance();
        assert_eq!(item(1, t).status, ReconStatus::Pass); // d = 0.01
        assert_eq!(item(2, t).status, ReconStatus::Warning); // d = 0.02
        assert_eq!(item(10_000, t).status, ReconStatus::Warning); // d = 100.00
        assert_eq!(item(10_001, t).status, ReconStatus::Fail); // d = 100.01
    }

    #[test]
    fn test_negative_differences_use_absolute_value() {
        let t = standard_tolerance();
        assert_eq!(item(-1, t).status, ReconStatus::Pass);
        assert_eq!(item(-10_001, t).status, ReconStatus::Fail);
    }

    #[test]
    fn test_status_is_fixed_at_construction() {
        let i = item(2, standard_tolerance());
        assert_eq!(i.difference, Money::from_cents(2));
        assert_eq!(i.notes, "Within tolerance ($100.00)");

        let i = i.with_notes("reference balance is mid-month");
        assert_eq!(i.status, ReconStatus::Warning);
    }

    #[test]
    fn test_exact_tolerance_fails_on_two_cents() {
        assert_eq!(item(2, exact_tolerance()).status, ReconStatus::Fail);
        assert_eq!(item(1, exact_tolerance()).status, ReconStatus::Pass);
    }
}
