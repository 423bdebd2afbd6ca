//! The period reconciliation report
//!
//! Owns the ordered checks, roll-forwards, and validation results for one
//! period's run. Items are append-only for the life of the run, so counts
//! are computed on demand rather than cached.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use core_kernel::{Money, ReportId};

use crate::item::{ReconItem, ReconStatus};
use crate::rollforward::RollForward;

/// Outcome of an internal consistency validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValidationStatus {
    Pass,
    Fail,
    /// Informational breakdown, never a gate
    Info,
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ValidationStatus::Pass => "PASS",
            ValidationStatus::Fail => "FAIL",
            ValidationStatus::Info => "INFO",
        };
        f.write_str(s)
    }
}

/// A recorded validation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationCheck {
    pub name: String,
    pub status: ValidationStatus,
    pub detail: String,
}

impl ValidationCheck {
    pub fn new(
        name: impl Into<String>,
        status: ValidationStatus,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            status,
            detail: detail.into(),
        }
    }

    pub fn passed(&self) -> bool {
        self.status == ValidationStatus::Pass
    }
}

/// Complete reconciliation report for one period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconciliationReport {
    pub id: ReportId,
    /// Display period, e.g. "January 2026"
    pub period: String,
    pub items: Vec<ReconItem>,
    pub roll_forwards: Vec<RollForward>,
    pub validations: Vec<ValidationCheck>,
}

impl ReconciliationReport {
    pub fn new(period: impl Into<String>) -> Self {
        Self {
            id: ReportId::new_v7(),
            period: period.into(),
            items: Vec::new(),
            roll_forwards: Vec::new(),
            validations: Vec::new(),
        }
    }

    /// Builds and appends a tolerance-banded check
    pub fn add_check(
        &mut self,
        name: impl Into<String>,
        source: Money,
        target: Money,
        tolerance: Money,
    ) -> &ReconItem {
        let item = ReconItem::new(name, source, target, tolerance);
        debug!(
            check = %item.name,
            status = %item.status,
            difference = %item.difference,
            "added recon check"
        );
        self.items.push(item);
        self.items.last().expect("just pushed")
    }

    /// Appends an already-built check (e.g. one with caveat notes)
    pub fn add_item(&mut self, item: ReconItem) {
        self.items.push(item);
    }

    pub fn add_roll_forward(&mut self, roll_forward: RollForward) {
        self.roll_forwards.push(roll_forward);
    }

    pub fn add_validation(&mut self, check: ValidationCheck) {
        self.validations.push(check);
    }

    /// Records a pass/fail validation result
    pub fn add_validation_result(
        &mut self,
        name: impl Into<String>,
        passed: bool,
        detail: impl Into<String>,
    ) {
        let status = if passed {
            ValidationStatus::Pass
        } else {
            ValidationStatus::Fail
        };
        self.validations.push(ValidationCheck::new(name, status, detail));
    }

    pub fn pass_count(&self) -> usize {
        self.status_count(ReconStatus::Pass)
    }

    pub fn warning_count(&self) -> usize {
        self.status_count(ReconStatus::Warning)
    }

    pub fn fail_count(&self) -> usize {
        self.status_count(ReconStatus::Fail)
    }

    fn status_count(&self, status: ReconStatus) -> usize {
        self.items.iter().filter(|i| i.status == status).count()
    }

    /// Failed validations, in recorded order
    pub fn failed_validations(&self) -> impl Iterator<Item = &ValidationCheck> {
        self.validations
            .iter()
            .filter(|v| v.status == ValidationStatus::Fail)
    }

    /// True when no check or validation failed outright
    ///
    /// Warnings do not make a period unclean; they are within tolerance.
    pub fn is_clean(&self) -> bool {
        self.fail_count() == 0
            && self.failed_validations().next().is_none()
            && self
                .roll_forwards
                .iter()
                .all(|rf| rf.status() != ReconStatus::Fail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::standard_tolerance;

    #[test]
    fn test_counts_computed_on_demand() {
        let mut report = ReconciliationReport::new("January 2026");
        report.add_check(
            "a",
            Money::from_cents(100),
            Money::from_cents(100),
            standard_tolerance(),
        );
        report.add_check(
            "b",
            Money::from_cents(100),
            Money::from_cents(150),
            standard_tolerance(),
        );
        report.add_check(
            "c",
            Money::from_cents(100),
            Money::from_cents(2_000_100),
            standard_tolerance(),
        );

        assert_eq!(report.pass_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.fail_count(), 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_warnings_leave_report_clean() {
        let mut report = ReconciliationReport::new("January 2026");
        report.add_check(
            "within band",
            Money::from_cents(100),
            Money::from_cents(150),
            standard_tolerance(),
        );
        report.add_validation_result("no duplicates", true, "all loan numbers unique");

        assert!(report.is_clean());
    }

    #[test]
    fn test_failed_validation_dirties_report() {
        let mut report = ReconciliationReport::new("January 2026");
        report.add_validation_result("portfolio codes", false, "invalid codes: {99}");

        assert!(!report.is_clean());
        assert_eq!(report.failed_validations().count(), 1);
    }
}
