//! Portfolio and branch classification directories
//!
//! Static lookup tables for the lender's portfolio and branch codes.
//! Consumed read-only by the reconciliation layer's referential-validity
//! checks; a zero/unassigned code is always valid.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Portfolio code to state/label directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioDirectory {
    labels: HashMap<u32, String>,
}

impl PortfolioDirectory {
    pub fn new(labels: HashMap<u32, String>) -> Self {
        Self { labels }
    }

    /// The standard portfolio→state map
    pub fn standard() -> &'static PortfolioDirectory {
        static STANDARD: Lazy<PortfolioDirectory> = Lazy::new(|| {
            let labels = [
                (1u32, "SC"),
                (4, "BH"),
                (5, "UT"),
                (6, "MO"),
                (7, "TN"),
                (8, "AL"),
                (9, "MS"),
                (10, "ID"),
                (11, "ID"),
                (12, "MS"),
                (13, "TN"),
            ]
            .into_iter()
            .map(|(code, label)| (code, label.to_string()))
            .collect();

            PortfolioDirectory::new(labels)
        });
        &STANDARD
    }

    /// Zero is the unassigned/legacy code and is always valid
    pub fn is_valid(&self, code: u32) -> bool {
        code == 0 || self.labels.contains_key(&code)
    }

    pub fn label(&self, code: u32) -> Option<&str> {
        if code == 0 {
            return Some("UNASSIGNED");
        }
        self.labels.get(&code).map(String::as_str)
    }
}

/// Branch code directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchDirectory {
    labels: HashMap<u32, String>,
}

impl BranchDirectory {
    pub fn new(labels: HashMap<u32, String>) -> Self {
        Self { labels }
    }

    pub fn standard() -> &'static BranchDirectory {
        static STANDARD: Lazy<BranchDirectory> = Lazy::new(|| {
            let labels = [(1u32, "Primary"), (2, "Secondary"), (3, "Legacy")]
                .into_iter()
                .map(|(code, label)| (code, label.to_string()))
                .collect();

            BranchDirectory::new(labels)
        });
        &STANDARD
    }

    pub fn is_valid(&self, code: u32) -> bool {
        code == 0 || self.labels.contains_key(&code)
    }

    pub fn label(&self, code: u32) -> Option<&str> {
        if code == 0 {
            return Some("UNASSIGNED");
        }
        self.labels.get(&code).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_code_is_always_valid() {
        assert!(PortfolioDirectory::standard().is_valid(0));
        assert!(BranchDirectory::standard().is_valid(0));
    }

    #[test]
    fn test_known_and_unknown_portfolio_codes() {
        let dir = PortfolioDirectory::standard();
        assert!(dir.is_valid(1));
        assert!(dir.is_valid(13));
        assert!(!dir.is_valid(2));
        assert!(!dir.is_valid(99));
        assert_eq!(dir.label(5), Some("UT"));
        assert_eq!(dir.label(0), Some("UNASSIGNED"));
        assert_eq!(dir.label(99), None);
    }

    #[test]
    fn test_branch_codes() {
        let dir = BranchDirectory::standard();
        assert!(dir.is_valid(1) && dir.is_valid(2) && dir.is_valid(3));
        assert!(!dir.is_valid(4));
    }
}
