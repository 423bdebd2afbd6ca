//! Chart of accounts and account references
//!
//! The chart of accounts is externally defined (numeric string codes in the
//! remote ledger); the engine treats codes as opaque strings and only
//! resolves display names. Bank legs that have no ledger mapping yet are
//! represented by a distinct placeholder variant so a future bank-account
//! integration can slot in without touching the entry model.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Revenue accounts
pub const FINANCE_INCOME: &str = "400000";
pub const EARNED_LIFE_INS: &str = "410100";
pub const EARNED_AH_INS: &str = "410200";
pub const EARNED_PROP_INS: &str = "410300";
pub const EARNED_AUTO_INS: &str = "410400";
pub const EARNED_IUI_INS: &str = "410500";
pub const EARNED_INS_REBATES: &str = "410600";
pub const CUSTOMER_RECOVERIES: &str = "420100";
pub const SALE_OF_BAD_DEBT: &str = "420200";
pub const NONFILING_FEES: &str = "430000";
pub const DELINQUENT_NSF_FEES: &str = "440000";
pub const REFUNDS: &str = "460000";

/// Finance costs
pub const CONTRACT_SERVICES: &str = "510000";
pub const INTEREST_EXPENSE: &str = "520100";
pub const COLLECTION_EXPENSES: &str = "540400";
pub const CREDIT_REPORTING_FEES: &str = "540500";

/// Operating expenses
pub const BAD_DEBT_WRITEOFFS: &str = "610500";
pub const ALLOWANCE_ADJUSTMENT: &str = "610502";
pub const DEPRECIATION: &str = "610600";
pub const AMORTIZATION_EXPENSE: &str = "610700";
pub const CC_PROCESSING_FEES: &str = "610800";

/// Balance sheet - loans receivable and contras
pub const LOANS_RECEIVABLE_GROSS: &str = "110001";
pub const ALLOWANCE_CREDIT_LOSSES: &str = "110002";
pub const UNEARNED_PRECOMPUTED_INTEREST: &str = "110010";
pub const UNEARNED_LIFE_INS: &str = "110050";
pub const UNEARNED_AH_INS: &str = "110060";
pub const UNEARNED_IUI_INS: &str = "110070";
pub const UNEARNED_PROP_INS: &str = "110080";
pub const UNEARNED_AUTO_INS: &str = "110090";
pub const ACCUMULATED_CHARGE_OFFS: &str = "110200";

/// Balance sheet - liabilities
pub const FACILITY_LOC: &str = "291300";
pub const ACCRUED_EXPENSES: &str = "290060";

/// Balance sheet - equity / shareholder
pub const RELATED_PARTY_LOC: &str = "310000";
pub const RELATED_PARTY_PRINCIPAL: &str = "31100";
pub const RELATED_PARTY_INTEREST: &str = "31200";

/// Internal placeholder for a bank leg not yet mapped to a real account
///
/// The remote chart has no integrated bank-account mapping; these tokens
/// stand in until one exists. They are deliberately distinct from real
/// codes so the two spaces can never be confused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BankPlaceholder {
    /// Disbursement account funding new loans
    Funding,
    /// Clearing account receiving borrower payments
    Payment,
    /// Operating account receiving sale proceeds
    Operating,
    /// Related-party DDA auto-debited for facility interest
    RelatedParty,
}

impl BankPlaceholder {
    /// Returns the placeholder token used in exported entries
    pub fn token(&self) -> &'static str {
        match self {
            BankPlaceholder::Funding => "FUNDING_BANK",
            BankPlaceholder::Payment => "PAYMENT_BANK",
            BankPlaceholder::Operating => "OPERATING_BANK",
            BankPlaceholder::RelatedParty => "RELATED_PARTY_BANK",
        }
    }
}

impl fmt::Display for BankPlaceholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Reference to an account on a journal entry line
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountRef {
    /// A real chart-of-accounts code
    Code(String),
    /// An unmapped internal bank leg
    Bank(BankPlaceholder),
}

impl AccountRef {
    /// Returns the code or placeholder token as posted
    pub fn code(&self) -> &str {
        match self {
            AccountRef::Code(code) => code,
            AccountRef::Bank(bank) => bank.token(),
        }
    }
}

impl From<&str> for AccountRef {
    fn from(code: &str) -> Self {
        AccountRef::Code(code.to_string())
    }
}

impl From<BankPlaceholder> for AccountRef {
    fn from(bank: BankPlaceholder) -> Self {
        AccountRef::Bank(bank)
    }
}

impl fmt::Display for AccountRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Insurance product categories with unearned/earned account pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsuranceCategory {
    CreditLife,
    Disability,
    InvoluntaryUnemployment,
    Property,
    AutoVsi,
}

impl InsuranceCategory {
    /// All supported categories, in earnings-processing order
    pub const ALL: [InsuranceCategory; 5] = [
        InsuranceCategory::CreditLife,
        InsuranceCategory::Disability,
        InsuranceCategory::InvoluntaryUnemployment,
        InsuranceCategory::Property,
        InsuranceCategory::AutoVsi,
    ];

    /// Human label used in memos
    pub fn label(&self) -> &'static str {
        match self {
            InsuranceCategory::CreditLife => "credit life",
            InsuranceCategory::Disability => "disability (A&H)",
            InsuranceCategory::InvoluntaryUnemployment => "IUI",
            InsuranceCategory::Property => "property",
            InsuranceCategory::AutoVsi => "auto/VSI",
        }
    }
}

impl fmt::Display for InsuranceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The unearned liability and earned commission codes for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsurancePair {
    pub unearned: &'static str,
    pub earned: &'static str,
}

/// Read-only account directory: code to display name, insurance category
/// to its unearned/earned pair
///
/// Modeled as an immutable configuration value passed into the entry
/// generators, so per-entity charts remain possible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartOfAccounts {
    names: HashMap<String, String>,
}

impl ChartOfAccounts {
    /// Builds a directory from a code→name table
    pub fn new(names: HashMap<String, String>) -> Self {
        Self { names }
    }

    /// The standard lender chart of accounts
    pub fn standard() -> &'static ChartOfAccounts {
        static STANDARD: Lazy<ChartOfAccounts> = Lazy::new(|| {
            let names = [
                (FINANCE_INCOME, "Finance Income"),
                (EARNED_LIFE_INS, "Earned Life Ins Commission"),
                (EARNED_AH_INS, "Earned A&H Ins Commissions"),
                (EARNED_PROP_INS, "Earned Prop Ins Commissions"),
                (EARNED_AUTO_INS, "Earned Auto Ins Commissions"),
                (EARNED_IUI_INS, "Earned IUI Commissions"),
                (EARNED_INS_REBATES, "Earned Insurance Prem Rebates"),
                (CUSTOMER_RECOVERIES, "Customer Recoveries"),
                (SALE_OF_BAD_DEBT, "Sale of Bad Debt"),
                (NONFILING_FEES, "Nonfiling Fees/Personal Prop"),
                (DELINQUENT_NSF_FEES, "Delinquent/NSF Fees"),
                (REFUNDS, "Refunds"),
                (CONTRACT_SERVICES, "Contract Services"),
                (INTEREST_EXPENSE, "Interest Expense"),
                (COLLECTION_EXPENSES, "Collection Expenses"),
                (CREDIT_REPORTING_FEES, "Credit Reporting Fees"),
                (BAD_DEBT_WRITEOFFS, "Bad Debt Writeoffs"),
                (ALLOWANCE_ADJUSTMENT, "Allowance Adjustment"),
                (DEPRECIATION, "Depreciation"),
                (AMORTIZATION_EXPENSE, "Amortization Expense"),
                (CC_PROCESSING_FEES, "Credit Card Processing Fees"),
                (LOANS_RECEIVABLE_GROSS, "Loans Receivable Gross"),
                (ALLOWANCE_CREDIT_LOSSES, "Allowance for Credit Losses"),
                (UNEARNED_PRECOMPUTED_INTEREST, "Unearned Pre-Computed Interest"),
                (UNEARNED_LIFE_INS, "Unearned Life Ins Commission"),
                (UNEARNED_AH_INS, "Unearned A&H Ins Commissions"),
                (UNEARNED_IUI_INS, "Unearned IUI Commissions"),
                (UNEARNED_PROP_INS, "Unearned Prop Ins Commissions"),
                (UNEARNED_AUTO_INS, "Unearned Auto Ins Commissions"),
                (ACCUMULATED_CHARGE_OFFS, "Accumulated Charge Offs"),
                (FACILITY_LOC, "Credit Facility LOC"),
                (ACCRUED_EXPENSES, "Accrued Expenses"),
                (RELATED_PARTY_LOC, "Related Party Line of Credit"),
                (RELATED_PARTY_PRINCIPAL, "Related Party Principal"),
                (RELATED_PARTY_INTEREST, "Related Party Interest"),
            ]
            .into_iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect();

            ChartOfAccounts::new(names)
        });
        &STANDARD
    }

    /// Resolves a display name, falling back to the raw code if unmapped
    ///
    /// Unmapped is valid: internal bank placeholders resolve to their own
    /// tokens.
    pub fn name_for(&self, code: &str) -> String {
        self.names
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }

    /// Resolves the display name for an account reference
    pub fn name_for_ref(&self, account: &AccountRef) -> String {
        self.name_for(account.code())
    }

    /// Returns the unearned/earned account pair for an insurance category
    pub fn insurance_pair(&self, category: InsuranceCategory) -> InsurancePair {
        match category {
            InsuranceCategory::CreditLife => InsurancePair {
                unearned: UNEARNED_LIFE_INS,
                earned: EARNED_LIFE_INS,
            },
            InsuranceCategory::Disability => InsurancePair {
                unearned: UNEARNED_AH_INS,
                earned: EARNED_AH_INS,
            },
            InsuranceCategory::InvoluntaryUnemployment => InsurancePair {
                unearned: UNEARNED_IUI_INS,
                earned: EARNED_IUI_INS,
            },
            InsuranceCategory::Property => InsurancePair {
                unearned: UNEARNED_PROP_INS,
                earned: EARNED_PROP_INS,
            },
            InsuranceCategory::AutoVsi => InsurancePair {
                unearned: UNEARNED_AUTO_INS,
                earned: EARNED_AUTO_INS,
            },
        }
    }
}
