//! Journal entry model
//!
//! A journal entry is a header plus an ordered, append-only sequence of
//! lines. Balance is a query, not an assertion: producing an unbalanced
//! entry is legal at construction time (a data gap in one leg may need
//! human review before posting), and imbalance is surfaced by the
//! reconciliation layer's validation pass instead.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{JournalEntryId, Money};

use crate::account::{AccountRef, ChartOfAccounts};
use crate::error::JournalError;

/// A single line of a journal entry
///
/// Carries a nonzero debit or a nonzero credit, never both and never a
/// negative amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntryLine {
    pub account_code: String,
    pub account_name: String,
    pub debit: Money,
    pub credit: Money,
    pub memo: String,
}

/// A complete journal entry with header and ordered lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: JournalEntryId,
    /// Entry identifier, e.g. "JE-3"
    pub number: String,
    pub description: String,
    pub date: NaiveDate,
    /// Posting order = append order
    pub lines: Vec<JournalEntryLine>,
    /// Which monthly source register produced this entry
    pub source_label: String,
    pub notes: String,
    pub review_required: bool,
}

impl JournalEntry {
    /// Creates an empty entry; lines are appended by a generator
    pub fn new(
        number: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
        source_label: impl Into<String>,
    ) -> Self {
        Self {
            id: JournalEntryId::new_v7(),
            number: number.into(),
            description: description.into(),
            date,
            lines: Vec::new(),
            source_label: source_label.into(),
            notes: String::new(),
            review_required: false,
        }
    }

    /// Appends a line, resolving the account name and quantizing amounts
    ///
    /// # Errors
    ///
    /// Returns an error if either amount is negative or if both sides are
    /// nonzero. These are programming errors, not period anomalies.
    pub fn add_line(
        &mut self,
        chart: &ChartOfAccounts,
        account: impl Into<AccountRef>,
        debit: Money,
        credit: Money,
        memo: impl Into<String>,
    ) -> Result<(), JournalError> {
        let account = account.into();
        for amount in [debit, credit] {
            if amount.is_negative() {
                return Err(JournalError::NegativeLineAmount {
                    account: account.code().to_string(),
                    amount: amount.amount(),
                });
            }
        }
        if debit.is_positive() && credit.is_positive() {
            return Err(JournalError::DebitAndCredit(account.code().to_string()));
        }

        self.lines.push(JournalEntryLine {
            account_code: account.code().to_string(),
            account_name: chart.name_for_ref(&account),
            debit,
            credit,
            memo: memo.into(),
        });
        Ok(())
    }

    /// Appends a debit line; the amount must be nonnegative
    pub fn debit(
        &mut self,
        chart: &ChartOfAccounts,
        account: impl Into<AccountRef>,
        amount: Money,
        memo: impl Into<String>,
    ) {
        self.add_line(chart, account, amount, Money::ZERO, memo)
            .expect("debit amount must be nonnegative");
    }

    /// Appends a credit line; the amount must be nonnegative
    pub fn credit(
        &mut self,
        chart: &ChartOfAccounts,
        account: impl Into<AccountRef>,
        amount: Money,
        memo: impl Into<String>,
    ) {
        self.add_line(chart, account, Money::ZERO, amount, memo)
            .expect("credit amount must be nonnegative");
    }

    pub fn total_debits(&self) -> Money {
        self.lines.iter().map(|line| &line.debit).sum()
    }

    pub fn total_credits(&self) -> Money {
        self.lines.iter().map(|line| &line.credit).sum()
    }

    /// Debits and credits agree within the 0.02 posting band
    pub fn is_balanced(&self) -> bool {
        (self.total_debits() - self.total_credits()).abs().amount() < dec!(0.02)
    }
}
