//! Custom test assertions
//!
//! Assertion helpers for journal entries that produce more meaningful
//! failure messages than the standard macros.

use rust_decimal::Decimal;

use core_kernel::Money;
use domain_journal::JournalEntry;

/// Asserts that a Money value equals an expected decimal amount
pub fn assert_money_eq(actual: Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Money mismatch: actual={}, expected={}",
        actual.amount(),
        expected
    );
}

/// Asserts that an entry balances, reporting the totals when it does not
pub fn assert_entry_balanced(entry: &JournalEntry) {
    assert!(
        entry.is_balanced(),
        "{} unbalanced: debits={}, credits={}",
        entry.number,
        entry.total_debits(),
        entry.total_credits()
    );
}

/// Asserts account, debit, and credit for the line at `index`
pub fn assert_line(
    entry: &JournalEntry,
    index: usize,
    account_code: &str,
    debit: Decimal,
    credit: Decimal,
) {
    let line = entry.lines.get(index).unwrap_or_else(|| {
        panic!(
            "{} has {} lines, no line {}",
            entry.number,
            entry.lines.len(),
            index
        )
    });

    assert_eq!(
        line.account_code, account_code,
        "{} line {}: account {} != expected {}",
        entry.number, index, line.account_code, account_code
    );
    assert_eq!(
        line.debit.amount(),
        debit,
        "{} line {} ({}): debit {} != expected {}",
        entry.number,
        index,
        line.account_code,
        line.debit,
        debit
    );
    assert_eq!(
        line.credit.amount(),
        credit,
        "{} line {} ({}): credit {} != expected {}",
        entry.number,
        index,
        line.account_code,
        line.credit,
        credit
    );
}

/// Asserts the invariant that no line is negative or two-sided
pub fn assert_lines_well_formed(entry: &JournalEntry) {
    for (i, line) in entry.lines.iter().enumerate() {
        assert!(
            !line.debit.is_negative() && !line.credit.is_negative(),
            "{} line {} carries a negative amount",
            entry.number,
            i
        );
        assert!(
            !(line.debit.is_positive() && line.credit.is_positive()),
            "{} line {} carries both a debit and a credit",
            entry.number,
            i
        );
    }
}
