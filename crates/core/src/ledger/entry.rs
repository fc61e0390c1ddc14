//! Ledger line domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::accounts::Account;

/// Journal a line is posted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Journal {
    /// Sales journal.
    Sales,
    /// Purchases journal.
    Purchases,
}

impl Journal {
    /// FEC journal code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Sales => "VE",
            Self::Purchases => "AC",
        }
    }

    /// FEC journal label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sales => "Ventes",
            Self::Purchases => "Achats",
        }
    }
}

/// Side of a double-entry line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySide {
    /// Debit line (increases assets/expenses).
    Debit,
    /// Credit line (increases liabilities/revenue).
    Credit,
}

/// A single line of one écriture.
///
/// Lines of one transaction share `sequence` and `piece_ref`, and the group
/// must balance (debits = credits).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerLine {
    /// Journal this line belongs to.
    pub journal: Journal,
    /// Écriture sequence number, shared across the lines of one transaction.
    pub sequence: u32,
    /// Entry date; also the piece and validation date.
    pub date: NaiveDate,
    /// Posted account.
    pub account: Account,
    /// Source document reference (`FAC-…` for sales, `ACH-…` for purchases).
    pub piece_ref: String,
    /// Entry label.
    pub label: String,
    /// Whether this is a debit or credit.
    pub side: EntrySide,
    /// Amount, non-negative. Zero is legal (zero-VAT lines).
    pub amount: Decimal,
}

impl LedgerLine {
    /// Returns the signed amount (positive for debit, negative for credit).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        match self.side {
            EntrySide::Debit => self.amount,
            EntrySide::Credit => -self.amount,
        }
    }
}
