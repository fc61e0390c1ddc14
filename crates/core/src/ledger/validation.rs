//! Balance validation for generated ledger lines.

use rust_decimal::Decimal;
use thiserror::Error;

use super::entry::{EntrySide, LedgerLine};

/// Validation errors for a generated écriture.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The écriture has no lines.
    #[error("Écriture must have at least one line")]
    NoLines,

    /// The écriture has only one side (all debits or all credits).
    #[error("Écriture must have both debit and credit lines")]
    SingleSided,

    /// A line carries a negative amount.
    #[error("Line amount cannot be negative")]
    NegativeAmount,

    /// The écriture does not balance.
    #[error("Écriture is unbalanced: debits ({debits}) != credits ({credits})")]
    Unbalanced {
        /// Total debit amount.
        debits: Decimal,
        /// Total credit amount.
        credits: Decimal,
    },
}

/// Validates that a set of ledger lines forms a balanced écriture.
///
/// Zero amounts are allowed: a zero-VAT line renders with both amount
/// columns empty but still belongs to its écriture.
///
/// # Errors
///
/// Returns an error if the lines are not balanced or are single-sided.
pub fn validate_lines(lines: &[LedgerLine]) -> Result<(), ValidationError> {
    if lines.is_empty() {
        return Err(ValidationError::NoLines);
    }

    let mut total_debits = Decimal::ZERO;
    let mut total_credits = Decimal::ZERO;
    let mut has_debit = false;
    let mut has_credit = false;

    for line in lines {
        if line.amount < Decimal::ZERO {
            return Err(ValidationError::NegativeAmount);
        }

        match line.side {
            EntrySide::Debit => {
                total_debits += line.amount;
                has_debit = true;
            }
            EntrySide::Credit => {
                total_credits += line.amount;
                has_credit = true;
            }
        }
    }

    if !has_debit || !has_credit {
        return Err(ValidationError::SingleSided);
    }

    if total_debits != total_credits {
        return Err(ValidationError::Unbalanced {
            debits: total_debits,
            credits: total_credits,
        });
    }

    Ok(())
}
