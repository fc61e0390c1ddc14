//! Posting rules: expanding one business transaction into its balanced
//! écriture.
//!
//! The écriture sequence number is threaded explicitly by the caller, once
//! per transaction; the posting step itself carries no state.

use rust_decimal::Decimal;
use thiserror::Error;

use ardoise_shared::types::TransactionId;

use super::accounts;
use super::entry::{EntrySide, Journal, LedgerLine};
use super::transaction::{Transaction, TransactionKind};
use super::validation::{self, ValidationError};

/// Errors from posting a single transaction.
#[derive(Debug, Error)]
pub enum PostingError {
    /// No posting rule exists for payroll yet.
    #[error("No posting rule for payroll transaction {0}")]
    PayrollNotSupported(TransactionId),

    /// Net amount must be strictly positive.
    #[error("Net amount must be positive for transaction {0}")]
    NonPositiveAmount(TransactionId),

    /// VAT amount cannot be negative.
    #[error("VAT amount cannot be negative for transaction {0}")]
    NegativeVatAmount(TransactionId),

    /// Generated lines failed balance validation.
    #[error("Generated lines are invalid: {0}")]
    InvalidLines(#[from] ValidationError),
}

/// Non-fatal findings raised while posting.
///
/// The export always proceeds; warnings travel alongside the generated
/// document so callers can review degraded mappings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostingWarning {
    /// VAT rate outside the supported buckets; routed to the 5.5% account.
    UnmappedVatRate {
        /// Piece reference of the affected écriture.
        piece_ref: String,
        /// The unrecognized rate.
        rate: Decimal,
    },
}

impl std::fmt::Display for PostingWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmappedVatRate { piece_ref, rate } => write!(
                f,
                "{piece_ref}: VAT rate {}% is not a supported bucket, routed to {}",
                rate.normalize(),
                accounts::VAT_COLLECTED_55.code,
            ),
        }
    }
}

/// The balanced line set for one transaction, plus any warnings.
#[derive(Debug)]
pub struct Posting {
    /// Generated lines, in posting order.
    pub lines: Vec<LedgerLine>,
    /// Non-fatal findings.
    pub warnings: Vec<PostingWarning>,
}

/// Expands one transaction into its balanced écriture.
///
/// `sequence` is the écriture number assigned by the caller; all generated
/// lines share it, and callers advance it once per transaction regardless of
/// how many lines it produces.
///
/// # Errors
///
/// Returns [`PostingError::PayrollNotSupported`] for payroll transactions
/// (their postings are not defined yet), and amount errors for invalid
/// inputs.
pub fn post_transaction(sequence: u32, tx: &Transaction) -> Result<Posting, PostingError> {
    let posting = match tx.kind {
        TransactionKind::Sale => post_sale(sequence, validated(tx)?),
        TransactionKind::Purchase => post_purchase(sequence, validated(tx)?),
        TransactionKind::Payroll => return Err(PostingError::PayrollNotSupported(tx.id)),
    };

    validation::validate_lines(&posting.lines)?;
    Ok(posting)
}

fn validated(tx: &Transaction) -> Result<&Transaction, PostingError> {
    if tx.amount_ht <= Decimal::ZERO {
        return Err(PostingError::NonPositiveAmount(tx.id));
    }
    if tx.vat_amount < Decimal::ZERO {
        return Err(PostingError::NegativeVatAmount(tx.id));
    }
    Ok(tx)
}

/// A sale debits the settlement account for the gross amount and credits
/// revenue (net) and collected VAT.
fn post_sale(sequence: u32, tx: &Transaction) -> Posting {
    let piece_ref = format!("FAC-{}", tx.id);

    let mut warnings = Vec::new();
    if !accounts::is_supported_vat_rate(tx.vat_rate) {
        warnings.push(PostingWarning::UnmappedVatRate {
            piece_ref: piece_ref.clone(),
            rate: tx.vat_rate,
        });
    }

    let lines = vec![
        LedgerLine {
            journal: Journal::Sales,
            sequence,
            date: tx.date,
            account: accounts::settlement_account(tx.payment_method),
            piece_ref: piece_ref.clone(),
            label: tx.description.clone(),
            side: EntrySide::Debit,
            amount: tx.amount_ttc(),
        },
        LedgerLine {
            journal: Journal::Sales,
            sequence,
            date: tx.date,
            account: accounts::revenue_account(tx.category),
            piece_ref: piece_ref.clone(),
            label: tx.description.clone(),
            side: EntrySide::Credit,
            amount: tx.amount_ht,
        },
        LedgerLine {
            journal: Journal::Sales,
            sequence,
            date: tx.date,
            account: accounts::vat_collected_account(tx.vat_rate),
            piece_ref,
            label: format!("TVA {}% sur {}", tx.vat_rate.normalize(), tx.description),
            side: EntrySide::Credit,
            amount: tx.vat_amount,
        },
    ];

    Posting { lines, warnings }
}

/// A purchase debits expenses (net) and deductible VAT, and credits the
/// supplier for the gross amount.
fn post_purchase(sequence: u32, tx: &Transaction) -> Posting {
    let piece_ref = format!("ACH-{}", tx.id);

    let lines = vec![
        LedgerLine {
            journal: Journal::Purchases,
            sequence,
            date: tx.date,
            account: accounts::FOOD_PURCHASES,
            piece_ref: piece_ref.clone(),
            label: tx.description.clone(),
            side: EntrySide::Debit,
            amount: tx.amount_ht,
        },
        LedgerLine {
            journal: Journal::Purchases,
            sequence,
            date: tx.date,
            account: accounts::VAT_DEDUCTIBLE,
            piece_ref: piece_ref.clone(),
            label: format!("TVA {}% sur {}", tx.vat_rate.normalize(), tx.description),
            side: EntrySide::Debit,
            amount: tx.vat_amount,
        },
        LedgerLine {
            journal: Journal::Purchases,
            sequence,
            date: tx.date,
            account: accounts::SUPPLIERS,
            piece_ref,
            label: tx.description.clone(),
            side: EntrySide::Credit,
            amount: tx.amount_ttc(),
        },
    ];

    Posting {
        lines,
        warnings: Vec::new(),
    }
}
