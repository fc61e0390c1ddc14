//! Double-entry bookkeeping logic.
//!
//! This module implements the core ledger functionality:
//! - Chart of accounts (Plan Comptable Général reference table)
//! - Business transaction types
//! - Ledger lines (debits and credits)
//! - Posting rules expanding transactions into balanced lines
//! - Balance validation

pub mod accounts;
pub mod entry;
pub mod posting;
pub mod transaction;
pub mod validation;

#[cfg(test)]
mod posting_props;

pub use accounts::Account;
pub use entry::{EntrySide, Journal, LedgerLine};
pub use posting::{Posting, PostingError, PostingWarning, post_transaction};
pub use transaction::{PaymentMethod, SaleCategory, Transaction, TransactionKind};
pub use validation::{ValidationError, validate_lines};
