//! Business transaction types.
//!
//! Transactions are recorded upstream (till, purchasing, payroll) and passed
//! into the ledger read-only: created upstream, never mutated here.

use ardoise_shared::types::TransactionId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of business transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Customer sale rung up at the till.
    Sale,
    /// Supplier purchase.
    Purchase,
    /// Payroll run.
    Payroll,
}

/// How a sale was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Cash in the drawer.
    Cash,
    /// Card payment, awaiting acquirer settlement.
    Card,
    /// Direct bank settlement (transfer, cheque remittance).
    Bank,
}

/// Sales category, used to route revenue to the right account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleCategory {
    /// Food served on site.
    Food,
    /// Drinks.
    Drinks,
    /// Takeaway sales.
    Takeaway,
}

/// A business transaction as supplied by the upstream subsystems.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned upstream.
    pub id: TransactionId,
    /// Transaction date (calendar date, no timezone).
    pub date: NaiveDate,
    /// Kind of transaction.
    pub kind: TransactionKind,
    /// Description carried onto the ledger lines.
    pub description: String,
    /// Net amount (HT), must be positive.
    pub amount_ht: Decimal,
    /// VAT rate in percent (20, 10 or 5.5; 0 for payroll).
    pub vat_rate: Decimal,
    /// VAT amount, non-negative.
    pub vat_amount: Decimal,
    /// How the transaction was settled.
    pub payment_method: PaymentMethod,
    /// Sales category; `None` is routed as food.
    #[serde(default)]
    pub category: Option<SaleCategory>,
}

impl Transaction {
    /// Gross amount (TTC): net plus VAT.
    #[must_use]
    pub fn amount_ttc(&self) -> Decimal {
        self.amount_ht + self.vat_amount
    }
}
