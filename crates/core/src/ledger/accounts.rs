//! Chart of accounts: the Plan Comptable Général reference table.
//!
//! Fixed set of accounts, grouped by PCG class. Accounts are looked up by
//! semantic role and never invented dynamically; every code is unique and
//! immutable for the lifetime of an export.

use rust_decimal::Decimal;
use serde::Serialize;

use super::transaction::{PaymentMethod, SaleCategory};

/// A general-ledger account: a fixed 6-digit PCG code and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Account {
    /// 6-digit PCG account code.
    pub code: &'static str,
    /// French account label.
    pub label: &'static str,
}

const fn account(code: &'static str, label: &'static str) -> Account {
    Account { code, label }
}

/// Class 4 - customer receivables.
pub const CUSTOMERS: Account = account("411000", "Clients");
/// Class 4 - supplier payables.
pub const SUPPLIERS: Account = account("401000", "Fournisseurs");
/// Class 5 - cash drawer.
pub const CASH: Account = account("531000", "Caisse");
/// Class 5 - bank account.
pub const BANK: Account = account("512000", "Banque");
/// Class 5 - card payments awaiting acquirer settlement.
pub const CARD_CLEARING: Account = account("511200", "Cartes bancaires à encaisser");
/// Class 6 - food purchases. All purchases post here today.
pub const FOOD_PURCHASES: Account = account("601000", "Achats de matières premières");
/// Class 6 - drink purchases. No posting rule targets this yet.
pub const DRINK_PURCHASES: Account = account("601100", "Achats de boissons");
/// Class 6 - payroll. Reserved until payroll postings are defined.
pub const PAYROLL: Account = account("641000", "Rémunérations du personnel");
/// Class 6 - social charges. Reserved until payroll postings are defined.
pub const SOCIAL_CHARGES: Account = account("645000", "Charges de sécurité sociale");
/// Class 7 - on-site food sales.
pub const FOOD_SALES: Account = account("707100", "Ventes de nourriture");
/// Class 7 - drink sales.
pub const DRINK_SALES: Account = account("707200", "Ventes de boissons");
/// Class 7 - takeaway sales.
pub const TAKEAWAY_SALES: Account = account("707300", "Ventes à emporter");
/// VAT collected at 10% (on-site catering rate).
pub const VAT_COLLECTED_10: Account = account("445710", "TVA collectée 10%");
/// VAT collected at 20% (standard rate).
pub const VAT_COLLECTED_20: Account = account("445720", "TVA collectée 20%");
/// VAT collected at 5.5% (reduced rate).
pub const VAT_COLLECTED_55: Account = account("445730", "TVA collectée 5,5%");
/// VAT deductible on purchases. Single bucket, no per-rate tracking.
pub const VAT_DEDUCTIBLE: Account =
    account("445660", "TVA déductible sur autres biens et services");

/// The full chart, for enumeration and integrity checks.
pub const CHART: [Account; 16] = [
    CUSTOMERS,
    SUPPLIERS,
    CASH,
    BANK,
    CARD_CLEARING,
    FOOD_PURCHASES,
    DRINK_PURCHASES,
    PAYROLL,
    SOCIAL_CHARGES,
    FOOD_SALES,
    DRINK_SALES,
    TAKEAWAY_SALES,
    VAT_COLLECTED_10,
    VAT_COLLECTED_20,
    VAT_COLLECTED_55,
    VAT_DEDUCTIBLE,
];

/// Revenue account for a sale, by category.
///
/// `None` is routed to the food sales account.
#[must_use]
pub fn revenue_account(category: Option<SaleCategory>) -> Account {
    match category {
        Some(SaleCategory::Drinks) => DRINK_SALES,
        Some(SaleCategory::Takeaway) => TAKEAWAY_SALES,
        Some(SaleCategory::Food) | None => FOOD_SALES,
    }
}

/// Settlement account for a sale, by payment method.
///
/// Card receipts sit in the clearing account until the acquirer pays out.
#[must_use]
pub fn settlement_account(method: PaymentMethod) -> Account {
    match method {
        PaymentMethod::Cash => CASH,
        PaymentMethod::Card => CARD_CLEARING,
        PaymentMethod::Bank => BANK,
    }
}

/// VAT-collected account for a rate.
///
/// Exact match on 10 and 20; every other rate routes to the 5.5% account so
/// an export is never blocked. Callers surface unrecognized rates through
/// [`is_supported_vat_rate`].
#[must_use]
pub fn vat_collected_account(rate: Decimal) -> Account {
    if rate == Decimal::from(10) {
        VAT_COLLECTED_10
    } else if rate == Decimal::from(20) {
        VAT_COLLECTED_20
    } else {
        VAT_COLLECTED_55
    }
}

/// Returns true if the rate is one of the supported VAT buckets (20, 10, 5.5).
#[must_use]
pub fn is_supported_vat_rate(rate: Decimal) -> bool {
    rate == Decimal::from(20) || rate == Decimal::from(10) || rate == Decimal::new(55, 1)
}
