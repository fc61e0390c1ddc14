//! Property-based tests for the posting rules.
//!
//! - Every sale/purchase écriture balances to the cent
//! - Every sale/purchase produces exactly 3 lines sharing one sequence
//! - Supported VAT rates never warn; unsupported rates always do

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use ardoise_shared::types::TransactionId;

use super::entry::{EntrySide, LedgerLine};
use super::posting::{PostingWarning, post_transaction};
use super::transaction::{PaymentMethod, SaleCategory, Transaction, TransactionKind};

/// Strategy to generate positive net amounts (0.01 to 10,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate VAT amounts (0.00 to 2,000.00).
fn vat_amount() -> impl Strategy<Value = Decimal> {
    (0i64..200_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate supported VAT rates.
fn supported_rate() -> impl Strategy<Value = Decimal> {
    prop_oneof![
        Just(Decimal::from(20)),
        Just(Decimal::from(10)),
        Just(Decimal::new(55, 1)),
    ]
}

/// Strategy to generate payment methods.
fn payment_method() -> impl Strategy<Value = PaymentMethod> {
    prop_oneof![
        Just(PaymentMethod::Cash),
        Just(PaymentMethod::Card),
        Just(PaymentMethod::Bank),
    ]
}

/// Strategy to generate optional sale categories.
fn category() -> impl Strategy<Value = Option<SaleCategory>> {
    prop_oneof![
        Just(None),
        Just(Some(SaleCategory::Food)),
        Just(Some(SaleCategory::Drinks)),
        Just(Some(SaleCategory::Takeaway)),
    ]
}

fn make_tx(
    kind: TransactionKind,
    amount_ht: Decimal,
    vat_rate: Decimal,
    vat_amount: Decimal,
    payment_method: PaymentMethod,
    category: Option<SaleCategory>,
) -> Transaction {
    Transaction {
        id: TransactionId::new(),
        date: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
        kind,
        description: "Service".to_string(),
        amount_ht,
        vat_rate,
        vat_amount,
        payment_method,
        category,
    }
}

fn signed_total(lines: &[LedgerLine]) -> Decimal {
    lines.iter().map(LedgerLine::signed_amount).sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any sale écriture balances to the cent, whatever the routing inputs.
    #[test]
    fn prop_sale_balances(
        amount_ht in positive_amount(),
        vat_rate in supported_rate(),
        vat in vat_amount(),
        method in payment_method(),
        cat in category(),
    ) {
        let tx = make_tx(TransactionKind::Sale, amount_ht, vat_rate, vat, method, cat);
        let posting = post_transaction(1, &tx).unwrap();

        prop_assert_eq!(signed_total(&posting.lines), Decimal::ZERO);
        prop_assert!(posting.warnings.is_empty());
    }

    /// Any purchase écriture balances to the cent.
    #[test]
    fn prop_purchase_balances(
        amount_ht in positive_amount(),
        vat_rate in supported_rate(),
        vat in vat_amount(),
    ) {
        let tx = make_tx(
            TransactionKind::Purchase,
            amount_ht,
            vat_rate,
            vat,
            PaymentMethod::Bank,
            None,
        );
        let posting = post_transaction(1, &tx).unwrap();

        prop_assert_eq!(signed_total(&posting.lines), Decimal::ZERO);
    }

    /// Every sale/purchase produces exactly 3 lines sharing the caller's
    /// sequence number.
    #[test]
    fn prop_three_lines_one_sequence(
        sequence in 1u32..1_000_000u32,
        amount_ht in positive_amount(),
        vat in vat_amount(),
        is_sale in any::<bool>(),
    ) {
        let kind = if is_sale { TransactionKind::Sale } else { TransactionKind::Purchase };
        let tx = make_tx(kind, amount_ht, Decimal::from(10), vat, PaymentMethod::Cash, None);
        let posting = post_transaction(sequence, &tx).unwrap();

        prop_assert_eq!(posting.lines.len(), 3);
        prop_assert!(posting.lines.iter().all(|l| l.sequence == sequence));
    }

    /// Exactly one side is populated per line: debit lines only on debits.
    #[test]
    fn prop_sale_sides(
        amount_ht in positive_amount(),
        vat in vat_amount(),
    ) {
        let tx = make_tx(
            TransactionKind::Sale,
            amount_ht,
            Decimal::from(20),
            vat,
            PaymentMethod::Card,
            None,
        );
        let posting = post_transaction(1, &tx).unwrap();

        let debits = posting.lines.iter().filter(|l| l.side == EntrySide::Debit).count();
        prop_assert_eq!(debits, 1);
    }

    /// Unsupported VAT rates always produce an `UnmappedVatRate` warning but
    /// never block the posting.
    #[test]
    fn prop_unsupported_rate_warns(
        amount_ht in positive_amount(),
        raw_rate in 0i64..1_000i64,
    ) {
        let rate = Decimal::new(raw_rate, 1);
        prop_assume!(
            rate != Decimal::from(20)
                && rate != Decimal::from(10)
                && rate != Decimal::new(55, 1)
        );

        let tx = make_tx(
            TransactionKind::Sale,
            amount_ht,
            rate,
            Decimal::ZERO,
            PaymentMethod::Cash,
            None,
        );
        let posting = post_transaction(1, &tx).unwrap();

        let matched = matches!(
            posting.warnings.as_slice(),
            [PostingWarning::UnmappedVatRate { .. }]
        );
        prop_assert!(matched);
    }
}
