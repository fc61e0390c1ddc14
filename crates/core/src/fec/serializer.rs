//! FEC document rendering.
//!
//! Tab-separated values, 18 fixed columns, header row first, LF line
//! separators, UTF-8. The serializer trusts the posting layer's ordering and
//! balance; no sorting or validation happens here.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::ledger::entry::{EntrySide, LedgerLine};

/// The 18 FEC column names, in regulatory order.
pub const FEC_COLUMNS: [&str; 18] = [
    "JournalCode",
    "JournalLib",
    "EcritureNum",
    "EcritureDate",
    "CompteNum",
    "CompteLib",
    "CompAuxNum",
    "CompAuxLib",
    "PieceRef",
    "PieceDate",
    "EcritureLib",
    "Debit",
    "Credit",
    "EcritureLet",
    "DateLet",
    "ValidDate",
    "Montantdevise",
    "Idevise",
];

/// Currency code stamped on every row. No multi-currency support.
const CURRENCY_CODE: &str = "EUR";

/// Renders the full document: header line first, then one row per line, in
/// the order given.
#[must_use]
pub fn render_document(lines: &[LedgerLine]) -> String {
    let mut out = String::with_capacity(256 + lines.len() * 160);
    out.push_str(&FEC_COLUMNS.join("\t"));
    for line in lines {
        out.push('\n');
        out.push_str(&render_line(line));
    }
    out
}

/// Renders one ledger line as 18 tab-separated fields.
///
/// `EcritureDate`, `PieceDate` and `ValidDate` all carry the line's date.
/// Auxiliary account, lettrage and foreign-currency columns stay empty.
fn render_line(line: &LedgerLine) -> String {
    let sequence = format_sequence(line.sequence);
    let date = format_date(line.date);
    let (debit, credit) = match line.side {
        EntrySide::Debit => (format_amount(line.amount), String::new()),
        EntrySide::Credit => (String::new(), format_amount(line.amount)),
    };

    let fields: [&str; 18] = [
        line.journal.code(),
        line.journal.label(),
        sequence.as_str(),
        date.as_str(),
        line.account.code,
        line.account.label,
        "",
        "",
        line.piece_ref.as_str(),
        date.as_str(),
        line.label.as_str(),
        debit.as_str(),
        credit.as_str(),
        "",
        "",
        date.as_str(),
        "",
        CURRENCY_CODE,
    ];
    fields.join("\t")
}

/// Formats an amount as a fixed two-decimal string when strictly positive,
/// empty otherwise. A row never carries both a debit and a credit value.
pub(crate) fn format_amount(amount: Decimal) -> String {
    if amount > Decimal::ZERO {
        let mut rounded =
            amount.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven);
        rounded.rescale(2);
        rounded.to_string()
    } else {
        String::new()
    }
}

/// Formats a calendar date as `YYYYMMDD`, straight from its components.
pub(crate) fn format_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// Formats an écriture number left-padded to 6 digits.
pub(crate) fn format_sequence(sequence: u32) -> String {
    format!("{sequence:06}")
}
