//! FEC export generation.
//!
//! The single entry point callers use: a list of business transactions plus
//! a reporting period and company identity in, a compliant ledger document
//! and its regulation-mandated filename out.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use ardoise_shared::AppResult;

use crate::fiscal::ReportingPeriod;
use crate::ledger::posting::{self, PostingWarning};
use crate::ledger::transaction::Transaction;

use super::error::ExportError;
use super::filename::fec_filename;
use super::serializer::render_document;

/// Identity of the exporting company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Legal name. Accepted for interface completeness; not written into
    /// the document.
    pub name: String,
    /// 14-digit SIRET; its 9-digit SIREN prefix names the export file.
    pub siret: String,
}

/// A generated FEC export.
#[derive(Debug, Clone)]
pub struct FecExport {
    /// Regulation-mandated filename.
    pub filename: String,
    /// Full document text (UTF-8, tab-separated, LF line separators).
    pub content: String,
    /// Non-fatal findings raised while posting.
    pub warnings: Vec<PostingWarning>,
}

impl FecExport {
    /// Writes the document into `dir` under its mandated filename and
    /// returns the full path of the written file.
    ///
    /// # Errors
    ///
    /// Surfaces the underlying I/O error when the file cannot be written.
    pub fn write_to(&self, dir: &Path) -> AppResult<PathBuf> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.content)?;
        Ok(path)
    }
}

/// Generates the FEC document for a reporting period.
///
/// Transactions are posted in input order. The écriture counter starts at 1
/// and advances once per transaction, however many lines it produces; the
/// counter is local to this call, so identical input yields byte-identical
/// output.
///
/// `period.start_date` and `company.name` are accepted for interface
/// completeness and not consumed.
///
/// # Errors
///
/// Returns [`ExportError::InvalidSiret`] for an unusable SIRET and
/// propagates the first posting failure (payroll, invalid amounts).
pub fn generate_fec(
    transactions: &[Transaction],
    period: &ReportingPeriod,
    company: &CompanyProfile,
) -> Result<FecExport, ExportError> {
    let filename = fec_filename(&company.siret, period.end_date)?;

    let mut lines = Vec::with_capacity(transactions.len() * 3);
    let mut warnings = Vec::new();
    for (sequence, tx) in (1u32..).zip(transactions) {
        let posting = posting::post_transaction(sequence, tx)?;
        lines.extend(posting.lines);
        warnings.extend(posting.warnings);
    }

    for warning in &warnings {
        warn!(%warning, "degraded account mapping");
    }

    let content = render_document(&lines);
    debug!(
        transactions = transactions.len(),
        lines = lines.len(),
        warnings = warnings.len(),
        filename = %filename,
        "generated FEC document"
    );

    Ok(FecExport {
        filename,
        content,
        warnings,
    })
}
