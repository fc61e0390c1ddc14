//! Export error types.

use thiserror::Error;

use ardoise_shared::AppError;

use crate::ledger::posting::PostingError;

/// Errors that can occur while generating an FEC export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// SIRET too short or non-numeric; the regulatory filename cannot be
    /// formed without its 9-digit SIREN prefix.
    #[error("Invalid SIRET '{siret}': expected at least 9 leading digits")]
    InvalidSiret {
        /// The rejected SIRET, as supplied.
        siret: String,
    },

    /// A transaction could not be posted.
    #[error(transparent)]
    Posting(#[from] PostingError),
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        Self::BusinessRule(err.to_string())
    }
}
