//! FEC (Fichier des Écritures Comptables) export.
//!
//! France's statutory accounting-ledger export: a tab-separated, 18-column
//! document plus a regulation-mandated filename. The ledger module produces
//! the balanced lines; this module renders and names the file.

pub mod error;
pub mod export;
pub mod filename;
pub mod serializer;

pub use error::ExportError;
pub use export::{CompanyProfile, FecExport, generate_fec};
pub use filename::fec_filename;
pub use serializer::{FEC_COLUMNS, render_document};
