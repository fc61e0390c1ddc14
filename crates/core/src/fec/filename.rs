//! Regulatory filename derivation.

use chrono::NaiveDate;

use super::error::ExportError;
use super::serializer::format_date;

/// Length of the SIREN prefix within a SIRET.
const SIREN_LEN: usize = 9;

/// Derives the mandated export filename: `{SIREN}FEC{YYYYMMDD}.txt`.
///
/// The SIREN is the first 9 digits of the establishment's SIRET; the date is
/// the reporting period's end date.
///
/// # Errors
///
/// Returns [`ExportError::InvalidSiret`] when the SIRET has fewer than 9
/// characters or a non-digit among the first 9 — the regulatory name would
/// be meaningless.
pub fn fec_filename(siret: &str, end_date: NaiveDate) -> Result<String, ExportError> {
    let siren: String = siret.chars().take(SIREN_LEN).collect();
    if siren.len() != SIREN_LEN || !siren.chars().all(|c| c.is_ascii_digit()) {
        return Err(ExportError::InvalidSiret {
            siret: siret.to_string(),
        });
    }
    Ok(format!("{siren}FEC{}.txt", format_date(end_date)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end_of_january() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()
    }

    #[test]
    fn test_filename_from_siret() {
        assert_eq!(
            fec_filename("12345678900012", end_of_january()).unwrap(),
            "123456789FEC20260131.txt"
        );
    }

    #[test]
    fn test_filename_accepts_bare_siren() {
        assert_eq!(
            fec_filename("123456789", end_of_january()).unwrap(),
            "123456789FEC20260131.txt"
        );
    }

    #[test]
    fn test_short_siret_rejected() {
        assert!(matches!(
            fec_filename("1234", end_of_january()),
            Err(ExportError::InvalidSiret { .. })
        ));
    }

    #[test]
    fn test_non_digit_siret_rejected() {
        assert!(matches!(
            fec_filename("12A45678900012", end_of_january()),
            Err(ExportError::InvalidSiret { .. })
        ));
    }
}
