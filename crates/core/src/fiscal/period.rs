//! Reporting period types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The reporting period covered by a regulatory export.
///
/// `start_date` is accepted for interface completeness; only `end_date` is
/// consumed today (it dates the export filename).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
}

impl ReportingPeriod {
    /// Creates a period from start and end dates.
    #[must_use]
    pub const fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
