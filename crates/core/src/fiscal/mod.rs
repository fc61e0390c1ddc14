//! Reporting period types.

pub mod period;

pub use period::ReportingPeriod;
