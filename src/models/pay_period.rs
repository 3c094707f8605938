//! Pay period model.
//!
//! This module contains the [`PayPeriod`] type used to define the date
//! window for a payroll computation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A pay period with an inclusive start and end date.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2024, 6, 16).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if the end date is on or after the start date.
    ///
    /// An inverted period is a caller error; the aggregator rejects it
    /// before any computation.
    pub fn is_valid(&self) -> bool {
        self.start_date <= self.end_date
    }
}
