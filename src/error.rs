//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during loading, resolution,
//! and payroll computation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::PayrollError;
///
/// let error = PayrollError::InvalidEmployee {
///     field: "hourly_rate".to_string(),
///     message: "cannot be negative".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid employee field 'hourly_rate': cannot be negative"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// A delimited row could not be parsed into a record.
    ///
    /// Bulk loaders recover from this locally by skipping the row; the
    /// offending line number and raw content are preserved so the skip is
    /// observable to the caller.
    #[error("Malformed row at line {line}: {message}")]
    MalformedRow {
        /// The 1-based line number of the offending row.
        line: usize,
        /// The raw row content as read from the file.
        content: String,
        /// A description of what made the row unparsable.
        message: String,
    },

    /// A payroll query was made with an end date before its start date.
    #[error("Invalid date range: end date {end} is before start date {start}")]
    InvalidDateRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An I/O error occurred while reading or writing the backing store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
