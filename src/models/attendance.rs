//! Attendance record and ledger models.
//!
//! This module defines the [`AttendanceRecord`] struct for a single
//! calendar day of login/logout punches and the [`AttendanceLedger`]
//! owned by each employee, keyed by date.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One day of attendance for an employee.
///
/// Holds an optional login time, an optional logout time, and the derived
/// hours-worked value. Hours are recomputed on every punch write: while
/// either time is missing they are zero, and a logout earlier than the
/// login clamps to zero so a bad punch pair reads as a non-working day
/// rather than producing a negative payroll input.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AttendanceRecord;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let mut record = AttendanceRecord::new();
/// record.set_login(NaiveTime::from_hms_opt(8, 30, 0).unwrap());
/// assert_eq!(record.hours_worked(), Decimal::ZERO);
///
/// record.set_logout(NaiveTime::from_hms_opt(17, 0, 0).unwrap());
/// assert_eq!(record.hours_worked(), Decimal::new(85, 1)); // 8.5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The login time of day, if a login punch has been recorded.
    pub login: Option<NaiveTime>,
    /// The logout time of day, if a logout punch has been recorded.
    pub logout: Option<NaiveTime>,
    hours_worked: Decimal,
}

impl AttendanceRecord {
    /// Creates an empty record with no punches and zero hours.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record carrying a known hours total with no punch times.
    ///
    /// Used when loading the save schema, which persists derived hours but
    /// not the underlying punches.
    pub fn from_total_hours(hours: Decimal) -> Self {
        Self {
            login: None,
            logout: None,
            hours_worked: hours.max(Decimal::ZERO),
        }
    }

    /// Records a login punch, overwriting any prior login for this day.
    pub fn set_login(&mut self, time: NaiveTime) {
        self.login = Some(time);
        self.recompute_hours();
    }

    /// Records a logout punch, overwriting any prior logout for this day.
    pub fn set_logout(&mut self, time: NaiveTime) {
        self.logout = Some(time);
        self.recompute_hours();
    }

    /// Returns the derived hours worked for this day.
    pub fn hours_worked(&self) -> Decimal {
        self.hours_worked
    }

    fn recompute_hours(&mut self) {
        self.hours_worked = match (self.login, self.logout) {
            (Some(login), Some(logout)) => {
                let minutes = (logout - login).num_minutes();
                // Logout before login clamps to a non-working day.
                (Decimal::new(minutes, 0) / Decimal::new(60, 0)).max(Decimal::ZERO)
            }
            _ => Decimal::ZERO,
        };
    }
}

/// Per-employee attendance history, one record per calendar date.
///
/// Records are created lazily on the first punch for a date and are never
/// deleted. The ledger is the sole source of hours for payroll
/// aggregation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AttendanceLedger;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let mut ledger = AttendanceLedger::new();
/// let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// ledger.record_login(date, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
/// ledger.record_logout(date, NaiveTime::from_hms_opt(16, 0, 0).unwrap());
///
/// assert_eq!(ledger.hours_worked(date), Decimal::new(80, 1)); // 8.0
/// assert_eq!(ledger.days_present(date, date), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceLedger {
    records: BTreeMap<NaiveDate, AttendanceRecord>,
}

impl AttendanceLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a login punch for the given date.
    ///
    /// A second login on the same date overwrites the first; no punch
    /// history is kept.
    pub fn record_login(&mut self, date: NaiveDate, time: NaiveTime) {
        self.records.entry(date).or_default().set_login(time);
    }

    /// Records a logout punch for the given date.
    pub fn record_logout(&mut self, date: NaiveDate, time: NaiveTime) {
        self.records.entry(date).or_default().set_logout(time);
    }

    /// Adds hours directly to the given date's record.
    ///
    /// Only used for the save schema, which carries derived hours without
    /// punch times. Hours accumulate across repeated calls for one date.
    pub fn add_hours(&mut self, date: NaiveDate, hours: Decimal) {
        let prior = self
            .records
            .get(&date)
            .map(AttendanceRecord::hours_worked)
            .unwrap_or(Decimal::ZERO);
        self.records
            .insert(date, AttendanceRecord::from_total_hours(prior + hours));
    }

    /// Returns the hours worked on the given date, zero if no record.
    pub fn hours_worked(&self, date: NaiveDate) -> Decimal {
        self.records
            .get(&date)
            .map(AttendanceRecord::hours_worked)
            .unwrap_or(Decimal::ZERO)
    }

    /// Sums hours worked over a date range, inclusive on both ends.
    pub fn hours_in_range(&self, start: NaiveDate, end: NaiveDate) -> Decimal {
        self.records
            .range(start..=end)
            .map(|(_, record)| record.hours_worked())
            .sum()
    }

    /// Counts the dates in the range (inclusive) with more than zero hours.
    pub fn days_present(&self, start: NaiveDate, end: NaiveDate) -> u32 {
        self.records
            .range(start..=end)
            .filter(|(_, record)| record.hours_worked() > Decimal::ZERO)
            .count() as u32
    }

    /// Sums hours worked across the whole ledger.
    pub fn total_hours(&self) -> Decimal {
        self.records
            .values()
            .map(AttendanceRecord::hours_worked)
            .sum()
    }

    /// Returns the record for a date, if any punches have been made.
    pub fn get(&self, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.records.get(&date)
    }

    /// Iterates over all records in date order.
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &AttendanceRecord)> {
        self.records.iter()
    }

    /// Returns the number of dates with records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no punches have been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
