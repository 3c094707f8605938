//! Attendance punch row parsing.
//!
//! The attendance feed is maintained separately from the roster, so its
//! rows carry the employee's name alongside the ID; the store uses both
//! when matching a punch to an employee.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{PayrollError, PayrollResult};

use super::fields::{parse_date, parse_time, split_fields};

/// Minimum number of fields in an attendance row.
pub const ATTENDANCE_MIN_FIELDS: usize = 6;

/// One parsed attendance punch row, not yet matched to an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRow {
    /// Employee ID as formatted by the attendance feed.
    pub employee_id: String,
    /// Family name from the feed.
    pub last_name: String,
    /// Given name from the feed.
    pub first_name: String,
    /// The calendar date of the punches.
    pub date: NaiveDate,
    /// Login time, absent when the field was empty.
    pub login: Option<NaiveTime>,
    /// Logout time, absent when the field was empty.
    pub logout: Option<NaiveTime>,
}

/// Parses one row of the attendance feed.
///
/// Field order: employee ID, last name, first name, date, login time,
/// logout time. A row with fewer than [`ATTENDANCE_MIN_FIELDS`] fields,
/// a date no layout accepts, or a non-empty time no layout accepts is
/// rejected with a [`PayrollError::MalformedRow`]. Empty time fields are
/// valid and produce `None` — a day can hold a login punch before its
/// logout arrives.
pub fn parse_attendance_row(line_number: usize, line: &str) -> PayrollResult<AttendanceRow> {
    let malformed = |message: String| PayrollError::MalformedRow {
        line: line_number,
        content: line.to_string(),
        message,
    };

    let fields = split_fields(line);
    if fields.len() < ATTENDANCE_MIN_FIELDS {
        return Err(malformed(format!(
            "expected at least {} fields, found {}",
            ATTENDANCE_MIN_FIELDS,
            fields.len()
        )));
    }

    let date = parse_date(&fields[3])
        .ok_or_else(|| malformed(format!("unparsable date '{}'", fields[3].trim())))?;

    let login = parse_optional_time(&fields[4])
        .map_err(|raw| malformed(format!("unparsable login time '{raw}'")))?;
    let logout = parse_optional_time(&fields[5])
        .map_err(|raw| malformed(format!("unparsable logout time '{raw}'")))?;

    Ok(AttendanceRow {
        employee_id: fields[0].trim().to_string(),
        last_name: fields[1].trim().to_string(),
        first_name: fields[2].trim().to_string(),
        date,
        login,
        logout,
    })
}

fn parse_optional_time(raw: &str) -> Result<Option<NaiveTime>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    parse_time(trimmed)
        .map(Some)
        .ok_or_else(|| trimmed.to_string())
}
