//! Record codec for the flat-text employee and attendance feeds.
//!
//! This module parses and serializes the delimited row formats the engine
//! persists and ingests: quote-aware field splitting, currency-tolerant
//! numeric parsing, multi-layout date/time parsing, the 19-field roster
//! schema, the 6-field attendance schema, and the compact save schema.

mod attendance_row;
mod employee_row;
mod fields;

pub use attendance_row::{ATTENDANCE_MIN_FIELDS, AttendanceRow, parse_attendance_row};
pub use employee_row::{
    ROSTER_MIN_FIELDS, SAVED_MIN_FIELDS, parse_roster_row, parse_saved_row, serialize_employee,
};
pub use fields::{DATE_LAYOUTS, TIME_LAYOUTS, parse_amount, parse_date, parse_time, split_fields};
