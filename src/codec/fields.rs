//! Field-level parsing primitives for delimited rows.
//!
//! Both record feeds arrive as comma-delimited text with optional quoting,
//! currency-formatted numbers, and drifting date/time layouts. The
//! primitives here absorb that drift: splitting respects quoted segments,
//! numerics degrade to zero instead of failing a row, and dates and times
//! are tried against an ordered list of layouts where the first success
//! wins.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use tracing::warn;

/// Date layouts attempted in order when parsing a date field.
///
/// `%m`/`%d` accept both padded and unpadded digits, so the first layout
/// covers `M/D/YYYY` as well as `MM/DD/YYYY`.
pub const DATE_LAYOUTS: [&str; 4] = ["%m/%d/%Y", "%m-%d-%Y", "%Y-%m-%d", "%Y/%m/%d"];

/// Time-of-day layouts attempted in order when parsing a time field.
pub const TIME_LAYOUTS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

/// Splits a delimited line into fields, honoring quoted segments.
///
/// A `"` toggles in-quotes mode; while inside quotes the separator is
/// treated as a literal character. Quote characters themselves are not
/// part of the field value.
///
/// # Example
///
/// ```
/// use payroll_engine::codec::split_fields;
///
/// let fields = split_fields(r#"10001,"Reyes, Maria",Payroll"#);
/// assert_eq!(fields, vec!["10001", "Reyes, Maria", "Payroll"]);
/// ```
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields
}

/// Parses a monetary or numeric field, tolerating currency formatting.
///
/// Every character that is not a digit or decimal point is stripped
/// before parsing, so `"₱90,000.00"` reads as `90000.00`. An empty or
/// unparsable result degrades to zero with a warning rather than failing
/// the row.
///
/// # Example
///
/// ```
/// use payroll_engine::codec::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount("\"90,000\""), Decimal::new(90000, 0));
/// assert_eq!(parse_amount("535.71"), Decimal::new(53571, 2));
/// assert_eq!(parse_amount("n/a"), Decimal::ZERO);
/// ```
pub fn parse_amount(raw: &str) -> Decimal {
    let raw = raw.trim();
    if raw.is_empty() {
        return Decimal::ZERO;
    }

    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match cleaned.parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(raw, "could not parse numeric field, defaulting to zero");
            Decimal::ZERO
        }
    }
}

/// Parses a date field against [`DATE_LAYOUTS`] in order.
///
/// Returns the first successful parse, or `None` when every layout fails.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(raw, layout).ok())
}

/// Parses a time-of-day field against [`TIME_LAYOUTS`] in order.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    TIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveTime::parse_from_str(raw, layout).ok())
}
