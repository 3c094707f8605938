//! Employee row parsing and serialization.
//!
//! Two schemas meet here. The roster feed is the rich 19-field export
//! from the HR master sheet; the save schema is the engine's own compact
//! format: identity, position, the government identifiers, hourly rate,
//! and the accumulated per-date hours. The asymmetry is deliberate: the
//! roster is the authority for personal and compensation details, and a
//! save only needs to preserve what payroll itself derives.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;

use super::fields::{parse_amount, parse_date, split_fields};

/// Minimum number of fields in a roster row.
pub const ROSTER_MIN_FIELDS: usize = 19;

/// Minimum number of fields in a saved employee row, before the
/// per-date hours pairs.
pub const SAVED_MIN_FIELDS: usize = 9;

/// Parses one row of the roster feed into an [`Employee`].
///
/// Field order: ID, last name, first name, birthday, address, phone,
/// social-insurance no., health-insurance no., tax no., housing-fund no.,
/// status, position, supervisor, basic salary, meal allowance, transport
/// allowance, clothing allowance, gross semi-monthly rate, hourly rate.
///
/// The department is derived from the first word of the position field.
/// Monetary fields tolerate currency formatting and degrade to zero.
/// A row with fewer than [`ROSTER_MIN_FIELDS`] fields is rejected with a
/// [`PayrollError::MalformedRow`] carrying the line number and content.
pub fn parse_roster_row(line_number: usize, line: &str) -> PayrollResult<Employee> {
    let fields = split_fields(line);
    if fields.len() < ROSTER_MIN_FIELDS {
        return Err(PayrollError::MalformedRow {
            line: line_number,
            content: line.to_string(),
            message: format!(
                "expected at least {} fields, found {}",
                ROSTER_MIN_FIELDS,
                fields.len()
            ),
        });
    }

    let position = fields[11].trim().to_string();
    let department = position
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();

    let mut employee = Employee::new(
        fields[0].trim(),
        fields[2].trim(),
        fields[1].trim(),
        parse_amount(&fields[18]),
    );
    employee.birthday = fields[3].trim().to_string();
    employee.address = fields[4].trim().to_string();
    employee.phone = fields[5].trim().to_string();
    employee.social_insurance_no = fields[6].trim().to_string();
    employee.health_insurance_no = fields[7].trim().to_string();
    employee.tax_no = fields[8].trim().to_string();
    employee.housing_fund_no = fields[9].trim().to_string();
    employee.status = fields[10].trim().to_string();
    employee.position = position;
    employee.department = department;
    employee.supervisor = fields[12].trim().to_string();
    employee.basic_salary = parse_amount(&fields[13]);
    employee.meal_allowance = parse_amount(&fields[14]);
    employee.transport_allowance = parse_amount(&fields[15]);
    employee.clothing_allowance = parse_amount(&fields[16]);
    employee.gross_semi_monthly_rate = parse_amount(&fields[17]);

    Ok(employee)
}

/// Serializes an employee into the save schema.
///
/// Field order: full name, ID, position, department, social-insurance
/// no., health-insurance no., tax no., housing-fund no., hourly rate,
/// then one (ISO date, hours) pair per ledger entry in date order.
pub fn serialize_employee(employee: &Employee) -> String {
    let mut out = vec![
        employee.full_name(),
        employee.id.clone(),
        employee.position.clone(),
        employee.department.clone(),
        employee.social_insurance_no.clone(),
        employee.health_insurance_no.clone(),
        employee.tax_no.clone(),
        employee.housing_fund_no.clone(),
        employee.hourly_rate.to_string(),
    ];
    for (date, record) in employee.attendance.iter() {
        out.push(date.format("%Y-%m-%d").to_string());
        out.push(record.hours_worked().to_string());
    }
    out.join(",")
}

/// Parses one saved employee row back into an [`Employee`].
///
/// The inverse of [`serialize_employee`]. The stored name is split on its
/// first whitespace into given name and remainder; personal fields the
/// save schema does not carry stay empty. Per-date hours load into the
/// ledger without punch times.
pub fn parse_saved_row(line_number: usize, line: &str) -> PayrollResult<Employee> {
    let malformed = |message: String| PayrollError::MalformedRow {
        line: line_number,
        content: line.to_string(),
        message,
    };

    let fields = split_fields(line);
    if fields.len() < SAVED_MIN_FIELDS {
        return Err(malformed(format!(
            "expected at least {} fields, found {}",
            SAVED_MIN_FIELDS,
            fields.len()
        )));
    }

    let name = fields[0].trim();
    let (first_name, last_name) = match name.split_once(' ') {
        Some((first, rest)) => (first, rest.trim()),
        None => (name, ""),
    };

    let hourly_rate: Decimal = fields[8]
        .trim()
        .parse()
        .map_err(|_| malformed(format!("unparsable hourly rate '{}'", fields[8])))?;

    let mut employee = Employee::new(fields[1].trim(), first_name, last_name, hourly_rate);
    employee.position = fields[2].trim().to_string();
    employee.department = fields[3].trim().to_string();
    employee.social_insurance_no = fields[4].trim().to_string();
    employee.health_insurance_no = fields[5].trim().to_string();
    employee.tax_no = fields[6].trim().to_string();
    employee.housing_fund_no = fields[7].trim().to_string();

    let mut pairs = fields[SAVED_MIN_FIELDS..].chunks_exact(2);
    for pair in &mut pairs {
        let date = parse_date(&pair[0])
            .ok_or_else(|| malformed(format!("unparsable date '{}' in hours pair", pair[0])))?;
        let hours: Decimal = pair[1]
            .trim()
            .parse()
            .map_err(|_| malformed(format!("unparsable hours '{}' in hours pair", pair[1])))?;
        employee.attendance.add_hours(date, hours);
    }
    if !pairs.remainder().is_empty() {
        return Err(malformed("dangling date without hours value".to_string()));
    }

    Ok(employee)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    const ROSTER_ROW: &str = "10001,Reyes,Maria,10/11/1990,\"123 Mabini St, Quezon City\",0917-123-4567,44-4506057-3,820126853951,442-605-657-000,691295330870,Regular,Payroll Manager,Garcia Antonio,\"₱90,000.00\",\"1,500\",\"1,000\",\"1,000\",\"45,000\",535.71";

    /// ER-001: full roster row parses
    #[test]
    fn test_roster_row_parses_all_fields() {
        let employee = parse_roster_row(2, ROSTER_ROW).unwrap();
        assert_eq!(employee.id, "10001");
        assert_eq!(employee.last_name, "Reyes");
        assert_eq!(employee.first_name, "Maria");
        assert_eq!(employee.birthday, "10/11/1990");
        assert_eq!(employee.address, "123 Mabini St, Quezon City");
        assert_eq!(employee.social_insurance_no, "44-4506057-3");
        assert_eq!(employee.health_insurance_no, "820126853951");
        assert_eq!(employee.tax_no, "442-605-657-000");
        assert_eq!(employee.housing_fund_no, "691295330870");
        assert_eq!(employee.status, "Regular");
        assert_eq!(employee.position, "Payroll Manager");
        assert_eq!(employee.supervisor, "Garcia Antonio");
        assert_eq!(employee.basic_salary, dec("90000.00"));
        assert_eq!(employee.meal_allowance, dec("1500"));
        assert_eq!(employee.transport_allowance, dec("1000"));
        assert_eq!(employee.clothing_allowance, dec("1000"));
        assert_eq!(employee.gross_semi_monthly_rate, dec("45000"));
        assert_eq!(employee.hourly_rate, dec("535.71"));
    }

    /// ER-002: department derives from first word of position
    #[test]
    fn test_department_derived_from_position() {
        let employee = parse_roster_row(2, ROSTER_ROW).unwrap();
        assert_eq!(employee.department, "Payroll");
    }

    /// ER-003: short row is rejected with line context
    #[test]
    fn test_short_roster_row_rejected() {
        let result = parse_roster_row(7, "10001,Reyes,Maria");
        match result {
            Err(PayrollError::MalformedRow { line, content, .. }) => {
                assert_eq!(line, 7);
                assert_eq!(content, "10001,Reyes,Maria");
            }
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn test_unparsable_salary_degrades_to_zero() {
        let row = ROSTER_ROW.replace("\"₱90,000.00\"", "confidential");
        let employee = parse_roster_row(2, &row).unwrap();
        assert_eq!(employee.basic_salary, Decimal::ZERO);
        // The rest of the row still loads.
        assert_eq!(employee.hourly_rate, dec("535.71"));
    }

    /// ER-004: save then parse preserves rate and identifiers
    #[test]
    fn test_save_round_trip_preserves_rate_and_identifiers() {
        let employee = parse_roster_row(2, ROSTER_ROW).unwrap();
        let saved = serialize_employee(&employee);
        let back = parse_saved_row(1, &saved).unwrap();

        assert_eq!(back.id, employee.id);
        assert_eq!(back.hourly_rate, employee.hourly_rate);
        assert_eq!(back.social_insurance_no, employee.social_insurance_no);
        assert_eq!(back.health_insurance_no, employee.health_insurance_no);
        assert_eq!(back.tax_no, employee.tax_no);
        assert_eq!(back.housing_fund_no, employee.housing_fund_no);
        assert_eq!(back.position, employee.position);
        assert_eq!(back.department, employee.department);
    }

    #[test]
    fn test_save_includes_ledger_pairs() {
        let mut employee = Employee::new("10001", "Maria", "Reyes", dec("535.71"));
        employee
            .attendance
            .add_hours(NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(), dec("8"));
        employee
            .attendance
            .add_hours(NaiveDate::from_ymd_opt(2024, 6, 4).unwrap(), dec("7.5"));

        let saved = serialize_employee(&employee);
        assert!(saved.ends_with("2024-06-03,8,2024-06-04,7.5"));

        let back = parse_saved_row(1, &saved).unwrap();
        assert_eq!(
            back.attendance
                .hours_worked(NaiveDate::from_ymd_opt(2024, 6, 4).unwrap()),
            dec("7.5")
        );
    }

    #[test]
    fn test_saved_row_short_is_rejected() {
        assert!(parse_saved_row(1, "Maria Reyes,10001,Manager").is_err());
    }

    #[test]
    fn test_saved_row_dangling_pair_is_rejected() {
        let line = "Maria Reyes,10001,Manager,Payroll,a,b,c,d,535.71,2024-06-03";
        assert!(parse_saved_row(1, line).is_err());
    }

    #[test]
    fn test_saved_row_bad_rate_is_rejected() {
        let line = "Maria Reyes,10001,Manager,Payroll,a,b,c,d,rate";
        assert!(parse_saved_row(1, line).is_err());
    }

    #[test]
    fn test_saved_name_without_space_becomes_first_name() {
        let line = "Cher,10001,Manager,Payroll,a,b,c,d,535.71";
        let employee = parse_saved_row(1, line).unwrap();
        assert_eq!(employee.first_name, "Cher");
        assert_eq!(employee.last_name, "");
    }
}
