//! End-to-end tests for the payroll engine.
//!
//! These tests exercise the full flow a calling application would use:
//! - loading the roster and attendance feeds through the codec,
//! - resolving employees despite ID formatting drift,
//! - computing payslips over a pay period,
//! - saving and reloading the store,
//! - tolerant handling of malformed rows.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use payroll_engine::error::PayrollError;
use payroll_engine::models::PayPeriod;
use payroll_engine::payroll::compute_payslip;
use payroll_engine::store::EmployeeStore;

// =============================================================================
// Test Helpers
// =============================================================================

const ROSTER: &str = "\
Employee #,Last Name,First Name,Birthday,Address,Phone Number,SSS #,Philhealth #,TIN #,Pag-ibig #,Status,Position,Immediate Supervisor,Basic Salary,Rice Subsidy,Phone Allowance,Clothing Allowance,Gross Semi-monthly Rate,Hourly Rate
10001,Reyes,Maria,10/11/1990,\"123 Mabini St, Quezon City\",0917-123-4567,44-4506057-3,820126853951,442-605-657-000,691295330870,Regular,Payroll Manager,Garcia Antonio,\"90,000\",\"1,500\",\"1,000\",\"1,000\",\"45,000\",535.71
00007,Santos,Jose,06/19/1988,\"7 Rizal Ave, Manila\",0918-765-4321,52-2061274-9,820105424997,101-203-405-607,663904995411,Regular,Accounting Clerk,Reyes Maria,\"24,000\",\"1,500\",\"500\",\"500\",\"12,000\",100.00";

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn attendance_feed(rows: &[&str]) -> String {
    let mut feed = String::from("Employee #,Last Name,First Name,Date,Log In,Log Out\n");
    feed.push_str(&rows.join("\n"));
    feed
}

fn store_with_roster() -> EmployeeStore {
    let mut store = EmployeeStore::new();
    let report = store.load_roster(ROSTER);
    assert_eq!(report.loaded, 2);
    store
}

// =============================================================================
// Full Flow
// =============================================================================

#[test]
fn test_hours_only_payroll_end_to_end() {
    let mut store = store_with_roster();

    // Two 8-hour days for Jose at rate 100; his ID drifts to "7" in the
    // attendance feed.
    let feed = attendance_feed(&[
        "7,Santos,Jose,6/3/2024,8:00,16:00",
        "7,Santos,Jose,6/4/2024,8:00,16:00",
    ]);
    let report = store.load_attendance(&feed);
    assert_eq!(report.loaded, 2);
    assert_eq!(report.skipped_count(), 0);

    // Zero out allowances so gross is purely hours-based.
    let jose = store.resolve_mut("00007").unwrap();
    jose.set_allowances(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
        .unwrap();

    let period = PayPeriod {
        start_date: date(2024, 6, 1),
        end_date: date(2024, 6, 15),
    };
    let payslip = compute_payslip(store.resolve("00007").unwrap(), period).unwrap();

    assert_eq!(payslip.total_hours, dec("16"));
    assert_eq!(payslip.base_pay, dec("1600"));
    assert_eq!(payslip.gross_income, dec("1600"));
    assert_eq!(payslip.deductions.social_insurance, dec("135.00"));
    assert_eq!(payslip.deductions.health, dec("64.00"));
    assert_eq!(payslip.deductions.housing_fund, dec("32.00"));
    assert_eq!(payslip.deductions.withholding_tax, Decimal::ZERO);
    assert_eq!(payslip.net_pay, dec("1369.00"));
}

#[test]
fn test_allowances_prorate_in_full_flow() {
    let mut store = store_with_roster();

    // Maria works 22 days: full allowances.
    let rows: Vec<String> = (0..22)
        .map(|i| {
            let d = date(2024, 6, 1) + chrono::Days::new(i);
            format!("10001,Reyes,Maria,{},8:00,17:00", d.format("%-m/%-d/%Y"))
        })
        .collect();
    let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let report = store.load_attendance(&attendance_feed(&row_refs));
    assert_eq!(report.loaded, 22);

    let period = PayPeriod {
        start_date: date(2024, 6, 1),
        end_date: date(2024, 6, 30),
    };
    let payslip = compute_payslip(store.resolve("10001").unwrap(), period).unwrap();

    assert_eq!(payslip.days_present, 22);
    assert_eq!(payslip.total_hours, dec("198")); // 22 × 9
    // Full proration: 1500 + 1000 + 1000.
    assert_eq!(payslip.allowances.total, dec("3500"));
    assert_eq!(
        payslip.gross_income,
        dec("198") * dec("535.71") + dec("3500")
    );
    assert_eq!(
        payslip.net_pay,
        payslip.gross_income - payslip.deductions.total
    );
}

#[test]
fn test_invalid_range_is_a_caller_error() {
    let store = store_with_roster();
    let period = PayPeriod {
        start_date: date(2024, 6, 15),
        end_date: date(2024, 6, 1),
    };
    let result = compute_payslip(store.resolve("10001").unwrap(), period);
    assert!(matches!(
        result,
        Err(PayrollError::InvalidDateRange { .. })
    ));
}

// =============================================================================
// Identity Resolution
// =============================================================================

#[test]
fn test_resolver_tolerates_id_drift() {
    let store = store_with_roster();

    for query in ["7", "007", "00007"] {
        let employee = store.resolve(query).expect(query);
        assert_eq!(employee.id, "00007");
    }
}

#[test]
fn test_resolver_matches_name_fragment() {
    let store = store_with_roster();
    assert_eq!(store.resolve("reyes").unwrap().id, "10001");
    assert_eq!(store.resolve("Jose Santos").unwrap().id, "00007");
}

#[test]
fn test_resolver_miss_is_absent_not_error() {
    let store = store_with_roster();
    assert!(store.resolve("31337").is_none());
    assert!(store.resolve("Nobody Known").is_none());
}

// =============================================================================
// Tolerant Loading
// =============================================================================

#[test]
fn test_malformed_attendance_row_skipped_and_counted() {
    let mut store = store_with_roster();

    // Second row has 4 fields instead of 6; rows after it still load.
    let feed = attendance_feed(&[
        "10001,Reyes,Maria,6/3/2024,8:59,18:31",
        "10001,Reyes,Maria,6/4/2024",
        "10001,Reyes,Maria,6/5/2024,8:30,16:30",
    ]);
    let report = store.load_attendance(&feed);

    assert_eq!(report.loaded, 2);
    assert_eq!(report.skipped_count(), 1);
    assert_eq!(report.skipped[0].line, 3);
    assert!(report.skipped[0].reason.contains("expected at least 6"));

    let maria = store.resolve("10001").unwrap();
    assert_eq!(maria.attendance.len(), 2);
}

#[test]
fn test_mixed_date_layouts_load_together() {
    let mut store = store_with_roster();
    let feed = attendance_feed(&[
        "10001,Reyes,Maria,6/3/2024,8:00,16:00",
        "10001,Reyes,Maria,06-04-2024,8:00,16:00",
        "10001,Reyes,Maria,2024-06-05,8:00,16:00",
    ]);
    let report = store.load_attendance(&feed);
    assert_eq!(report.loaded, 3);
    assert_eq!(store.resolve("10001").unwrap().attendance.len(), 3);
}

#[test]
fn test_login_only_day_pays_nothing_until_logout() {
    let mut store = store_with_roster();
    let feed = attendance_feed(&["10001,Reyes,Maria,6/3/2024,8:59,"]);
    store.load_attendance(&feed);

    let maria = store.resolve("10001").unwrap();
    assert_eq!(maria.attendance.hours_worked(date(2024, 6, 3)), Decimal::ZERO);
    assert_eq!(maria.attendance.days_present(date(2024, 6, 1), date(2024, 6, 30)), 0);
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_save_reload_and_recompute() {
    let mut store = store_with_roster();
    let feed = attendance_feed(&[
        "7,Santos,Jose,6/3/2024,8:00,16:00",
        "7,Santos,Jose,6/4/2024,8:00,16:00",
    ]);
    store.load_attendance(&feed);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("employees.csv");
    store.save_to(&path).unwrap();

    let mut reloaded = EmployeeStore::new();
    let report = reloaded.load_saved_file(&path).unwrap();
    assert_eq!(report.loaded, 2);

    // Identity and rate survive the lossy save, and payroll over the
    // persisted hours matches the original computation.
    let period = PayPeriod {
        start_date: date(2024, 6, 1),
        end_date: date(2024, 6, 15),
    };
    let original = compute_payslip(store.resolve("00007").unwrap(), period).unwrap();
    let recomputed = compute_payslip(reloaded.resolve("00007").unwrap(), period).unwrap();

    assert_eq!(recomputed.total_hours, original.total_hours);
    assert_eq!(recomputed.base_pay, original.base_pay);
}
