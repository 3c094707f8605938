//! Payroll computation for one employee over one pay period.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::deductions::{
    health_contribution, housing_fund_contribution, social_insurance_contribution,
    withholding_tax,
};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    AllowanceBreakdown, DeductionBreakdown, Employee, PayPeriod, Payslip,
};

/// The standard number of work days in a full pay period, used as the
/// denominator when prorating fixed allowances.
pub const STANDARD_WORK_DAYS: u32 = 22;

/// Computes a payslip for an employee over a pay period.
///
/// The period must be well-formed: an end date before the start date is
/// a caller error and is rejected with
/// [`PayrollError::InvalidDateRange`] before any computation.
///
/// The computation reads hours and days present from the employee's
/// attendance ledger, then:
/// - base pay = hours in range × hourly rate;
/// - each fixed allowance is prorated by
///   `min(1, days present / STANDARD_WORK_DAYS)`;
/// - gross income = base pay + prorated allowances;
/// - the four statutory deductions and net pay come from the rule
///   engine applied to gross income.
///
/// The result is one immutable [`Payslip`] value; nothing is persisted
/// and no I/O is performed.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Employee, PayPeriod};
/// use payroll_engine::payroll::compute_payslip;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let mut employee = Employee::new("10001", "Maria", "Reyes", Decimal::new(100, 0));
/// let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// employee.attendance.record_login(date, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
/// employee.attendance.record_logout(date, NaiveTime::from_hms_opt(16, 0, 0).unwrap());
///
/// let period = PayPeriod { start_date: date, end_date: date };
/// let payslip = compute_payslip(&employee, period).unwrap();
/// assert_eq!(payslip.base_pay, Decimal::new(800, 0));
/// ```
pub fn compute_payslip(employee: &Employee, period: PayPeriod) -> PayrollResult<Payslip> {
    if !period.is_valid() {
        return Err(PayrollError::InvalidDateRange {
            start: period.start_date,
            end: period.end_date,
        });
    }

    let total_hours = employee
        .attendance
        .hours_in_range(period.start_date, period.end_date);
    let days_present = employee
        .attendance
        .days_present(period.start_date, period.end_date);

    let base_pay = total_hours * employee.hourly_rate;

    let proration_factor = (Decimal::from(days_present) / Decimal::from(STANDARD_WORK_DAYS))
        .min(Decimal::ONE);
    let meal = employee.meal_allowance * proration_factor;
    let transport = employee.transport_allowance * proration_factor;
    let clothing = employee.clothing_allowance * proration_factor;
    let allowances = AllowanceBreakdown {
        meal,
        transport,
        clothing,
        total: meal + transport + clothing,
    };

    let gross_income = base_pay + allowances.total;

    let social_insurance = social_insurance_contribution(gross_income);
    let health = health_contribution(gross_income);
    let housing_fund = housing_fund_contribution(gross_income);
    let tax = withholding_tax(gross_income);
    let deductions = DeductionBreakdown {
        social_insurance,
        health,
        housing_fund,
        withholding_tax: tax,
        total: social_insurance + health + housing_fund + tax,
    };

    let net_pay = gross_income - deductions.total;

    Ok(Payslip {
        payslip_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        employee_id: employee.id.clone(),
        period,
        total_hours,
        days_present,
        hourly_rate: employee.hourly_rate,
        base_pay,
        allowances,
        gross_income,
        deductions,
        net_pay,
    })
}
