//! Payslip result models.
//!
//! This module contains the [`Payslip`] type and its breakdown structures
//! capturing all outputs of a payroll computation. A payslip is ephemeral:
//! it is recomputed on every query and never persisted.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayPeriod;

/// The prorated fixed allowances paid for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceBreakdown {
    /// Prorated meal allowance.
    pub meal: Decimal,
    /// Prorated transport allowance.
    pub transport: Decimal,
    /// Prorated clothing allowance.
    pub clothing: Decimal,
    /// Sum of the three allowances.
    pub total: Decimal,
}

/// The four statutory deductions withheld from gross income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// Social-insurance contribution from the stepped table.
    pub social_insurance: Decimal,
    /// Flat-rate health contribution.
    pub health: Decimal,
    /// Capped housing-fund contribution.
    pub housing_fund: Decimal,
    /// Progressive withholding tax.
    pub withholding_tax: Decimal,
    /// Sum of the four deductions.
    pub total: Decimal,
}

/// The complete result of one payroll computation.
///
/// Captures hours, earnings, deductions, and net pay for an employee over
/// a pay period, as one immutable value for a presentation layer to
/// format. The engine performs no I/O on its behalf.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AllowanceBreakdown, DeductionBreakdown, PayPeriod, Payslip};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let payslip = Payslip {
///     payslip_id: Uuid::new_v4(),
///     generated_at: Utc::now(),
///     employee_id: "10001".to_string(),
///     period: PayPeriod {
///         start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
///     },
///     total_hours: Decimal::ZERO,
///     days_present: 0,
///     hourly_rate: Decimal::ZERO,
///     base_pay: Decimal::ZERO,
///     allowances: AllowanceBreakdown {
///         meal: Decimal::ZERO,
///         transport: Decimal::ZERO,
///         clothing: Decimal::ZERO,
///         total: Decimal::ZERO,
///     },
///     gross_income: Decimal::ZERO,
///     deductions: DeductionBreakdown {
///         social_insurance: Decimal::ZERO,
///         health: Decimal::ZERO,
///         housing_fund: Decimal::ZERO,
///         withholding_tax: Decimal::ZERO,
///         total: Decimal::ZERO,
///     },
///     net_pay: Decimal::ZERO,
/// };
/// assert_eq!(payslip.employee_id, "10001");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier for this computation.
    pub payslip_id: Uuid,
    /// When this payslip was computed.
    pub generated_at: DateTime<Utc>,
    /// The employee the payslip belongs to.
    pub employee_id: String,
    /// The requested pay period.
    pub period: PayPeriod,
    /// Total hours worked within the period.
    pub total_hours: Decimal,
    /// Number of days in the period with hours worked.
    pub days_present: u32,
    /// The hourly rate the base pay was computed from.
    pub hourly_rate: Decimal,
    /// Hours-based pay before allowances.
    pub base_pay: Decimal,
    /// Prorated fixed allowances.
    pub allowances: AllowanceBreakdown,
    /// Base pay plus total allowances.
    pub gross_income: Decimal,
    /// The statutory deductions applied to gross income.
    pub deductions: DeductionBreakdown,
    /// Gross income minus total deductions.
    pub net_pay: Decimal,
}
