//! Payroll aggregation.
//!
//! This module turns an employee's attendance ledger and compensation
//! base into a [`Payslip`](crate::models::Payslip) for a pay period:
//! hours and days present, prorated allowances, gross income, statutory
//! deductions, and net pay.

mod aggregator;

pub use aggregator::{STANDARD_WORK_DAYS, compute_payslip};
