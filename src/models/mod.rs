//! Data models for the payroll engine.
//!
//! This module contains the model types used throughout the engine:
//! employees with their owned attendance ledgers, pay periods, and the
//! payslip result produced by a payroll computation.

mod attendance;
mod employee;
mod pay_period;
mod payslip;

pub use attendance::{AttendanceLedger, AttendanceRecord};
pub use employee::Employee;
pub use pay_period::PayPeriod;
pub use payslip::{AllowanceBreakdown, DeductionBreakdown, Payslip};
