//! Payroll engine for small-enterprise attendance and statutory deductions.
//!
//! This crate computes periodic pay from raw daily attendance punches:
//! it ingests flat delimited employee and attendance feeds, reconciles
//! per-day login/logout punches into hours worked, prorates fixed
//! allowances by days present, applies the statutory deduction rules
//! (stepped social-insurance table, flat and capped contributions,
//! progressive withholding tax), and produces a net-pay payslip for a
//! presentation layer to format.

#![warn(missing_docs)]

pub mod codec;
pub mod deductions;
pub mod error;
pub mod models;
pub mod payroll;
pub mod store;
