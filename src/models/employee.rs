//! Employee model.
//!
//! This module defines the [`Employee`] struct: identity, employment
//! attributes, government identifiers, compensation base, and the owned
//! attendance ledger.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

use super::AttendanceLedger;

/// An employee in the payroll system.
///
/// Employees are created by the codec at load time or through
/// [`EmployeeStore::add_employee`](crate::store::EmployeeStore::add_employee),
/// and are mutated only by rate/allowance edits and attendance writes.
/// The ID is unique within a store; hourly rate and allowances are kept
/// non-negative by the validating setters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier, stored exactly as the source feed formats it
    /// (leading zeros preserved).
    pub id: String,
    /// Family name.
    pub last_name: String,
    /// Given name.
    pub first_name: String,
    /// Birthday as supplied by the roster feed; kept opaque.
    #[serde(default)]
    pub birthday: String,
    /// Home address.
    #[serde(default)]
    pub address: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Social-insurance membership number; opaque.
    #[serde(default)]
    pub social_insurance_no: String,
    /// Health-insurance membership number; opaque.
    #[serde(default)]
    pub health_insurance_no: String,
    /// Taxpayer identification number; opaque.
    #[serde(default)]
    pub tax_no: String,
    /// Housing-fund membership number; opaque.
    #[serde(default)]
    pub housing_fund_no: String,
    /// Employment status (e.g. "Regular", "Probationary").
    #[serde(default)]
    pub status: String,
    /// Job position title.
    #[serde(default)]
    pub position: String,
    /// Department, derived from the position on roster load.
    #[serde(default)]
    pub department: String,
    /// Immediate supervisor's name.
    #[serde(default)]
    pub supervisor: String,
    /// Basic monthly salary.
    #[serde(default)]
    pub basic_salary: Decimal,
    /// Fixed monthly meal allowance, prorated by days present.
    #[serde(default)]
    pub meal_allowance: Decimal,
    /// Fixed monthly transport allowance, prorated by days present.
    #[serde(default)]
    pub transport_allowance: Decimal,
    /// Fixed monthly clothing allowance, prorated by days present.
    #[serde(default)]
    pub clothing_allowance: Decimal,
    /// Gross semi-monthly rate from the roster feed.
    #[serde(default)]
    pub gross_semi_monthly_rate: Decimal,
    /// Hourly pay rate.
    pub hourly_rate: Decimal,
    /// Attendance history owned by this employee.
    #[serde(default)]
    pub attendance: AttendanceLedger,
}

impl Employee {
    /// Creates an employee with identity and rate; every other field
    /// starts empty or zero.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        hourly_rate: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            last_name: last_name.into(),
            first_name: first_name.into(),
            birthday: String::new(),
            address: String::new(),
            phone: String::new(),
            social_insurance_no: String::new(),
            health_insurance_no: String::new(),
            tax_no: String::new(),
            housing_fund_no: String::new(),
            status: String::new(),
            position: String::new(),
            department: String::new(),
            supervisor: String::new(),
            basic_salary: Decimal::ZERO,
            meal_allowance: Decimal::ZERO,
            transport_allowance: Decimal::ZERO,
            clothing_allowance: Decimal::ZERO,
            gross_semi_monthly_rate: Decimal::ZERO,
            hourly_rate,
            attendance: AttendanceLedger::new(),
        }
    }

    /// Returns the display name, given name first.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new("10001", "Maria", "Reyes", Decimal::new(12500, 2));
    /// assert_eq!(employee.full_name(), "Maria Reyes");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Updates the hourly rate, rejecting negative values.
    pub fn set_hourly_rate(&mut self, rate: Decimal) -> PayrollResult<()> {
        if rate < Decimal::ZERO {
            return Err(PayrollError::InvalidEmployee {
                field: "hourly_rate".to_string(),
                message: "cannot be negative".to_string(),
            });
        }
        self.hourly_rate = rate;
        Ok(())
    }

    /// Updates the three fixed monthly allowances, rejecting negatives.
    pub fn set_allowances(
        &mut self,
        meal: Decimal,
        transport: Decimal,
        clothing: Decimal,
    ) -> PayrollResult<()> {
        for (field, value) in [
            ("meal_allowance", meal),
            ("transport_allowance", transport),
            ("clothing_allowance", clothing),
        ] {
            if value < Decimal::ZERO {
                return Err(PayrollError::InvalidEmployee {
                    field: field.to_string(),
                    message: "cannot be negative".to_string(),
                });
            }
        }
        self.meal_allowance = meal;
        self.transport_allowance = transport;
        self.clothing_allowance = clothing;
        Ok(())
    }
}
