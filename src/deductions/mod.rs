//! Statutory deduction rule engine.
//!
//! Pure, stateless functions mapping a single pay period's gross pay to
//! each mandatory withholding: the stepped social-insurance table, the
//! flat health contribution, the capped housing-fund contribution, and
//! the progressive withholding tax. Each rule is independently callable
//! and takes no state beyond the gross-pay argument.

mod health;
mod housing_fund;
mod social_insurance;
mod withholding_tax;

pub use health::{health_contribution, health_contribution_rate};
pub use housing_fund::{housing_fund_cap, housing_fund_contribution, housing_fund_rate};
pub use social_insurance::{ceiling_contribution, social_insurance_contribution};
pub use withholding_tax::withholding_tax;

use rust_decimal::Decimal;

/// Returns the sum of all four statutory deductions for a gross pay.
///
/// # Example
///
/// ```
/// use payroll_engine::deductions::total_deductions;
/// use rust_decimal::Decimal;
///
/// // 135.00 social insurance + 64.00 health + 32.00 housing fund + 0 tax
/// assert_eq!(
///     total_deductions(Decimal::new(1600, 0)),
///     Decimal::new(23100, 2)
/// );
/// ```
pub fn total_deductions(gross_pay: Decimal) -> Decimal {
    social_insurance_contribution(gross_pay)
        + health_contribution(gross_pay)
        + housing_fund_contribution(gross_pay)
        + withholding_tax(gross_pay)
}
