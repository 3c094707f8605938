//! Housing-fund contribution calculation.

use rust_decimal::Decimal;

/// Returns the housing-fund contribution rate (2% of gross pay).
pub fn housing_fund_rate() -> Decimal {
    Decimal::new(2, 2)
}

/// Returns the fixed maximum housing-fund contribution per period.
pub fn housing_fund_cap() -> Decimal {
    Decimal::new(100, 0)
}

/// Returns the housing-fund contribution for a period's gross pay.
///
/// Two percent of gross pay, capped at 100 currency units:
/// `min(gross × rate, cap)`. The cap is reached at a gross pay of 5,000.
///
/// # Example
///
/// ```
/// use payroll_engine::deductions::housing_fund_contribution;
/// use rust_decimal::Decimal;
///
/// assert_eq!(
///     housing_fund_contribution(Decimal::new(1600, 0)),
///     Decimal::new(3200, 2)
/// );
/// assert_eq!(
///     housing_fund_contribution(Decimal::new(90000, 0)),
///     Decimal::new(100, 0)
/// );
/// ```
pub fn housing_fund_contribution(gross_pay: Decimal) -> Decimal {
    (gross_pay * housing_fund_rate()).min(housing_fund_cap())
}
