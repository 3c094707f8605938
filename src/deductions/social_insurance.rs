//! Social-insurance contribution lookup.
//!
//! The contribution is a stepped function of gross pay: an ordered table
//! of salary-band upper bounds, each mapping to a fixed contribution
//! amount, with a flat ceiling amount above the top band.

use rust_decimal::Decimal;

/// The contribution charged above the top salary band.
pub fn ceiling_contribution() -> Decimal {
    Decimal::new(63000, 2)
}

/// The contribution table as ordered (upper-bound, amount) pairs.
///
/// Bands are 1,000 currency units wide; amounts rise by 22.50 per band
/// from the 135.00 floor to 607.50 at the 24,250 bound.
fn contribution_table() -> [(Decimal, Decimal); 22] {
    [
        (Decimal::new(3250, 0), Decimal::new(13500, 2)),
        (Decimal::new(4250, 0), Decimal::new(15750, 2)),
        (Decimal::new(5250, 0), Decimal::new(18000, 2)),
        (Decimal::new(6250, 0), Decimal::new(20250, 2)),
        (Decimal::new(7250, 0), Decimal::new(22500, 2)),
        (Decimal::new(8250, 0), Decimal::new(24750, 2)),
        (Decimal::new(9250, 0), Decimal::new(27000, 2)),
        (Decimal::new(10250, 0), Decimal::new(29250, 2)),
        (Decimal::new(11250, 0), Decimal::new(31500, 2)),
        (Decimal::new(12250, 0), Decimal::new(33750, 2)),
        (Decimal::new(13250, 0), Decimal::new(36000, 2)),
        (Decimal::new(14250, 0), Decimal::new(38250, 2)),
        (Decimal::new(15250, 0), Decimal::new(40500, 2)),
        (Decimal::new(16250, 0), Decimal::new(42750, 2)),
        (Decimal::new(17250, 0), Decimal::new(45000, 2)),
        (Decimal::new(18250, 0), Decimal::new(47250, 2)),
        (Decimal::new(19250, 0), Decimal::new(49500, 2)),
        (Decimal::new(20250, 0), Decimal::new(51750, 2)),
        (Decimal::new(21250, 0), Decimal::new(54000, 2)),
        (Decimal::new(22250, 0), Decimal::new(56250, 2)),
        (Decimal::new(23250, 0), Decimal::new(58500, 2)),
        (Decimal::new(24250, 0), Decimal::new(60750, 2)),
    ]
}

/// Returns the social-insurance contribution for a period's gross pay.
///
/// Selects the first band whose upper bound is at or above the gross
/// pay; above the top band the ceiling amount applies. Monotonically
/// non-decreasing in gross pay.
///
/// Known edge: below the first band the fixed 135.00 floor can exceed a
/// very small gross pay — the statutory table has no lower proration.
///
/// # Example
///
/// ```
/// use payroll_engine::deductions::social_insurance_contribution;
/// use rust_decimal::Decimal;
///
/// assert_eq!(
///     social_insurance_contribution(Decimal::new(1600, 0)),
///     Decimal::new(13500, 2)
/// );
/// assert_eq!(
///     social_insurance_contribution(Decimal::new(30000, 0)),
///     Decimal::new(63000, 2)
/// );
/// ```
pub fn social_insurance_contribution(gross_pay: Decimal) -> Decimal {
    contribution_table()
        .iter()
        .find(|(upper_bound, _)| gross_pay <= *upper_bound)
        .map(|(_, amount)| *amount)
        .unwrap_or_else(ceiling_contribution)
}
