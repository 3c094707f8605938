//! Health contribution calculation.

use rust_decimal::Decimal;

/// Returns the flat health-contribution rate (4% of gross pay).
pub fn health_contribution_rate() -> Decimal {
    Decimal::new(4, 2)
}

/// Returns the health contribution for a period's gross pay.
///
/// A flat percentage with no floor, cap, or brackets.
///
/// # Example
///
/// ```
/// use payroll_engine::deductions::health_contribution;
/// use rust_decimal::Decimal;
///
/// assert_eq!(
///     health_contribution(Decimal::new(1600, 0)),
///     Decimal::new(6400, 2)
/// );
/// ```
pub fn health_contribution(gross_pay: Decimal) -> Decimal {
    gross_pay * health_contribution_rate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    /// HC-001: four percent of gross
    #[test]
    fn test_four_percent_of_gross() {
        assert_eq!(health_contribution(dec("1600")), dec("64.00"));
        assert_eq!(health_contribution(dec("25000")), dec("1000.00"));
    }

    /// HC-002: zero gross yields zero
    #[test]
    fn test_zero_gross_yields_zero() {
        assert_eq!(health_contribution(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_rate_is_exactly_four_percent() {
        assert_eq!(health_contribution_rate(), dec("0.04"));
    }

    #[test]
    fn test_no_cap_at_large_gross() {
        assert_eq!(health_contribution(dec("1000000")), dec("40000.00"));
    }
}
