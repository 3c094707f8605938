//! Withholding-tax calculation.
//!
//! Tax is a progressive marginal-bracket formula: each bracket carries a
//! lower threshold, the tax accumulated by the lower brackets, and the
//! marginal rate applied to the excess over the threshold. At or below
//! the first threshold no tax is withheld.

use rust_decimal::Decimal;

/// One row of the progressive tax schedule.
#[derive(Debug, Clone, Copy)]
struct TaxBracket {
    /// Lower threshold; the bracket applies to gross pay above it.
    threshold: Decimal,
    /// Tax accumulated from all lower brackets.
    base: Decimal,
    /// Marginal rate on the excess over the threshold.
    rate: Decimal,
}

/// The tax schedule as ordered rows, lowest threshold first.
fn tax_brackets() -> [TaxBracket; 5] {
    [
        TaxBracket {
            threshold: Decimal::new(20833, 0),
            base: Decimal::ZERO,
            rate: Decimal::new(20, 2),
        },
        TaxBracket {
            threshold: Decimal::new(33333, 0),
            base: Decimal::new(2500, 0),
            rate: Decimal::new(25, 2),
        },
        TaxBracket {
            threshold: Decimal::new(66667, 0),
            base: Decimal::new(1083333, 2),
            rate: Decimal::new(30, 2),
        },
        TaxBracket {
            threshold: Decimal::new(166667, 0),
            base: Decimal::new(4083333, 2),
            rate: Decimal::new(32, 2),
        },
        TaxBracket {
            threshold: Decimal::new(666667, 0),
            base: Decimal::new(20083333, 2),
            rate: Decimal::new(35, 2),
        },
    ]
}

/// Returns the withholding tax for a period's gross pay.
///
/// Finds the highest bracket whose threshold the gross pay exceeds and
/// returns `base + (gross − threshold) × rate`; zero when gross pay is
/// at or below the first threshold.
///
/// # Example
///
/// ```
/// use payroll_engine::deductions::withholding_tax;
/// use rust_decimal::Decimal;
///
/// // Below the first threshold: no tax.
/// assert_eq!(withholding_tax(Decimal::new(1600, 0)), Decimal::ZERO);
///
/// // 25,000 falls in the 20% bracket: (25000 - 20833) * 0.20
/// assert_eq!(withholding_tax(Decimal::new(25000, 0)), Decimal::new(83340, 2));
/// ```
pub fn withholding_tax(gross_pay: Decimal) -> Decimal {
    tax_brackets()
        .iter()
        .rev()
        .find(|bracket| gross_pay > bracket.threshold)
        .map(|bracket| bracket.base + (gross_pay - bracket.threshold) * bracket.rate)
        .unwrap_or(Decimal::ZERO)
}
