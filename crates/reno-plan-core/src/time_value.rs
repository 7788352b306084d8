use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::RenoPlanError;
use crate::types::{Money, Percent, Rate};
use crate::RenoPlanResult;

/// Months between two bonus repayments (summer and winter bonus).
pub const BONUS_INTERVAL_MONTHS: u32 = 6;

const MONTHS_PER_YEAR: u32 = 12;

/// Per-month rate from a nominal annual percentage: `percent / 100 / 12`.
///
/// Simple division, no compounding conversion.
pub fn monthly_rate(annual_percent: Percent) -> Rate {
    annual_percent / dec!(100) / Decimal::from(MONTHS_PER_YEAR)
}

/// Number of monthly periods in a loan term.
pub fn term_months(years: u32) -> u32 {
    years.saturating_mul(MONTHS_PER_YEAR)
}

/// One-period discount multiplier `1 / (1 + i)`.
fn period_discount(rate: Rate) -> Decimal {
    Decimal::ONE
        .checked_div(Decimal::ONE + rate)
        .unwrap_or(Decimal::ZERO)
}

/// Discount factor `(1 + i)^-n` via iterative multiplication (avoids powd drift).
///
/// Multiplying by `1 / (1 + i)` keeps the running product at or below one for
/// non-negative rates, so long terms underflow towards zero instead of
/// overflowing.
pub fn discount_factor(rate: Rate, periods: u32) -> Decimal {
    let v = period_discount(rate);
    let mut factor = Decimal::ONE;
    for _ in 0..periods {
        factor = match factor.checked_mul(v) {
            Some(next) => next,
            None => return Decimal::MAX,
        };
    }
    factor
}

/// Present value of `periods` equal end-of-month payments.
///
/// `monthly * (1 - (1+i)^-n) / i`, or the plain sum `monthly * n` when the
/// rate is zero.
pub fn pv_annuity(monthly: Money, rate: Rate, periods: u32) -> RenoPlanResult<Money> {
    if periods == 0 {
        return Ok(Decimal::ZERO);
    }
    let pv = if rate.is_zero() {
        monthly.checked_mul(Decimal::from(periods))
    } else {
        Decimal::ONE
            .checked_sub(discount_factor(rate, periods))
            .and_then(|annuity| monthly.checked_mul(annuity))
            .and_then(|scaled| scaled.checked_div(rate))
    };
    pv.ok_or_else(|| RenoPlanError::overflow("annuity present value"))
}

/// Present value of a bonus repayment made every `every_months` months, at
/// months `every_months, 2 * every_months, ...` up to and including `periods`.
///
/// A partial interval at the end of the term carries no bonus.
pub fn pv_bonuses(
    bonus_per_event: Money,
    rate: Rate,
    periods: u32,
    every_months: u32,
) -> RenoPlanResult<Money> {
    if bonus_per_event <= Decimal::ZERO || periods == 0 || every_months == 0 {
        return Ok(Decimal::ZERO);
    }
    if rate.is_zero() {
        return bonus_per_event
            .checked_mul(Decimal::from(periods / every_months))
            .ok_or_else(|| RenoPlanError::overflow("bonus present value"));
    }

    let v = period_discount(rate);
    let mut factor = Decimal::ONE;
    let mut pv = Decimal::ZERO;
    for month in 1..=periods {
        factor = factor
            .checked_mul(v)
            .ok_or_else(|| RenoPlanError::overflow("bonus discount factor"))?;
        if month % every_months == 0 {
            pv = bonus_per_event
                .checked_mul(factor)
                .and_then(|event| pv.checked_add(event))
                .ok_or_else(|| RenoPlanError::overflow("bonus present value"))?;
        }
    }
    Ok(pv)
}

/// Level payment that amortises `present_value` over `periods` months.
///
/// Inverse of [`pv_annuity`]: `pv * i / (1 - (1+i)^-n)`. Falls back to
/// straight-line `pv / n` at a zero rate, or when the rate is so small that
/// the discount denominator rounds to zero.
pub fn annuity_payment(present_value: Money, rate: Rate, periods: u32) -> RenoPlanResult<Money> {
    if periods == 0 {
        return Ok(Decimal::ZERO);
    }
    let straight_line = present_value / Decimal::from(periods);
    if rate.is_zero() {
        return Ok(straight_line);
    }

    let denominator = Decimal::ONE - discount_factor(rate, periods);
    if denominator.is_zero() {
        return Ok(straight_line);
    }
    present_value
        .checked_mul(rate)
        .and_then(|interest| interest.checked_div(denominator))
        .ok_or_else(|| RenoPlanError::overflow("annuity payment"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_monthly_rate_from_percent() {
        // 1.2% a year -> 0.1% a month
        assert_eq!(monthly_rate(dec!(1.2)), dec!(0.001));
        assert_eq!(monthly_rate(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_discount_factor_basic() {
        let df = discount_factor(dec!(0.10), 2);
        // 1 / 1.21 = 0.826446...
        assert!((df - dec!(0.826446)).abs() < dec!(0.000001));
        assert_eq!(discount_factor(dec!(0.05), 0), Decimal::ONE);
    }

    #[test]
    fn test_pv_annuity_zero_periods() {
        assert_eq!(pv_annuity(dec!(10), dec!(0.01), 0).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_pv_annuity_zero_rate_is_plain_sum() {
        assert_eq!(pv_annuity(dec!(10), Decimal::ZERO, 420).unwrap(), dec!(4200));
        assert_eq!(pv_annuity(dec!(2.5), Decimal::ZERO, 12).unwrap(), dec!(30));
    }

    #[test]
    fn test_pv_annuity_basic() {
        // 100 a period for 10 periods at 8%: ~671.01
        let pv = pv_annuity(dec!(100), dec!(0.08), 10).unwrap();
        assert!((pv - dec!(671.008)).abs() < dec!(0.01));
    }

    #[test]
    fn test_pv_annuity_zero_payment() {
        assert_eq!(pv_annuity(Decimal::ZERO, dec!(0.01), 360).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_pv_annuity_zero_rate_overflow_is_error() {
        let err = pv_annuity(Decimal::MAX, Decimal::ZERO, 420).unwrap_err();
        assert!(matches!(err, RenoPlanError::FinancialImpossibility(_)));
    }

    #[test]
    fn test_pv_bonuses_zero_rate_counts_events() {
        assert_eq!(pv_bonuses(dec!(10), Decimal::ZERO, 420, 6).unwrap(), dec!(700));
        // 17 months -> bonuses at 6 and 12 only
        assert_eq!(pv_bonuses(dec!(10), Decimal::ZERO, 17, 6).unwrap(), dec!(20));
    }

    #[test]
    fn test_pv_bonuses_non_positive_bonus() {
        assert_eq!(pv_bonuses(Decimal::ZERO, dec!(0.01), 120, 6).unwrap(), Decimal::ZERO);
        assert_eq!(pv_bonuses(dec!(-5), dec!(0.01), 120, 6).unwrap(), Decimal::ZERO);
        assert_eq!(pv_bonuses(dec!(5), dec!(0.01), 0, 6).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_pv_bonuses_strict_boundary() {
        // n = 11: only the month-6 bonus is inside the term
        let i = dec!(0.01);
        let expected = dec!(10) * discount_factor(i, 6);
        assert_eq!(pv_bonuses(dec!(10), i, 11, 6).unwrap(), expected);
        // n = 12 picks up the second event exactly on the boundary
        let expected = expected + dec!(10) * discount_factor(i, 12);
        let pv = pv_bonuses(dec!(10), i, 12, 6).unwrap();
        assert!((pv - expected).abs() < dec!(0.0000000001));
    }

    #[test]
    fn test_pv_bonuses_overflow_is_error() {
        assert!(pv_bonuses(Decimal::MAX, Decimal::ZERO, 420, 6).is_err());
        assert!(pv_bonuses(Decimal::MAX, dec!(0.0001), 24, 6).is_err());
    }

    #[test]
    fn test_annuity_payment_inverts_pv() {
        let i = dec!(0.005);
        let pv = pv_annuity(dec!(12.34), i, 360).unwrap();
        let pmt = annuity_payment(pv, i, 360).unwrap();
        assert!((pmt - dec!(12.34)).abs() < dec!(0.0000001));
    }

    #[test]
    fn test_annuity_payment_zero_rate() {
        assert_eq!(annuity_payment(dec!(1200), Decimal::ZERO, 120).unwrap(), dec!(10));
        assert_eq!(annuity_payment(dec!(1200), dec!(0.01), 0).unwrap(), Decimal::ZERO);
    }
}
