use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::RenoPlanError;
use crate::types::{Money, Rate};
use crate::RenoPlanResult;

/// Property price and the transaction fee it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseQuote {
    pub price: Money,
    pub fee: Money,
}

/// Solve `P + P * fee_rate = disposable` for the property price.
///
/// A negative fee rate is treated as zero and a funding shortfall yields a
/// price of zero, never a negative one.
pub fn solve_purchase_price(disposable: Money, fee_rate: Rate) -> Money {
    let price = disposable / (Decimal::ONE + fee_rate.max(Decimal::ZERO));
    price.max(Decimal::ZERO)
}

/// Price plus the fee charged on it.
pub fn quote_purchase(disposable: Money, fee_rate: Rate) -> RenoPlanResult<PurchaseQuote> {
    let price = solve_purchase_price(disposable, fee_rate);
    let fee = price
        .checked_mul(fee_rate)
        .ok_or_else(|| RenoPlanError::overflow("transaction fee"))?;
    Ok(PurchaseQuote { price, fee })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_solves_fee_inclusive_budget() {
        let q = quote_purchase(dec!(5400), dec!(0.08)).unwrap();
        assert_eq!(q.price, dec!(5000));
        assert_eq!(q.fee, dec!(400));
        assert_eq!(q.price + q.fee, dec!(5400));
    }

    #[test]
    fn test_shortfall_clamps_to_zero() {
        assert_eq!(solve_purchase_price(dec!(-500), dec!(0.08)), Decimal::ZERO);
        let q = quote_purchase(dec!(-1_000_000), dec!(0.08)).unwrap();
        assert_eq!(q.price, Decimal::ZERO);
        assert_eq!(q.fee, Decimal::ZERO);
    }

    #[test]
    fn test_negative_fee_rate_ignored_in_divisor() {
        assert_eq!(solve_purchase_price(dec!(1000), dec!(-0.5)), dec!(1000));
    }

    #[test]
    fn test_zero_fee_rate() {
        let q = quote_purchase(dec!(2500), Decimal::ZERO).unwrap();
        assert_eq!(q.price, dec!(2500));
        assert_eq!(q.fee, Decimal::ZERO);
    }
}
