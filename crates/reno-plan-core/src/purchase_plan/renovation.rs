use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::RenoPlanError;
use crate::types::{Money, Rate};
use crate::RenoPlanResult;

/// Full-renovation cost per square metre, in ten-thousand-yen units.
pub const FULL_RENOVATION_COST_PER_SQM: Money = dec!(12);

/// Fixed portion of a full renovation (kitchen, bath, design fees).
pub const FULL_RENOVATION_BASE_COST: Money = dec!(350);

/// How the renovation budget is determined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenovationMode {
    /// Cost estimated from floor area with the linear full-renovation model
    #[default]
    Full,
    /// Cost supplied by the user
    Manual,
}

/// Linear full-renovation model: `area * 12 + 350`.
pub fn full_renovation_cost(area_sqm: u32) -> Money {
    Decimal::from(area_sqm) * FULL_RENOVATION_COST_PER_SQM + FULL_RENOVATION_BASE_COST
}

/// Renovation cost grossed up by a flat consumption tax.
pub fn renovation_cost_with_tax(cost: Money, tax_rate: Rate) -> RenoPlanResult<Money> {
    Decimal::ONE
        .checked_add(tax_rate)
        .and_then(|gross| cost.checked_mul(gross))
        .ok_or_else(|| RenoPlanError::overflow("tax-inclusive renovation cost"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cost_for_60_sqm() {
        assert_eq!(full_renovation_cost(60), dec!(1070));
    }

    #[test]
    fn test_full_cost_is_base_at_zero_area() {
        assert_eq!(full_renovation_cost(0), FULL_RENOVATION_BASE_COST);
    }

    #[test]
    fn test_tax_inclusive_cost() {
        assert_eq!(renovation_cost_with_tax(dec!(1070), dec!(0.10)).unwrap(), dec!(1177));
        assert_eq!(renovation_cost_with_tax(dec!(800), Decimal::ZERO).unwrap(), dec!(800));
    }

    #[test]
    fn test_tax_on_huge_cost_is_error() {
        let err = renovation_cost_with_tax(Decimal::MAX, dec!(0.10)).unwrap_err();
        assert!(matches!(err, RenoPlanError::FinancialImpossibility(_)));
    }

    #[test]
    fn test_mode_serde_names() {
        let mode: RenovationMode = serde_json::from_str("\"manual\"").unwrap();
        assert_eq!(mode, RenovationMode::Manual);
        assert_eq!(serde_json::to_string(&RenovationMode::Full).unwrap(), "\"full\"");
    }
}
