use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RenoPlanError;
use crate::types::Money;
use crate::RenoPlanResult;

/// Amounts at or above this are assumed to have been typed in yen.
pub const DEFAULT_YEN_THRESHOLD: Money = dec!(100000);

/// Yen per ten-thousand-yen unit.
pub const YEN_PER_UNIT: Decimal = dec!(10000);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Magnitude heuristic that catches amounts entered in yen instead of
/// ten-thousand-yen units.
///
/// 100,000 units is one billion yen, which is not a realistic figure for any
/// field of a household purchase plan, so anything at or above the threshold
/// is divided by the rescale factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPolicy {
    /// Values `>= threshold` are rescaled
    pub threshold: Money,
    /// Divisor applied to a rescaled value
    pub rescale_factor: Decimal,
    /// When false every value passes through untouched
    pub enabled: bool,
}

impl Default for UnitPolicy {
    fn default() -> Self {
        UnitPolicy {
            threshold: DEFAULT_YEN_THRESHOLD,
            rescale_factor: YEN_PER_UNIT,
            enabled: true,
        }
    }
}

/// Outcome of normalising a single amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalized {
    pub value: Money,
    pub corrected: bool,
}

impl Normalized {
    fn unchanged(value: Money) -> Self {
        Normalized {
            value,
            corrected: false,
        }
    }
}

/// Input fields the heuristic is applied to, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountField {
    SelfFunds,
    MonthlyPayment,
    TotalLoan,
    BonusPayment,
    RenovationCost,
}

impl AmountField {
    pub fn label(&self) -> &'static str {
        match self {
            AmountField::SelfFunds => "Self funds",
            AmountField::MonthlyPayment => "Monthly payment",
            AmountField::TotalLoan => "Total loan",
            AmountField::BonusPayment => "Bonus payment",
            AmountField::RenovationCost => "Renovation cost",
        }
    }
}

impl fmt::Display for AmountField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

impl UnitPolicy {
    /// A policy that never rescales.
    pub fn disabled() -> Self {
        UnitPolicy {
            enabled: false,
            ..UnitPolicy::default()
        }
    }

    pub fn validate(&self) -> RenoPlanResult<()> {
        if self.threshold <= Decimal::ZERO {
            return Err(RenoPlanError::invalid_config(
                "unit_policy.threshold",
                "Threshold must be positive",
            ));
        }
        if self.rescale_factor <= Decimal::ZERO {
            return Err(RenoPlanError::invalid_config(
                "unit_policy.rescale_factor",
                "Rescale factor must be positive",
            ));
        }
        Ok(())
    }

    /// Normalise an optional amount. A missing amount counts as zero and is
    /// never flagged.
    pub fn normalize(&self, amount: Option<Money>) -> Normalized {
        let value = match amount {
            Some(v) => v,
            None => return Normalized::unchanged(Decimal::ZERO),
        };
        if !self.enabled || value < self.threshold {
            return Normalized::unchanged(value);
        }
        match value.checked_div(self.rescale_factor) {
            Some(rescaled) => Normalized {
                value: rescaled,
                corrected: true,
            },
            None => Normalized::unchanged(value),
        }
    }

    /// Normalise `amount` and, if it was rescaled, record a warning naming
    /// the field.
    pub fn normalize_field(
        &self,
        field: AmountField,
        amount: Option<Money>,
        warnings: &mut Vec<String>,
    ) -> Money {
        let normalized = self.normalize(amount);
        if normalized.corrected {
            let original = amount.unwrap_or_default();
            tracing::debug!(%field, %original, corrected = %normalized.value, "unit correction applied");
            warnings.push(correction_warning(field, original, normalized.value));
        }
        normalized.value
    }
}

/// Normalise with the default policy.
pub fn normalize_amount(amount: Option<Money>) -> Normalized {
    UnitPolicy::default().normalize(amount)
}

fn correction_warning(field: AmountField, original: Money, corrected: Money) -> String {
    format!(
        "{field} of {} looks like a yen amount; converted to {} (ten-thousand-yen units)",
        original.normalize(),
        corrected.normalize()
    )
}
