use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::RenoPlanError;
use crate::purchase_plan::units::UnitPolicy;
use crate::types::Rate;
use crate::RenoPlanResult;

/// Transaction fee charged on the property price (brokerage, registration,
/// stamp duty), as a fraction of the price.
pub const DEFAULT_FEE_RATE: Rate = dec!(0.08);

/// Consumption tax applied to renovation work.
pub const DEFAULT_TAX_RATE: Rate = dec!(0.10);

/// Process-wide settings for a plan calculation. Resolved once by the caller
/// and passed into every call; the core never reads the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanConfig {
    #[serde(default = "default_fee_rate")]
    pub fee_rate: Rate,
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Rate,
    #[serde(default)]
    pub unit_policy: UnitPolicy,
}

fn default_fee_rate() -> Rate {
    DEFAULT_FEE_RATE
}

fn default_tax_rate() -> Rate {
    DEFAULT_TAX_RATE
}

impl Default for PlanConfig {
    fn default() -> Self {
        PlanConfig {
            fee_rate: DEFAULT_FEE_RATE,
            tax_rate: DEFAULT_TAX_RATE,
            unit_policy: UnitPolicy::default(),
        }
    }
}

impl PlanConfig {
    pub fn with_fee_rate(mut self, fee_rate: Rate) -> Self {
        self.fee_rate = fee_rate;
        self
    }

    pub fn with_tax_rate(mut self, tax_rate: Rate) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    pub fn with_unit_policy(mut self, unit_policy: UnitPolicy) -> Self {
        self.unit_policy = unit_policy;
        self
    }

    pub fn validate(&self) -> RenoPlanResult<()> {
        if self.fee_rate < Decimal::ZERO || self.fee_rate > Decimal::ONE {
            return Err(RenoPlanError::invalid_config(
                "fee_rate",
                "Fee rate must be between 0 and 1",
            ));
        }
        if self.tax_rate < Decimal::ZERO || self.tax_rate > Decimal::ONE {
            return Err(RenoPlanError::invalid_config(
                "tax_rate",
                "Tax rate must be between 0 and 1",
            ));
        }
        self.unit_policy.validate()
    }
}
