use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values, in ten-thousand-yen units (万円). Wraps Decimal to
/// prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.08 = 8%). Never as percentages.
pub type Rate = Decimal;

/// Nominal annual percentage exactly as entered on the form (0.8 = 0.8%).
pub type Percent = Decimal;

/// Decimal places reported for loan, cost, fee and price figures.
pub const AMOUNT_DECIMAL_PLACES: u32 = 1;

/// Decimal places reported for the derived monthly payment.
pub const PAYMENT_DECIMAL_PLACES: u32 = 2;

/// Round a reported amount. Banker's rounding, so exact midpoints go to the
/// even neighbour.
pub fn round_amount(value: Money) -> Money {
    value.round_dp(AMOUNT_DECIMAL_PLACES)
}

/// Round a reported monthly payment.
pub fn round_payment(value: Money) -> Money {
    value.round_dp(PAYMENT_DECIMAL_PLACES)
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
