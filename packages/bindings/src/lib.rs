use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::Deserialize;

use reno_plan_core::purchase_plan::{self, CalculationInput};
use reno_plan_core::PlanConfig;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_config(config_json: Option<String>) -> NapiResult<PlanConfig> {
    match config_json {
        Some(json) if !json.trim().is_empty() => {
            serde_json::from_str(&json).map_err(to_napi_error)
        }
        _ => Ok(PlanConfig::default()),
    }
}

// ---------------------------------------------------------------------------
// Purchase plan
// ---------------------------------------------------------------------------

/// Full plan for the form page. `config_json` may carry `fee_rate`,
/// `tax_rate` and `unit_policy`; omitted fields take their defaults.
#[napi]
pub fn calculate_purchase_plan(
    input_json: String,
    config_json: Option<String>,
) -> NapiResult<String> {
    let input: CalculationInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let config = parse_config(config_json)?;
    let output = purchase_plan::calculate(&input, &config).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Single solves
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct LoanCapacityRequest {
    monthly: Decimal,
    #[serde(default)]
    bonus: Decimal,
    rate_percent: Decimal,
    years: u32,
}

#[derive(Deserialize)]
struct MonthlyPaymentRequest {
    total_loan: Decimal,
    #[serde(default)]
    bonus: Decimal,
    rate_percent: Decimal,
    years: u32,
}

#[napi]
pub fn loan_capacity(input_json: String) -> NapiResult<String> {
    let req: LoanCapacityRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    purchase_plan::validate_rate_and_term(req.rate_percent, req.years).map_err(to_napi_error)?;
    let total_loan =
        purchase_plan::loan_capacity(req.monthly, req.bonus, req.rate_percent, req.years)
            .map_err(to_napi_error)?;
    serde_json::to_string(&total_loan).map_err(to_napi_error)
}

#[napi]
pub fn monthly_payment_from_total_loan(input_json: String) -> NapiResult<String> {
    let req: MonthlyPaymentRequest = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    purchase_plan::validate_rate_and_term(req.rate_percent, req.years).map_err(to_napi_error)?;
    let monthly = purchase_plan::monthly_payment_from_total_loan(
        req.total_loan,
        req.bonus,
        req.rate_percent,
        req.years,
    )
    .map_err(to_napi_error)?;
    serde_json::to_string(&monthly).map_err(to_napi_error)
}

/// Returns `{"value": "...", "corrected": bool}` under the default policy.
#[napi]
pub fn normalize_amount(amount: String) -> NapiResult<String> {
    let amount: Decimal = amount.trim().parse().map_err(to_napi_error)?;
    let normalized = purchase_plan::normalize_amount(Some(amount));
    serde_json::to_string(&normalized).map_err(to_napi_error)
}
