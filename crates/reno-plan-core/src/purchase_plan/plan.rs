use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::PlanConfig;
use crate::error::RenoPlanError;
use crate::purchase_plan::loan::{solve_loan, validate_rate_and_term, SolveDirection};
use crate::purchase_plan::pricing::quote_purchase;
use crate::purchase_plan::renovation::{
    full_renovation_cost, renovation_cost_with_tax, RenovationMode,
};
use crate::purchase_plan::units::AmountField;
use crate::types::{round_amount, round_payment, with_metadata, ComputationOutput, Money, Percent};
use crate::RenoPlanResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Everything the purchase-plan form collects. Amounts are in
/// ten-thousand-yen units; oversized amounts are assumed to be yen and
/// rescaled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Cash available for the purchase
    pub self_funds: Money,
    /// Affordable monthly repayment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_payment: Option<Money>,
    /// Target loan amount; drives the solve when positive and no monthly
    /// payment is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_loan_input: Option<Money>,
    /// Nominal annual interest rate in percent (0.8 = 0.8%)
    pub interest_rate_percent: Percent,
    /// Floor area needed, in square metres
    pub required_area: u32,
    /// Loan term in years, 1 to 50
    pub loan_term_years: u32,
    pub renovation_mode: RenovationMode,
    /// Renovation budget; required in manual mode, ignored otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renovation_cost_manual: Option<Money>,
    /// Extra repayment per bonus, made twice a year; zero or less means none
    #[serde(default)]
    pub bonus_payment: Money,
    #[serde(default)]
    pub memo: String,
}

/// Derived plan figures, rounded for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Monthly repayment (given, or solved from the target loan)
    pub monthly_payment_out: Money,
    /// Loan amount (solved from the payments, or the given target)
    pub total_loan: Money,
    /// Renovation cost before tax
    pub renovation_cost: Money,
    pub renovation_cost_with_tax: Money,
    /// Transaction fee on the purchasable price
    pub fee: Money,
    pub purchasable_price: Money,
    /// Self funds plus loan minus tax-inclusive renovation; negative on a shortfall
    pub disposable_funds: Money,
    pub solve_direction: String,
    pub memo: String,
}

#[derive(Serialize)]
struct PlanAssumptions<'a> {
    input: &'a CalculationInput,
    config: &'a PlanConfig,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Compute a purchase plan: loan and monthly payment, renovation budget,
/// transaction fee and the property price the remaining funds can buy.
///
/// Disposable = self funds + loan - renovation * (1 + tax)
/// Price      = max(disposable / (1 + fee_rate), 0)
pub fn calculate(
    input: &CalculationInput,
    config: &PlanConfig,
) -> RenoPlanResult<ComputationOutput<CalculationResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    // --- Validation ---
    config.validate()?;
    validate_input(input)?;

    // --- Unit normalisation, in form order ---
    let policy = &config.unit_policy;
    let self_funds =
        policy.normalize_field(AmountField::SelfFunds, Some(input.self_funds), &mut warnings);
    let monthly =
        policy.normalize_field(AmountField::MonthlyPayment, input.monthly_payment, &mut warnings);
    let total_loan_input =
        policy.normalize_field(AmountField::TotalLoan, input.total_loan_input, &mut warnings);
    let bonus =
        policy.normalize_field(AmountField::BonusPayment, Some(input.bonus_payment), &mut warnings);

    // --- Renovation ---
    let renovation_cost = match input.renovation_mode {
        RenovationMode::Full => full_renovation_cost(input.required_area),
        RenovationMode::Manual => policy.normalize_field(
            AmountField::RenovationCost,
            input.renovation_cost_manual,
            &mut warnings,
        ),
    };
    let renovation_with_tax = renovation_cost_with_tax(renovation_cost, config.tax_rate)?;

    // --- Loan / payment ---
    let direction = SolveDirection::select(monthly, total_loan_input);
    tracing::debug!(direction = direction.name(), "solving loan terms");
    let terms = solve_loan(
        direction,
        bonus,
        input.interest_rate_percent,
        input.loan_term_years,
    )?;

    if let SolveDirection::FromTotalLoan { total_loan } = direction {
        if terms.bonus_present_value > total_loan {
            warnings.push(format!(
                "Bonus repayments are worth {} today, more than the requested loan of {}; \
                 monthly payment set to 0",
                round_amount(terms.bonus_present_value),
                round_amount(total_loan)
            ));
        }
    }

    // --- Price ---
    let disposable = self_funds
        .checked_add(terms.total_loan)
        .and_then(|funds| funds.checked_sub(renovation_with_tax))
        .ok_or_else(|| RenoPlanError::overflow("disposable funds"))?;
    if disposable < Decimal::ZERO {
        tracing::debug!(%disposable, "funding shortfall; purchasable price clamped to 0");
    }
    let quote = quote_purchase(disposable, config.fee_rate)?;

    let output = CalculationResult {
        monthly_payment_out: round_payment(terms.monthly_payment),
        total_loan: round_amount(terms.total_loan),
        renovation_cost: round_amount(renovation_cost),
        renovation_cost_with_tax: round_amount(renovation_with_tax),
        fee: round_amount(quote.fee),
        purchasable_price: round_amount(quote.price),
        disposable_funds: round_amount(disposable),
        solve_direction: direction.name().to_string(),
        memo: input.memo.clone(),
    };

    let elapsed = start.elapsed().as_micros() as u64;

    Ok(with_metadata(
        "Used property + renovation purchase plan (annuity PV with semi-annual bonus, fee-inclusive price)",
        &PlanAssumptions { input, config },
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &CalculationInput) -> RenoPlanResult<()> {
    validate_rate_and_term(input.interest_rate_percent, input.loan_term_years)?;
    if input.required_area == 0 {
        return Err(RenoPlanError::invalid_input(
            "required_area",
            "Required area must be positive",
        ));
    }
    if input.self_funds < Decimal::ZERO {
        return Err(RenoPlanError::invalid_input(
            "self_funds",
            "Self funds cannot be negative",
        ));
    }
    check_non_negative("monthly_payment", input.monthly_payment)?;

    if input.renovation_mode == RenovationMode::Manual {
        if input.renovation_cost_manual.is_none() {
            return Err(RenoPlanError::invalid_input(
                "renovation_cost_manual",
                "Renovation cost is required in manual mode",
            ));
        }
        check_non_negative("renovation_cost_manual", input.renovation_cost_manual)?;
    }
    Ok(())
}

fn check_non_negative(field: &str, value: Option<Money>) -> RenoPlanResult<()> {
    match value {
        Some(v) if v < Decimal::ZERO => Err(RenoPlanError::invalid_input(
            field,
            "Amount cannot be negative",
        )),
        _ => Ok(()),
    }
}
