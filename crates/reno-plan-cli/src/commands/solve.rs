use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use reno_plan_core::purchase_plan::{
    loan_capacity, monthly_payment_from_total_loan, validate_rate_and_term,
};
use reno_plan_core::{round_amount, round_payment, PlanConfig};

/// Arguments for the payment -> loan solve
#[derive(Args)]
pub struct LoanCapacityArgs {
    /// Monthly repayment (ten-thousand yen)
    #[arg(long)]
    pub monthly: Decimal,

    /// Repayment per bonus, twice a year
    #[arg(long, default_value = "0")]
    pub bonus: Decimal,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Decimal,

    /// Loan term in years
    #[arg(long)]
    pub years: u32,
}

/// Arguments for the loan -> payment solve
#[derive(Args)]
pub struct MonthlyPaymentArgs {
    /// Target loan (ten-thousand yen)
    #[arg(long)]
    pub total_loan: Decimal,

    /// Repayment per bonus, twice a year
    #[arg(long, default_value = "0")]
    pub bonus: Decimal,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Decimal,

    /// Loan term in years
    #[arg(long)]
    pub years: u32,
}

/// Arguments for amount normalisation
#[derive(Args)]
pub struct NormalizeArgs {
    /// Amount as typed on the form
    #[arg(allow_hyphen_values = true)]
    pub amount: Decimal,
}

pub fn run_loan_capacity(args: LoanCapacityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    validate_rate_and_term(args.rate, args.years)?;
    let total_loan = loan_capacity(args.monthly, args.bonus, args.rate, args.years)?;
    Ok(json!({
        "result": {
            "total_loan": round_amount(total_loan),
            "monthly_payment": args.monthly,
            "bonus_payment": args.bonus,
        }
    }))
}

pub fn run_monthly_payment(args: MonthlyPaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    validate_rate_and_term(args.rate, args.years)?;
    let monthly =
        monthly_payment_from_total_loan(args.total_loan, args.bonus, args.rate, args.years)?;
    Ok(json!({
        "result": {
            "monthly_payment": round_payment(monthly),
            "total_loan": args.total_loan,
            "bonus_payment": args.bonus,
        }
    }))
}

pub fn run_normalize(args: NormalizeArgs, config: &PlanConfig) -> Result<Value, Box<dyn std::error::Error>> {
    let normalized = config.unit_policy.normalize(Some(args.amount));
    Ok(json!({
        "result": {
            "input": args.amount,
            "value": normalized.value,
            "corrected": normalized.corrected,
        }
    }))
}
