use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use reno_plan_core::purchase_plan::{calculate, CalculationInput, RenovationMode};
use reno_plan_core::PlanConfig;

use crate::input;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RenovationModeArg {
    /// Estimate from floor area
    Full,
    /// Use --renovation-cost
    Manual,
}

impl From<RenovationModeArg> for RenovationMode {
    fn from(mode: RenovationModeArg) -> Self {
        match mode {
            RenovationModeArg::Full => RenovationMode::Full,
            RenovationModeArg::Manual => RenovationMode::Manual,
        }
    }
}

/// Arguments for a full purchase plan
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct CalcArgs {
    /// Self funds (ten-thousand yen)
    #[arg(long)]
    pub self_funds: Option<Decimal>,

    /// Affordable monthly repayment (ten-thousand yen)
    #[arg(long, alias = "monthly")]
    pub monthly_payment: Option<Decimal>,

    /// Target loan; used when no monthly payment is given
    #[arg(long)]
    pub total_loan: Option<Decimal>,

    /// Annual interest rate in percent (e.g. 0.8)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Loan term in years (1-50)
    #[arg(long)]
    pub years: Option<u32>,

    /// Floor area needed (square metres)
    #[arg(long)]
    pub area: Option<u32>,

    /// How the renovation budget is set
    #[arg(long, value_enum, default_value = "full")]
    pub renovation_mode: RenovationModeArg,

    /// Renovation cost for manual mode (ten-thousand yen)
    #[arg(long)]
    pub renovation_cost: Option<Decimal>,

    /// Repayment per bonus, twice a year (ten-thousand yen)
    #[arg(long, default_value = "0")]
    pub bonus: Decimal,

    /// Free-form note echoed back in the result
    #[arg(long, default_value = "")]
    pub memo: String,

    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_calc(args: CalcArgs, config: &PlanConfig) -> Result<Value, Box<dyn std::error::Error>> {
    let plan_input: CalculationInput = if let Some(ref path) = args.input {
        input::file::read_input(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        CalculationInput {
            self_funds: args
                .self_funds
                .ok_or("--self-funds is required (or provide --input)")?,
            monthly_payment: args.monthly_payment,
            total_loan_input: args.total_loan,
            interest_rate_percent: args.rate.ok_or("--rate is required (or provide --input)")?,
            required_area: args.area.ok_or("--area is required (or provide --input)")?,
            loan_term_years: args.years.ok_or("--years is required (or provide --input)")?,
            renovation_mode: args.renovation_mode.into(),
            renovation_cost_manual: args.renovation_cost,
            bonus_payment: args.bonus,
            memo: args.memo,
        }
    };

    if plan_input.monthly_payment.is_none() && plan_input.total_loan_input.is_none() {
        tracing::warn!("neither monthly payment nor total loan given; planning with no loan");
    }

    let result = calculate(&plan_input, config)?;
    Ok(serde_json::to_value(result)?)
}
