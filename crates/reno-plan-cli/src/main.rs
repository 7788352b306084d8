mod commands;
mod input;
mod logging;
mod output;

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rust_decimal::Decimal;
use std::process;

use commands::plan::CalcArgs;
use commands::solve::{LoanCapacityArgs, MonthlyPaymentArgs, NormalizeArgs};
use reno_plan_core::purchase_plan::UnitPolicy;
use reno_plan_core::PlanConfig;

/// Purchase planning for a used property plus renovation
#[derive(Parser)]
#[command(
    name = "reno-plan",
    version,
    about = "Purchase planning for a used property plus renovation",
    long_about = "Works out how much property you can buy once a renovation is paid for. \
                  Starts from self funds and either an affordable monthly repayment or a \
                  target loan, and reports loan, renovation cost with tax, transaction fee \
                  and purchasable price. All amounts are in ten-thousand-yen units."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    #[command(flatten)]
    config: ConfigArgs,
}

/// Process-wide rates, resolved once at startup
#[derive(Args)]
pub struct ConfigArgs {
    /// Transaction fee as a fraction of the price (e.g. 0.08 for 8%)
    #[arg(long, env = "FEE_RATE", global = true)]
    pub fee_rate: Option<Decimal>,

    /// Consumption tax on renovation (e.g. 0.10 for 10%)
    #[arg(long, env = "TAX_RATE", global = true)]
    pub tax_rate: Option<Decimal>,

    /// Treat every amount as ten-thousand-yen units, even very large ones
    #[arg(long, global = true)]
    pub no_unit_correction: bool,
}

impl ConfigArgs {
    pub fn resolve(&self) -> PlanConfig {
        let mut config = PlanConfig::default();
        if let Some(fee_rate) = self.fee_rate {
            config = config.with_fee_rate(fee_rate);
        }
        if let Some(tax_rate) = self.tax_rate {
            config = config.with_tax_rate(tax_rate);
        }
        if self.no_unit_correction {
            config = config.with_unit_policy(UnitPolicy::disabled());
        }
        config
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a full purchase plan
    Calc(CalcArgs),
    /// Loan supported by a monthly payment and bonus schedule
    LoanCapacity(LoanCapacityArgs),
    /// Monthly payment needed to repay a target loan
    MonthlyPayment(MonthlyPaymentArgs),
    /// Show how an amount is interpreted (yen vs ten-thousand-yen units)
    Normalize(NormalizeArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    logging::init_tracing();
    let cli = Cli::parse();
    let config = cli.config.resolve();
    tracing::debug!(fee_rate = %config.fee_rate, tax_rate = %config.tax_rate, "configuration resolved");

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Calc(args) => commands::plan::run_calc(args, &config),
        Commands::LoanCapacity(args) => commands::solve::run_loan_capacity(args),
        Commands::MonthlyPayment(args) => commands::solve::run_monthly_payment(args),
        Commands::Normalize(args) => commands::solve::run_normalize(args, &config),
        Commands::Version => {
            println!("reno-plan {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
