pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Display label for a result field. Unknown keys are shown as-is.
pub fn field_label(key: &str) -> &str {
    match key {
        "monthly_payment_out" | "monthly_payment" => "Monthly payment (10k JPY)",
        "total_loan" => "Total loan (10k JPY)",
        "renovation_cost" => "Renovation cost, excl. tax (10k JPY)",
        "renovation_cost_with_tax" => "Renovation cost, incl. tax (10k JPY)",
        "fee" => "Transaction fee (10k JPY)",
        "purchasable_price" => "Purchasable price (10k JPY)",
        "disposable_funds" => "Disposable funds (10k JPY)",
        "bonus_payment" => "Bonus payment (10k JPY)",
        "solve_direction" => "Solved from",
        "memo" => "Memo",
        other => other,
    }
}

/// Render a scalar JSON value for text output. Decimals arrive as strings.
pub fn format_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
