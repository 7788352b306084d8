use colored::Colorize;
use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{field_label, format_scalar};

/// Format the result as a two-column table, then warnings and methodology.
pub fn print_table(value: &Value) {
    let envelope = match value {
        Value::Object(map) => map,
        _ => {
            println!("{}", value);
            return;
        }
    };

    let result = envelope.get("result").unwrap_or(value);
    if let Value::Object(res_map) = result {
        let mut builder = Builder::default();
        builder.push_record(["Item", "Value"]);
        for (key, val) in res_map {
            if key == "memo" && format_scalar(val).is_empty() {
                continue;
            }
            builder.push_record([field_label(key), &format_scalar(val)]);
        }
        println!("{}", Table::from(builder));
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\n{}", "Warnings:".yellow().bold());
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}
