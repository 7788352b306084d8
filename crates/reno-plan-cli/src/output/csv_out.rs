use serde_json::Value;
use std::io;

use super::format_scalar;

/// Write the result as `field,value` rows, followed by one `warning` row per
/// warning.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());
    let _ = wtr.write_record(["field", "value"]);

    let envelope = value.as_object();
    let result = envelope.and_then(|m| m.get("result")).unwrap_or(value);

    match result {
        Value::Object(map) => {
            for (key, val) in map {
                let _ = wtr.write_record([key.as_str(), &format_scalar(val)]);
            }
        }
        other => {
            let _ = wtr.write_record(["value", &format_scalar(other)]);
        }
    }

    if let Some(Value::Array(warnings)) = envelope.and_then(|m| m.get("warnings")) {
        for w in warnings {
            let _ = wtr.write_record(["warning", &format_scalar(w)]);
        }
    }

    let _ = wtr.flush();
}
