use serde_json::Value;
use std::io::{self, Read};

/// Read a piped plan from stdin, as JSON or, failing that, YAML.
/// Returns None when stdin is a TTY or the pipe is empty.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_piped(&buffer)
}

fn parse_piped(buffer: &str) -> Result<Option<Value>, Box<dyn std::error::Error>> {
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => Ok(Some(value)),
        Err(json_err) => {
            let value: Value = serde_yaml::from_str(trimmed)
                .map_err(|_| format!("stdin is neither valid JSON nor YAML: {json_err}"))?;
            Ok(Some(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pipe_is_none() {
        assert!(parse_piped("  \n").unwrap().is_none());
    }

    #[test]
    fn test_json_and_yaml_agree() {
        let json = parse_piped(r#"{"self_funds": 300, "renovation_mode": "full"}"#)
            .unwrap()
            .unwrap();
        let yaml = parse_piped("self_funds: 300\nrenovation_mode: full\n")
            .unwrap()
            .unwrap();
        assert_eq!(json, yaml);
    }
}
