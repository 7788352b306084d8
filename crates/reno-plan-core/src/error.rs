use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenoPlanError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid configuration: {field} — {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Financial impossibility: {0}")]
    FinancialImpossibility(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl RenoPlanError {
    pub(crate) fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        RenoPlanError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_config(field: &str, reason: impl Into<String>) -> Self {
        RenoPlanError::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Result exceeds the range of a 96-bit decimal.
    pub(crate) fn overflow(context: &str) -> Self {
        RenoPlanError::FinancialImpossibility(format!("{context} overflows the decimal range"))
    }
}

impl From<serde_json::Error> for RenoPlanError {
    fn from(e: serde_json::Error) -> Self {
        RenoPlanError::SerializationError(e.to_string())
    }
}
