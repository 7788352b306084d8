pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "purchase_plan")]
pub mod config;

#[cfg(feature = "purchase_plan")]
pub mod purchase_plan;

#[cfg(feature = "purchase_plan")]
pub use config::PlanConfig;
pub use error::RenoPlanError;
pub use types::*;

/// Standard result type for all reno-plan operations
pub type RenoPlanResult<T> = Result<T, RenoPlanError>;
