pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "calculators")]
pub mod calculators;

#[cfg(feature = "analytics")]
pub mod analytics;

#[cfg(feature = "planning")]
pub mod planning;

pub use error::FinAdvisorError;
pub use types::*;

/// Standard result type for all finadvisor operations
pub type FinAdvisorResult<T> = Result<T, FinAdvisorError>;
