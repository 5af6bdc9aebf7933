use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinAdvisorError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },
}
