use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchoolError {
    #[error("Invalid time format: {0}")]
    InvalidFormat(String),

    #[error("Invalid interval: end {end} must be later than start {start}")]
    InvalidInterval { start: String, end: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

impl SchoolError {
    /// True for errors caused by a single bad record rather than by the
    /// storage layer. Callers use this to decide whether to skip or abort.
    pub fn is_invalid_record(&self) -> bool {
        matches!(
            self,
            SchoolError::InvalidFormat(_)
                | SchoolError::InvalidInterval { .. }
                | SchoolError::Validation(_)
        )
    }
}

pub type SchoolResult<T> = Result<T, SchoolError>;
