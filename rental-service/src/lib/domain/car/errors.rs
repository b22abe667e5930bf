use thiserror::Error;

/// Error for pagination parameters outside the accepted range
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("Page must be at least 1")]
    PageOutOfRange,

    #[error("Page size must be between 1 and {max}, got {actual}")]
    PageSizeOutOfRange { max: u32, actual: u32 },
}

/// Error for car attribute validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CarAttributeError {
    #[error("Car name must not be empty")]
    EmptyName,

    #[error("Car price must not be negative, got {0}")]
    NegativePrice(i64),

    #[error("Unknown car size: {0}")]
    UnknownSize(String),
}

/// Top-level error for car catalogue operations
#[derive(Debug, Clone, Error)]
pub enum CarError {
    #[error("Invalid page: {0}")]
    InvalidPage(#[from] PageError),

    #[error("Invalid car: {0}")]
    InvalidCar(#[from] CarAttributeError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
