use thiserror::Error;

/// Validation and contract errors exposed by `exrate-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("currency code cannot be empty")]
    EmptyCurrency,
    #[error("currency must be a 3-letter alphabetic ISO code: '{value}'")]
    InvalidCurrency { value: String },

    #[error("year-month key must be YYYYMM: '{value}'")]
    InvalidYearMonthKey { value: String },
    #[error("month {month} is out of range 1..=12")]
    InvalidMonth { month: u8 },
}
