use std::fmt;

/// Errors from the scenario calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// Product-mix shares sum to zero, so no normalization exists
    ZeroProductMix,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::ZeroProductMix => {
                write!(f, "product-mix shares sum to zero and cannot be normalized")
            }
        }
    }
}

impl std::error::Error for CalcError {}

pub type Result<T> = std::result::Result<T, CalcError>;
