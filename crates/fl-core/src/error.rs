use thiserror::Error;

pub type FlResult<T> = Result<T, FlError>;

#[derive(Error, Debug, Clone)]
pub enum FlError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Length mismatch for {what}: {left} vs {right}")]
    LengthMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
