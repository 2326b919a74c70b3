//! Error types for fluid property lookups.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum FluidError {
    #[error("Temperature {value_c} °C outside table range {min_c}..{max_c} °C")]
    OutOfRange {
        value_c: f64,
        min_c: f64,
        max_c: f64,
    },

    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },
}

pub type FluidResult<T> = Result<T, FluidError>;
