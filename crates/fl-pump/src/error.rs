//! Error types for pump curve handling and selection.

use fl_core::FlError;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum PumpError {
    #[error("Invalid pump curve for {pump}: {what}")]
    InvalidCurve { pump: String, what: &'static str },

    #[error("Invalid system curve: {what}")]
    InvalidSystemCurve { what: &'static str },

    #[error("Pump catalog is empty")]
    EmptyCatalog,

    #[error("No flow-range overlap between pump {pump} and the system curve")]
    NoOverlap { pump: String },

    #[error("Interpolation failed for pump {pump}")]
    Interpolation {
        pump: String,
        #[source]
        source: FlError,
    },
}

pub type PumpResult<T> = Result<T, PumpError>;
