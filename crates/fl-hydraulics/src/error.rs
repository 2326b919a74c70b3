//! Error types for the hydraulics core.

use fl_core::FlError;
use fl_pump::PumpError;
use thiserror::Error;

/// Errors raised by the analysis pipeline.
///
/// Only true precondition violations are errors; the recoverable conditions
/// of the domain (friction non-convergence, no suitable pump) are encoded in
/// the result values instead.
#[derive(Error, Debug, Clone)]
pub enum HydraulicsError {
    #[error("Domain precondition violated: {what}")]
    Domain { what: &'static str },

    #[error("Numeric error: {0}")]
    Core(#[from] FlError),

    #[error("Pump selection error: {0}")]
    Pump(#[from] PumpError),

    #[error("Fluid property error: {0}")]
    Fluid(#[from] fl_fluids::FluidError),
}

pub type HydraulicsResult<T> = Result<T, HydraulicsError>;
