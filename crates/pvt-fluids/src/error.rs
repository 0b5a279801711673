//! Fluid property errors.

use pvt_core::PvtError;
use thiserror::Error;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during PVT property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (negative density, water cut >= 1, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Input is outside a correlation's published validity range.
    #[error("{what} is outside the correlation validity range: {value} (limit {limit})")]
    OutOfRange {
        what: &'static str,
        value: f64,
        limit: f64,
    },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// An iterative solve exhausted its iteration budget with no fallback.
    #[error("Convergence failed for {what}")]
    ConvergenceFailed { what: &'static str },
}

impl From<FluidError> for PvtError {
    fn from(err: FluidError) -> Self {
        match err {
            FluidError::InvalidArg { what } => PvtError::InvalidArg { what },
            other => PvtError::Invariant {
                what: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FluidError::NonPhysical { what: "water cut" };
        assert!(err.to_string().contains("water cut"));

        let err = FluidError::OutOfRange {
            what: "pressure",
            value: 17570.0,
            limit: 17569.0,
        };
        assert!(err.to_string().contains("17569"));
    }

    #[test]
    fn error_to_pvt_error() {
        let err = FluidError::ConvergenceFailed { what: "test" };
        let core: PvtError = err.into();
        assert!(matches!(core, PvtError::Invariant { .. }));
    }
}
