use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::{Length, Power};

use crate::models::thermal::fin::core::InvalidParameter;

/// Errors that can occur while sizing a fin to a target heat transfer rate.
#[derive(Debug, Error)]
pub enum SizingError {
    /// The fin parameters are invalid.
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameter),

    /// A semi-infinite fin transfers the same heat at every length.
    #[error("heat rate of a fin with an infinite tip does not depend on its length")]
    LengthIndependent,

    /// The configured search range is empty or not strictly positive.
    #[error("invalid length range: min={min:?}, max={max:?}")]
    InvalidLengthRange { min: Length, max: Length },

    /// The bisection solver encountered an error.
    ///
    /// This includes a target heat rate that no length in the range achieves.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best heat rate residual achieved.
        residual: Power,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
