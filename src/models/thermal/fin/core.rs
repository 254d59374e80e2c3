//! Closed-form steady-state fin analysis.
//!
//! A fin is evaluated on a linear array of equally spaced nodes running from
//! the base (node 0) to the tip (node N-1).

mod closed_form;
pub mod controls;
mod error;
mod input;
mod kind;
mod presentation;
mod results;
mod sizing;

#[cfg(test)]
mod test_support;

pub use error::{InvalidParameter, Parameter, SolveError};
pub use input::{FinInputs, FinParameters};
pub use kind::{FinType, TipCondition};
pub use presentation::{X_AXIS_LABEL, Y_AXIS_LABEL, plot_title};
pub use results::{FinResult, Report};
pub use sizing::{SizingConfig, SizingError};

use uom::si::f64::Power;

/// Number of profile nodes used when no node count is given.
pub const DEFAULT_NODES: usize = 200;

/// Evaluates a fin at [`DEFAULT_NODES`] equally spaced positions.
///
/// # Errors
///
/// Returns a [`SolveError`] if the base and ambient temperatures are equal or
/// if the evaluation produces a non-finite value.
pub fn solve(params: &FinParameters) -> Result<FinResult, SolveError> {
    closed_form::solve::<DEFAULT_NODES>(params)
}

/// Evaluates a fin at `N` equally spaced positions.
///
/// `N` must be at least 2; this is enforced at compile time.
///
/// # Errors
///
/// Returns a [`SolveError`] if the base and ambient temperatures are equal or
/// if the evaluation produces a non-finite value.
pub fn solve_nodes<const N: usize>(params: &FinParameters) -> Result<FinResult<N>, SolveError> {
    closed_form::solve::<N>(params)
}

/// Finds the fin length that transfers `target` heat, holding everything else fixed.
///
/// The length in `params` is ignored. The returned result is evaluated at
/// the found length; read it with [`FinResult::length`].
///
/// # Errors
///
/// Returns a [`SizingError`] if the parameters are invalid, if the fin has an
/// infinite tip, if the target lies outside the configured length range, or
/// if the solver fails to converge.
pub fn length_for_heat_rate<const N: usize>(
    params: &FinParameters,
    target: Power,
    config: &SizingConfig,
) -> Result<FinResult<N>, SizingError> {
    sizing::length_for_heat_rate::<N>(params, target, config)
}
