//! Fin models.
//!
//! This module computes the steady-state temperature profile, heat transfer
//! rate, efficiency, and effectiveness of a single fin, and provides a
//! [`twine_core::Model`] adapter in [`Fin`].
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_fins::models::thermal::fin::{Fin, FinInputs, FinParameters};
//!
//! let inputs = FinInputs {
//!     fin_type: "pin".into(),
//!     ..FinInputs::default()
//! };
//! let params = FinParameters::from_inputs(&inputs).unwrap();
//!
//! let fin: Fin<50> = Fin;
//! let result = fin.call(&params).unwrap();
//! assert!(result.temperature.windows(2).all(|w| w[1] < w[0]));
//! ```

mod core;

pub use self::core::{
    DEFAULT_NODES, FinInputs, FinParameters, FinResult, FinType, InvalidParameter, Parameter,
    Report, SizingConfig, SizingError, SolveError, TipCondition, X_AXIS_LABEL, Y_AXIS_LABEL,
    controls, length_for_heat_rate, plot_title, solve, solve_nodes,
};

use twine_core::Model;

/// A fin model evaluated at `N` equally spaced nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fin<const N: usize = DEFAULT_NODES>;

impl<const N: usize> Model for Fin<N> {
    type Input = FinParameters;
    type Output = FinResult<N>;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        solve_nodes::<N>(input)
    }
}
