use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Length, Power},
    length::meter,
    power::watt,
};

use crate::models::thermal::fin::core::controls;

/// Solver configuration for sizing a fin to a target heat transfer rate.
#[derive(Debug, Clone, Copy)]
pub struct SizingConfig {
    /// Shortest fin length considered.
    pub min_length: Length,

    /// Longest fin length considered.
    pub max_length: Length,

    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the fin length.
    pub length_tol: Length,

    /// Absolute tolerance on the heat rate residual (achieved - target).
    pub q_dot_tol: Power,
}

impl Default for SizingConfig {
    /// Searches the fin length control range.
    fn default() -> Self {
        Self {
            min_length: Length::new::<meter>(controls::L.min),
            max_length: Length::new::<meter>(controls::L.max),
            max_iters: 100,
            length_tol: Length::new::<meter>(1e-12),
            q_dot_tol: Power::new::<watt>(1e-12),
        }
    }
}

impl SizingConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.length_tol.get::<meter>(),
            x_rel_tol: 0.0,
            residual_tol: self.q_dot_tol.get::<watt>(),
        }
    }

    /// Returns the length bracket in meters.
    pub(super) fn bracket(&self) -> [f64; 2] {
        [self.min_length.get::<meter>(), self.max_length.get::<meter>()]
    }
}
