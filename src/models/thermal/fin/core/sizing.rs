//! Iterative solver for the fin length that achieves a target heat rate.
//!
//! The fin length is varied by bisection until the closed-form heat rate
//! matches the target.

mod config;
mod error;
mod problem;

pub use config::SizingConfig;
pub use error::SizingError;

use log::{debug, trace};
use twine_solvers::equation::bisection;
use uom::si::{f64::Power, length::meter, power::watt};

use super::{FinParameters, FinResult, FinType, TipCondition};

use problem::{SizingModel, SizingProblem};

/// Finds the fin length whose heat transfer rate equals `target`.
///
/// The length of `params` is ignored; every other parameter is held fixed.
///
/// # Errors
///
/// Returns [`SizingError`] if the parameters are invalid, if the heat rate
/// does not depend on length, if no length in the configured range reaches
/// the target, or if the solver fails to converge.
pub(super) fn length_for_heat_rate<const N: usize>(
    params: &FinParameters,
    target: Power,
    config: &SizingConfig,
) -> Result<FinResult<N>, SizingError> {
    const {
        assert!(
            N >= 2,
            "a fin profile requires at least 2 nodes (base and tip)"
        );
    };

    if params.fin_type == FinType::Rectangular && params.tip_condition == TipCondition::Infinite {
        return Err(SizingError::LengthIndependent);
    }

    params.excess_temperature()?;

    let [min, max] = config.bracket();
    if !(min > 0.0 && max > min) {
        return Err(SizingError::InvalidLengthRange {
            min: config.min_length,
            max: config.max_length,
        });
    }

    let model = SizingModel::<N>::new(params);
    let problem = SizingProblem::<N>::new(target);

    let solution = bisection::solve(
        &model,
        &problem,
        [min, max],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            trace!("sizing {} fin: trying L = {} m", params.fin_type, event.x());
            // A failed evaluation means the length overflowed the closed-form
            // solution, so treat it as too long.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(SizingError::MaxIters {
            residual: Power::new::<watt>(solution.residual),
            iters: solution.iters,
        });
    }

    let result = solution.snapshot.output;
    debug!(
        "sized {} fin to L = {:.6} m for q = {:.6} W in {} iterations",
        params.fin_type,
        result.length().get::<meter>(),
        target.get::<watt>(),
        solution.iters
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Length, length::meter};

    use crate::models::thermal::fin::core::{closed_form::solve, test_support::params};
    use crate::support::constraint::StrictlyPositive;

    #[test]
    fn roundtrip() {
        for (fin_type, tip) in [
            (FinType::Rectangular, TipCondition::Insulated),
            (FinType::Rectangular, TipCondition::Convective),
            (FinType::Triangular, TipCondition::Insulated),
            (FinType::Pin, TipCondition::Insulated),
        ] {
            let baseline = params(fin_type, tip)
                .with_length(StrictlyPositive::new(Length::new::<meter>(0.23)).unwrap());
            let target = solve::<2>(&baseline).unwrap().q_dot;

            let result = length_for_heat_rate::<2>(
                &params(fin_type, tip),
                target,
                &SizingConfig::default(),
            )
            .expect("sizing should converge");

            assert_relative_eq!(result.length().get::<meter>(), 0.23, epsilon = 1e-9);
            assert_relative_eq!(
                result.q_dot.get::<watt>(),
                target.get::<watt>(),
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn infinite_tip_is_length_independent() {
        let result = length_for_heat_rate::<2>(
            &params(FinType::Rectangular, TipCondition::Infinite),
            Power::new::<watt>(10.0),
            &SizingConfig::default(),
        );
        assert!(matches!(result, Err(SizingError::LengthIndependent)));
    }

    #[test]
    fn unreachable_target_is_an_error() {
        // The default triangular fin dissipates at most 18.75 W at L = 0.5 m.
        let result = length_for_heat_rate::<2>(
            &params(FinType::Triangular, TipCondition::Insulated),
            Power::new::<watt>(100.0),
            &SizingConfig::default(),
        );
        assert!(matches!(result, Err(SizingError::Bisection(_))));
    }

    #[test]
    fn rejects_empty_length_range() {
        let config = SizingConfig {
            min_length: Length::new::<meter>(0.3),
            max_length: Length::new::<meter>(0.2),
            ..SizingConfig::default()
        };
        let result = length_for_heat_rate::<2>(
            &params(FinType::Pin, TipCondition::Insulated),
            Power::new::<watt>(100.0),
            &config,
        );
        assert!(matches!(
            result,
            Err(SizingError::InvalidLengthRange { .. })
        ));
    }
}
