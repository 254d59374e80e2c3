//! Problem formulation for fin sizing.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Length, Power},
    length::meter,
    power::watt,
};

use crate::models::thermal::fin::core::{
    FinParameters, FinResult, InvalidParameter, Parameter, SolveError, closed_form::solve,
};
use crate::support::constraint::StrictlyPositive;

/// Model adapter exposing the fin length as the sole input.
pub(super) struct SizingModel<'a, const N: usize> {
    params: &'a FinParameters,
}

impl<'a, const N: usize> SizingModel<'a, N> {
    pub(super) fn new(params: &'a FinParameters) -> Self {
        Self { params }
    }
}

impl<const N: usize> Model for SizingModel<'_, N> {
    type Input = Length;
    type Output = FinResult<N>;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let length = StrictlyPositive::new(*input)
            .map_err(InvalidParameter::out_of_domain(Parameter::Length))?;
        solve::<N>(&self.params.with_length(length))
    }
}

/// Equation problem definition for fin sizing.
///
/// Computes the residual as `achieved_q_dot - target_q_dot`.
pub(super) struct SizingProblem<const N: usize> {
    target: Power,
}

impl<const N: usize> SizingProblem<N> {
    pub(super) fn new(target: Power) -> Self {
        Self { target }
    }
}

impl<const N: usize> EquationProblem<1> for SizingProblem<N> {
    type Input = Length;
    type Output = FinResult<N>;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Length::new::<meter>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.q_dot.get::<watt>() - self.target.get::<watt>()])
    }
}
