use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Identifies a single fin parameter in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Conductivity,
    Convection,
    Perimeter,
    CrossSection,
    Length,
    BaseTemperature,
    AmbientTemperature,
    ExcessTemperature,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Conductivity => "thermal conductivity (k)",
            Self::Convection => "convection coefficient (h)",
            Self::Perimeter => "perimeter (P)",
            Self::CrossSection => "cross-section area (A_c)",
            Self::Length => "fin length (L)",
            Self::BaseTemperature => "base temperature (T_b)",
            Self::AmbientTemperature => "ambient temperature (T_inf)",
            Self::ExcessTemperature => "excess temperature (T_b - T_inf)",
        })
    }
}

/// A fin parameter failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidParameter {
    /// A numeric parameter is outside its physical domain.
    #[error("invalid {parameter}: {source}")]
    OutOfDomain {
        parameter: Parameter,
        #[source]
        source: ConstraintError,
    },

    #[error("unknown fin type `{0}` (expected rectangular, triangular, or pin)")]
    UnknownFinType(String),

    #[error("unknown tip condition `{0}` (expected insulated, convective, or infinite)")]
    UnknownTipCondition(String),
}

impl InvalidParameter {
    pub(crate) fn out_of_domain(parameter: Parameter) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::OutOfDomain { parameter, source }
    }
}

/// Errors that can occur while evaluating a fin.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameter),

    /// The closed-form evaluation produced `NaN` or an infinity.
    ///
    /// This happens only for extreme inputs, such as infinite lengths or
    /// conductivities.
    #[error("evaluation produced a non-finite {quantity}")]
    NonFinite { quantity: &'static str },
}
