//! Closed-form steady-state fin evaluation.

use std::{array, f64::consts::PI};

use log::debug;
use uom::si::{
    area::square_meter,
    f64::{Length, Power, Ratio, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    power::watt,
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use super::{FinParameters, FinResult, FinType, SolveError, TipCondition};

/// Evaluates a fin at `N` equally spaced nodes from base to tip.
///
/// # Errors
///
/// Returns a [`SolveError`] if the base and ambient temperatures are equal or
/// if the evaluation overflows to a non-finite value.
pub(super) fn solve<const N: usize>(params: &FinParameters) -> Result<FinResult<N>, SolveError> {
    const {
        assert!(
            N >= 2,
            "a fin profile requires at least 2 nodes (base and tip)"
        );
    };

    let theta_b = params.excess_temperature()?.into_inner().get::<delta_kelvin>();
    let t_inf = params.ambient_temperature.get::<kelvin>();
    let si = Si::from(params);

    let (profile, q) = match params.fin_type {
        FinType::Rectangular => {
            let m = (si.h * si.p / (si.k * si.a_c)).sqrt();
            let ml = m * si.l;
            let sqrt_hpka = (si.h * si.p * si.k * si.a_c).sqrt();

            match params.tip_condition {
                TipCondition::Insulated => (
                    Profile::Insulated { m, l: si.l },
                    sqrt_hpka * theta_b * ml.tanh(),
                ),
                TipCondition::Convective => {
                    let biot = si.h * si.a_c / (si.k * si.p);
                    let beta = biot / m;
                    (
                        Profile::Convective { m, l: si.l, beta },
                        si.k * si.a_c * m * theta_b * convective_heat_ratio(ml, beta),
                    )
                }
                TipCondition::Infinite => (Profile::Exponential { m }, sqrt_hpka * theta_b),
            }
        }
        FinType::Triangular => (
            Profile::Linear { l: si.l },
            si.h * si.p * theta_b * si.l / 2.0,
        ),
        FinType::Pin => {
            let r = (si.a_c / PI).sqrt();
            let m = (2.0 * si.h / (si.k * r)).sqrt();
            (
                Profile::Exponential { m },
                2.0 * PI * r * si.k * theta_b * -(-m * si.l).exp_m1(),
            )
        }
    };

    let x: [f64; N] = array::from_fn(|i| si.l * (i as f64 / (N - 1) as f64));
    let temperature: [f64; N] = array::from_fn(|i| t_inf + theta_b * profile.excess_ratio(x[i]));

    if !q.is_finite() {
        return Err(SolveError::NonFinite {
            quantity: "heat transfer rate",
        });
    }
    if temperature.iter().any(|t| !t.is_finite()) {
        return Err(SolveError::NonFinite {
            quantity: "temperature",
        });
    }

    // Efficiency and effectiveness share one normalization.
    let q_max = si.h * si.p * si.l * theta_b;
    let eta = q / q_max;

    debug!(
        "{} fin ({} tip): q = {q:.6} W, efficiency = {eta:.6}",
        params.fin_type, params.tip_condition
    );

    Ok(FinResult {
        x: x.map(Length::new::<meter>),
        temperature: temperature.map(ThermodynamicTemperature::new::<kelvin>),
        q_dot: Power::new::<watt>(q),
        efficiency: Ratio::new::<ratio>(eta),
        effectiveness: Ratio::new::<ratio>(eta),
    })
}

/// Fin properties as SI scalars.
struct Si {
    k: f64,
    h: f64,
    p: f64,
    a_c: f64,
    l: f64,
}

impl From<&FinParameters> for Si {
    fn from(params: &FinParameters) -> Self {
        Self {
            k: params.conductivity.as_ref().get::<watt_per_meter_kelvin>(),
            h: params.convection.as_ref().get::<watt_per_square_meter_kelvin>(),
            p: params.perimeter.as_ref().get::<meter>(),
            a_c: params.cross_section.as_ref().get::<square_meter>(),
            l: params.length.as_ref().get::<meter>(),
        }
    }
}

/// Shape of the excess temperature `(T - T_inf) / (T_b - T_inf)` along the fin.
///
/// Hyperbolic ratios are scaled by `exp(-mL)` so they stay finite for large `mL`.
#[derive(Debug, Clone, Copy)]
enum Profile {
    /// `cosh(m(L - x)) / cosh(mL)`
    Insulated { m: f64, l: f64 },

    /// `[cosh(m(L - x)) + β sinh(m(L - x))] / [cosh(mL) + β sinh(mL)]`
    Convective { m: f64, l: f64, beta: f64 },

    /// `exp(-mx)`
    Exponential { m: f64 },

    /// `1 - x/L`
    Linear { l: f64 },
}

impl Profile {
    fn excess_ratio(self, x: f64) -> f64 {
        match self {
            Self::Insulated { m, l } => {
                ((-m * x).exp() + (-m * (2.0 * l - x)).exp()) / (1.0 + (-m * (2.0 * l)).exp())
            }
            Self::Convective { m, l, beta } => {
                let near = (-m * x).exp();
                let far = (-m * (2.0 * l - x)).exp();
                (near * (1.0 + beta) + far * (1.0 - beta))
                    / ((1.0 + beta) + (-m * (2.0 * l)).exp() * (1.0 - beta))
            }
            Self::Exponential { m } => (-m * x).exp(),
            Self::Linear { l } => 1.0 - x / l,
        }
    }
}

/// `[sinh(mL) + β cosh(mL)] / [cosh(mL) + β sinh(mL)]`, scaled like [`Profile`].
fn convective_heat_ratio(ml: f64, beta: f64) -> f64 {
    let decay = (-2.0 * ml).exp();
    ((1.0 + beta) - (1.0 - beta) * decay) / ((1.0 + beta) + (1.0 - beta) * decay)
}
