//! Fin parameter types.

use crate::support::{
    constraint::{Constrained, ConstraintError, NonZero, StrictlyPositive},
    units::TemperatureDifference,
};
use uom::si::{
    area::square_meter,
    f64::{
        Area, HeatTransfer, Length, TemperatureInterval, ThermalConductivity,
        ThermodynamicTemperature,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::{FinType, InvalidParameter, Parameter, TipCondition, controls};

/// Validated inputs for a single fin evaluation.
///
/// Positivity of the geometric and transport properties is enforced by the
/// field types. The base and ambient temperatures must differ; that is
/// checked when the fin is solved, or up front by [`FinParameters::from_inputs`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinParameters {
    /// Thermal conductivity of the fin material (`k`).
    pub conductivity: Constrained<ThermalConductivity, StrictlyPositive>,

    /// Convective heat transfer coefficient (`h`).
    pub convection: Constrained<HeatTransfer, StrictlyPositive>,

    /// Cross-section perimeter (`P`).
    pub perimeter: Constrained<Length, StrictlyPositive>,

    /// Cross-section area (`A_c`).
    pub cross_section: Constrained<Area, StrictlyPositive>,

    /// Fin length from base to tip (`L`).
    pub length: Constrained<Length, StrictlyPositive>,

    /// Temperature at the fin base (`T_b`).
    pub base_temperature: ThermodynamicTemperature,

    /// Temperature of the surrounding fluid (`T_inf`).
    pub ambient_temperature: ThermodynamicTemperature,

    pub fin_type: FinType,

    /// Only used when `fin_type` is [`FinType::Rectangular`].
    pub tip_condition: TipCondition,
}

impl FinParameters {
    /// Validates raw control values and converts them to SI quantities.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidParameter`] if a numeric value is non-positive or
    /// `NaN`, if the base and ambient temperatures are equal, or if either
    /// categorical value is not recognized.
    pub fn from_inputs(inputs: &FinInputs) -> Result<Self, InvalidParameter> {
        use InvalidParameter as E;

        let fin_type = inputs.fin_type.parse::<FinType>()?;
        let tip_condition = inputs.tip_condition.parse::<TipCondition>()?;

        let params = Self {
            conductivity: StrictlyPositive::new(ThermalConductivity::new::<watt_per_meter_kelvin>(
                inputs.k,
            ))
            .map_err(E::out_of_domain(Parameter::Conductivity))?,
            convection: StrictlyPositive::new(HeatTransfer::new::<watt_per_square_meter_kelvin>(
                inputs.h,
            ))
            .map_err(E::out_of_domain(Parameter::Convection))?,
            perimeter: StrictlyPositive::new(Length::new::<meter>(inputs.p))
                .map_err(E::out_of_domain(Parameter::Perimeter))?,
            cross_section: StrictlyPositive::new(Area::new::<square_meter>(inputs.a_c))
                .map_err(E::out_of_domain(Parameter::CrossSection))?,
            length: StrictlyPositive::new(Length::new::<meter>(inputs.l))
                .map_err(E::out_of_domain(Parameter::Length))?,
            base_temperature: celsius(inputs.t_b, Parameter::BaseTemperature)?,
            ambient_temperature: celsius(inputs.t_inf, Parameter::AmbientTemperature)?,
            fin_type,
            tip_condition,
        };

        params.excess_temperature()?;
        Ok(params)
    }

    /// Returns the base-to-ambient temperature difference (`T_b - T_inf`).
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidParameter`] if the difference is zero or `NaN`.
    pub fn excess_temperature(
        &self,
    ) -> Result<Constrained<TemperatureInterval, NonZero>, InvalidParameter> {
        NonZero::new(self.base_temperature.minus(self.ambient_temperature))
            .map_err(InvalidParameter::out_of_domain(Parameter::ExcessTemperature))
    }

    /// Returns a copy of these parameters with a different fin length.
    #[must_use]
    pub fn with_length(self, length: Constrained<Length, StrictlyPositive>) -> Self {
        Self { length, ..self }
    }
}

fn celsius(value: f64, parameter: Parameter) -> Result<ThermodynamicTemperature, InvalidParameter> {
    if value.is_nan() {
        return Err(InvalidParameter::OutOfDomain {
            parameter,
            source: ConstraintError::NotANumber,
        });
    }
    Ok(ThermodynamicTemperature::new::<degree_celsius>(value))
}

/// Raw, unvalidated fin inputs in display units.
///
/// This is the shape a control surface or command line produces: plain
/// numbers and the categorical choices as strings. Convert with
/// [`FinParameters::from_inputs`].
#[derive(Debug, Clone, PartialEq)]
pub struct FinInputs {
    /// Thermal conductivity, W/m·K.
    pub k: f64,

    /// Convection coefficient, W/m²·K.
    pub h: f64,

    /// Perimeter, m.
    pub p: f64,

    /// Cross-section area, m².
    pub a_c: f64,

    /// Fin length, m.
    pub l: f64,

    /// Base temperature, °C.
    pub t_b: f64,

    /// Ambient temperature, °C.
    pub t_inf: f64,

    pub fin_type: String,
    pub tip_condition: String,
}

impl Default for FinInputs {
    fn default() -> Self {
        Self {
            k: controls::K.default,
            h: controls::H.default,
            p: controls::P.default,
            a_c: controls::A_C.default,
            l: controls::L.default,
            t_b: controls::T_B.default,
            t_inf: controls::T_INF.default,
            fin_type: FinType::default().to_string(),
            tip_condition: TipCondition::default().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::temperature_interval::kelvin as delta_kelvin;

    #[test]
    fn defaults_convert_to_si() {
        let params = FinParameters::from_inputs(&FinInputs::default()).unwrap();

        assert_relative_eq!(
            params.conductivity.as_ref().get::<watt_per_meter_kelvin>(),
            200.0
        );
        assert_relative_eq!(params.cross_section.as_ref().get::<square_meter>(), 0.0004);
        assert_relative_eq!(params.base_temperature.get::<degree_celsius>(), 100.0);
        assert_eq!(params.fin_type, FinType::Rectangular);
        assert_eq!(params.tip_condition, TipCondition::Insulated);

        let excess = params.excess_temperature().unwrap().into_inner();
        assert_relative_eq!(excess.get::<delta_kelvin>(), 75.0, epsilon = 1e-9);
    }

    #[test]
    fn rejects_non_positive_values() {
        let inputs = FinInputs {
            k: 0.0,
            ..FinInputs::default()
        };
        assert_eq!(
            FinParameters::from_inputs(&inputs),
            Err(InvalidParameter::OutOfDomain {
                parameter: Parameter::Conductivity,
                source: ConstraintError::Zero,
            })
        );

        let inputs = FinInputs {
            l: -0.1,
            ..FinInputs::default()
        };
        assert_eq!(
            FinParameters::from_inputs(&inputs),
            Err(InvalidParameter::OutOfDomain {
                parameter: Parameter::Length,
                source: ConstraintError::Negative,
            })
        );

        let inputs = FinInputs {
            h: f64::NAN,
            ..FinInputs::default()
        };
        assert!(matches!(
            FinParameters::from_inputs(&inputs),
            Err(InvalidParameter::OutOfDomain {
                parameter: Parameter::Convection,
                source: ConstraintError::NotANumber,
            })
        ));
    }

    #[test]
    fn rejects_equal_temperatures() {
        let inputs = FinInputs {
            t_b: 40.0,
            t_inf: 40.0,
            ..FinInputs::default()
        };
        assert!(matches!(
            FinParameters::from_inputs(&inputs),
            Err(InvalidParameter::OutOfDomain {
                parameter: Parameter::ExcessTemperature,
                ..
            })
        ));
    }

    #[test]
    fn rejects_unknown_fin_type() {
        let inputs = FinInputs {
            fin_type: "unknown".into(),
            ..FinInputs::default()
        };
        assert_eq!(
            FinParameters::from_inputs(&inputs),
            Err(InvalidParameter::UnknownFinType("unknown".into()))
        );
    }

    #[test]
    fn with_length_replaces_only_length() {
        let params = FinParameters::from_inputs(&FinInputs::default()).unwrap();
        let longer = params.with_length(StrictlyPositive::new(Length::new::<meter>(0.3)).unwrap());

        assert_relative_eq!(longer.length.as_ref().get::<meter>(), 0.3);
        assert_eq!(longer.perimeter, params.perimeter);
        assert_eq!(longer.fin_type, params.fin_type);
    }
}
