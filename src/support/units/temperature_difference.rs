use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Subtracts two absolute temperatures to get a temperature interval.
///
/// [`uom`] treats [`ThermodynamicTemperature`] and [`TemperatureInterval`] as
/// distinct kinds and has no subtraction between two absolute temperatures.
/// See [#380](https://github.com/iliekturtles/uom/issues/380).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    #[test]
    fn hot_base_gives_positive_excess() {
        let excess = celsius(100.0).minus(celsius(25.0));
        assert_relative_eq!(excess.get::<delta_kelvin>(), 75.0, epsilon = 1e-9);
    }

    #[test]
    fn cold_base_gives_negative_excess() {
        let excess = celsius(10.0).minus(celsius(25.0));
        assert_relative_eq!(excess.get::<delta_kelvin>(), -15.0, epsilon = 1e-9);
    }

    #[test]
    fn equal_temperatures_give_zero() {
        assert_eq!(celsius(40.0).minus(celsius(40.0)).get::<delta_kelvin>(), 0.0);
    }
}
