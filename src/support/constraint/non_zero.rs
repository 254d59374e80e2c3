use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is not zero.
///
/// The excess temperature of a fin (`T_b - T_inf`) carries this constraint:
/// it normalizes the efficiency, so it may take either sign but not zero.
///
/// # Examples
///
/// ```
/// use twine_fins::support::constraint::NonZero;
///
/// let y = NonZero::new(-15.0).unwrap();
/// assert_eq!(y.into_inner(), -15.0);
///
/// assert!(NonZero::new(0.0).is_err());
/// assert!(NonZero::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonZero;

impl NonZero {
    /// Constructs a [`Constrained<T, NonZero>`] if the value is not zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, NonZero>, ConstraintError> {
        Constrained::<T, NonZero>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Less) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin};

    #[test]
    fn temperature_intervals() {
        let heating = TemperatureInterval::new::<kelvin>(75.0);
        assert!(NonZero::new(heating).is_ok());

        let cooling = TemperatureInterval::new::<kelvin>(-15.0);
        assert!(NonZero::new(cooling).is_ok());

        let none = TemperatureInterval::new::<kelvin>(0.0);
        assert_eq!(NonZero::new(none), Err(ConstraintError::Zero));

        let nan = TemperatureInterval::new::<kelvin>(f64::NAN);
        assert_eq!(NonZero::new(nan), Err(ConstraintError::NotANumber));
    }
}
