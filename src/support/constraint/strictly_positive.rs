use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is greater than zero.
///
/// Fin conductivity, convection coefficient, perimeter, cross-section area,
/// and length all carry this constraint.
///
/// # Examples
///
/// ```
/// use twine_fins::support::constraint::StrictlyPositive;
///
/// let k = StrictlyPositive::new(200.0).unwrap();
/// assert_eq!(k.into_inner(), 200.0);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Area, HeatTransfer},
        area::square_meter,
        heat_transfer::watt_per_square_meter_kelvin,
    };

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(1e-300).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn convection_coefficients() {
        let h = HeatTransfer::new::<watt_per_square_meter_kelvin>(25.0);
        assert_eq!(StrictlyPositive::new(h).unwrap().into_inner(), h);

        let h = HeatTransfer::new::<watt_per_square_meter_kelvin>(-25.0);
        assert!(StrictlyPositive::new(h).is_err());
    }

    #[test]
    fn areas() {
        let area = Area::new::<square_meter>(0.0004);
        assert_eq!(StrictlyPositive::new(area).unwrap().as_ref(), &area);

        assert!(StrictlyPositive::new(Area::new::<square_meter>(0.0)).is_err());
    }
}
