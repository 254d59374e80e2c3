//! Extensions to [`uom`].
//!
//! Fin inputs and outputs are [`uom`] quantities. Subtracting two absolute
//! temperatures is not directly supported there, so [`TemperatureDifference`]
//! provides it:
//!
//! ```
//! use twine_fins::support::units::TemperatureDifference;
//! use uom::si::{
//!     f64::ThermodynamicTemperature,
//!     temperature_interval::kelvin as delta_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let base = ThermodynamicTemperature::new::<degree_celsius>(100.0);
//! let ambient = ThermodynamicTemperature::new::<degree_celsius>(25.0);
//! let excess = base.minus(ambient);
//! assert!((excess.get::<delta_kelvin>() - 75.0).abs() < 1e-9);
//! ```

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
