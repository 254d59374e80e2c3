//! # Twine Fins
//!
//! Extended-surface (fin) heat transfer models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Fin models, including a [`twine_core::Model`] implementation.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quick start
//!
//! ```
//! use twine_fins::models::thermal::fin::{self, FinInputs, FinParameters};
//! use uom::si::power::watt;
//!
//! let params = FinParameters::from_inputs(&FinInputs::default()).unwrap();
//! let result = fin::solve(&params).unwrap();
//!
//! assert!((result.q_dot.get::<watt>() - 7.202).abs() < 1e-3);
//! println!("{}", result.report());
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
