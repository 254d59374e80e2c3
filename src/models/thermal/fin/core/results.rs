//! Results types for fin evaluation.

use std::fmt;

use uom::si::{
    f64::{Length, Power, Ratio, ThermodynamicTemperature},
    length::meter,
    power::watt,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

/// Temperature profile and performance of a fin.
///
/// Node arrays run from the base (0) to the tip (N-1) at equal spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct FinResult<const N: usize = { super::DEFAULT_NODES }> {
    /// Distance from the base of each node.
    pub x: [Length; N],

    /// Temperature at each node.
    pub temperature: [ThermodynamicTemperature; N],

    /// Total heat transfer rate from the fin to the fluid.
    ///
    /// Negative when the fluid is hotter than the base.
    pub q_dot: Power,

    /// Fin efficiency, `q / (h·P·L·(T_b - T_inf))`.
    pub efficiency: Ratio,

    /// Fin effectiveness.
    ///
    /// Computed with the same normalization as [`efficiency`](Self::efficiency).
    pub effectiveness: Ratio,
}

impl<const N: usize> FinResult<N> {
    /// Fin length, the position of the last node.
    #[must_use]
    pub fn length(&self) -> Length {
        self.x[N - 1]
    }

    /// Temperature at the fin tip.
    #[must_use]
    pub fn tip_temperature(&self) -> ThermodynamicTemperature {
        self.temperature[N - 1]
    }

    /// Iterates over `(x [m], T [°C])` pairs for plotting.
    pub fn profile_points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.x
            .iter()
            .zip(&self.temperature)
            .map(|(x, t)| [x.get::<meter>(), t.get::<degree_celsius>()])
    }

    /// Returns a human-readable summary of the heat rate and performance ratios.
    #[must_use]
    pub fn report(&self) -> Report {
        Report {
            q_dot: self.q_dot.get::<watt>(),
            efficiency: self.efficiency.get::<ratio>(),
            effectiveness: self.effectiveness.get::<ratio>(),
        }
    }
}

/// Console summary of a [`FinResult`].
///
/// The heat rate is shown with two decimals and the ratios with three.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    q_dot: f64,
    efficiency: f64,
    effectiveness: f64,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Heat transfer from fin: {:.2} W", self.q_dot)?;
        writeln!(f, "Fin efficiency: {:.3}", self.efficiency)?;
        write!(f, "Fin effectiveness: {:.3}", self.effectiveness)
    }
}
