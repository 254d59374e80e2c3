//! Ranges for interactive fin controls.
//!
//! Each numeric input has a slider-style range with a step size and a default.
//! Values are in the display units used by [`FinInputs`](super::FinInputs).

/// A bounded, stepped numeric control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl ControlRange {
    /// Clamps `value` into `[min, max]` and rounds it to the nearest step from `min`.
    ///
    /// `NaN` snaps to the default.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }

    /// Returns `true` if `value` lies within `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Thermal conductivity, W/m·K.
pub const K: ControlRange = ControlRange {
    min: 10.0,
    max: 400.0,
    step: 5.0,
    default: 200.0,
};

/// Convection coefficient, W/m²·K.
pub const H: ControlRange = ControlRange {
    min: 5.0,
    max: 200.0,
    step: 5.0,
    default: 25.0,
};

/// Perimeter, m.
pub const P: ControlRange = ControlRange {
    min: 0.01,
    max: 0.1,
    step: 0.005,
    default: 0.04,
};

/// Cross-section area, m².
pub const A_C: ControlRange = ControlRange {
    min: 0.0001,
    max: 0.01,
    step: 0.0001,
    default: 0.0004,
};

/// Fin length, m.
pub const L: ControlRange = ControlRange {
    min: 0.01,
    max: 0.5,
    step: 0.01,
    default: 0.1,
};

/// Base temperature, °C.
pub const T_B: ControlRange = ControlRange {
    min: 50.0,
    max: 200.0,
    step: 5.0,
    default: 100.0,
};

/// Ambient temperature, °C.
pub const T_INF: ControlRange = ControlRange {
    min: 0.0,
    max: 50.0,
    step: 1.0,
    default: 25.0,
};

/// Looks up a numeric control by its input name (`k`, `h`, `p`, `a_c`, `l`, `t_b`, `t_inf`).
#[must_use]
pub fn by_name(name: &str) -> Option<&'static ControlRange> {
    match name {
        "k" => Some(&K),
        "h" => Some(&H),
        "p" => Some(&P),
        "a_c" => Some(&A_C),
        "l" => Some(&L),
        "t_b" => Some(&T_B),
        "t_inf" => Some(&T_INF),
        _ => None,
    }
}
