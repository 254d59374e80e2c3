//! Categorical fin inputs: geometry and tip boundary condition.

use std::{fmt, str::FromStr};

use super::InvalidParameter;

/// Fin geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FinType {
    /// Straight fin of uniform cross section.
    #[default]
    Rectangular,

    /// Straight fin with a linear temperature profile from base to tip.
    Triangular,

    /// Cylindrical pin with radius derived from the cross-section area.
    Pin,
}

impl FinType {
    /// All fin types, in control order.
    pub const ALL: [Self; 3] = [Self::Rectangular, Self::Triangular, Self::Pin];

    /// Returns the lowercase identifier used by controls and parsing.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rectangular => "rectangular",
            Self::Triangular => "triangular",
            Self::Pin => "pin",
        }
    }

    /// Returns the capitalized name used in plot titles.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rectangular => "Rectangular",
            Self::Triangular => "Triangular",
            Self::Pin => "Pin",
        }
    }

    /// Returns `true` if the tip condition affects this geometry.
    #[must_use]
    pub fn uses_tip_condition(self) -> bool {
        matches!(self, Self::Rectangular)
    }
}

impl fmt::Display for FinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FinType {
    type Err = InvalidParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| InvalidParameter::UnknownFinType(s.to_owned()))
    }
}

/// Boundary condition at the free end of a rectangular fin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TipCondition {
    /// Adiabatic tip.
    #[default]
    Insulated,

    /// Convection from the tip face to the ambient fluid.
    Convective,

    /// Semi-infinite fin; the tip reaches ambient temperature.
    Infinite,
}

impl TipCondition {
    /// All tip conditions, in control order.
    pub const ALL: [Self; 3] = [Self::Insulated, Self::Convective, Self::Infinite];

    /// Returns the lowercase identifier used by controls and parsing.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Insulated => "insulated",
            Self::Convective => "convective",
            Self::Infinite => "infinite",
        }
    }

    /// Returns the capitalized name used in plot titles.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Insulated => "Insulated",
            Self::Convective => "Convective",
            Self::Infinite => "Infinite",
        }
    }
}

impl fmt::Display for TipCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TipCondition {
    type Err = InvalidParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tip| tip.as_str() == s)
            .ok_or_else(|| InvalidParameter::UnknownTipCondition(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_fin_type() {
        for kind in FinType::ALL {
            assert_eq!(kind.as_str().parse::<FinType>(), Ok(kind));
        }
    }

    #[test]
    fn parses_every_tip_condition() {
        for tip in TipCondition::ALL {
            assert_eq!(tip.to_string().parse::<TipCondition>(), Ok(tip));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "unknown".parse::<FinType>(),
            Err(InvalidParameter::UnknownFinType("unknown".into()))
        );
        assert_eq!(
            "Insulated".parse::<TipCondition>(),
            Err(InvalidParameter::UnknownTipCondition("Insulated".into()))
        );
    }

    #[test]
    fn defaults_match_controls() {
        assert_eq!(FinType::default(), FinType::Rectangular);
        assert_eq!(TipCondition::default(), TipCondition::Insulated);
    }
}
