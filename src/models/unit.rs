//! Height display units

use crate::physics::meters_to_feet;

/// Unit used when rendering the height. The stored height is always meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayUnit {
    #[default]
    Meters,
    Feet,
}

impl DisplayUnit {
    /// The other unit
    pub fn toggled(self) -> Self {
        match self {
            DisplayUnit::Meters => DisplayUnit::Feet,
            DisplayUnit::Feet => DisplayUnit::Meters,
        }
    }

    /// Suffix appended to rendered values
    pub fn suffix(&self) -> &'static str {
        match self {
            DisplayUnit::Meters => "m",
            DisplayUnit::Feet => "ft",
        }
    }

    /// Convert a canonical meter value into this unit
    pub fn convert(&self, meters: f64) -> f64 {
        match self {
            DisplayUnit::Meters => meters,
            DisplayUnit::Feet => meters_to_feet(meters),
        }
    }
}
