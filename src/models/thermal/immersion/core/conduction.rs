//! Chip-to-heatsink conduction path.

use thiserror::Error;
use uom::si::f64::{Power, TemperatureInterval};
use uom::si::{power::watt, temperature_interval::kelvin};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    units::ThermalResistance,
};

/// An error returned when a [`ModuleLayout`] is degenerate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error("chip thermal resistance must be finite and strictly positive: {value:?}")]
    ChipResistance { value: ThermalResistance },
    #[error("chip count must be at least 1")]
    ChipCount,
    #[error("face count must be at least 1")]
    FaceCount,
}

/// Physical layout of the compute module's chip array.
///
/// The chip resistance is the series combination of junction-to-case and
/// case-to-heatsink resistance for one chip. Chips are spread evenly over
/// the heat-exchange faces; the per-face tally may be fractional because it
/// models parallel conduction paths, not a literal chip count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleLayout {
    /// Junction-to-heatsink thermal resistance of a single chip.
    pub chip_resistance: ThermalResistance,
    /// Total chips in the module.
    pub chip_count: u32,
    /// Heat-exchange faces the chips are apportioned across.
    pub face_count: u32,
}

impl Default for ModuleLayout {
    /// Reference layout: 273 chips over 6 faces at 1.48 K/W per chip.
    fn default() -> Self {
        Self {
            chip_resistance: TemperatureInterval::new::<kelvin>(1.48) / Power::new::<watt>(1.0),
            chip_count: 273,
            face_count: 6,
        }
    }
}

impl ModuleLayout {
    /// Chips apportioned to one face; fractional values model parallel paths.
    #[must_use]
    pub fn chips_per_face(&self) -> f64 {
        f64::from(self.chip_count) / f64::from(self.face_count)
    }

    /// Per-face conduction resistance, `R_chip / chips_per_face`.
    ///
    /// Parallel-resistor reduction of the chip array feeding one face.
    /// Computed once per solve and reused for every (velocity, coolant)
    /// evaluation.
    #[must_use]
    pub fn conduction_resistance_per_face(&self) -> ThermalResistance {
        self.chip_resistance / self.chips_per_face()
    }

    /// Checks the layout's invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if the resistance or either count is degenerate.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.chip_resistance.value.is_finite()
            || StrictlyPositive::check(&self.chip_resistance.value).is_err()
        {
            return Err(LayoutError::ChipResistance {
                value: self.chip_resistance,
            });
        }
        if self.chip_count == 0 {
            return Err(LayoutError::ChipCount);
        }
        if self.face_count == 0 {
            return Err(LayoutError::FaceCount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn reference_conduction_resistance() {
        let layout = ModuleLayout::default();

        // 273 / 6 = 45.5 parallel paths per face.
        assert_relative_eq!(layout.chips_per_face(), 45.5);
        assert_relative_eq!(
            layout.conduction_resistance_per_face().value,
            1.48 / 45.5,
            epsilon = 1e-15
        );
    }

    #[test]
    fn zero_faces_rejected() {
        let layout = ModuleLayout {
            face_count: 0,
            ..ModuleLayout::default()
        };

        assert_eq!(layout.validate(), Err(LayoutError::FaceCount));
    }
}
