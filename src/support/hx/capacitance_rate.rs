use std::ops::Deref;

use crate::support::{
    constraint::{Constrained, ConstraintResult, StrictlyPositive},
    units::ThermalResistance,
};
use uom::si::f64::{MassRate, SpecificHeatCapacity, ThermalConductance};

use super::Effectiveness;

/// Capacitance rate (`ṁ · cp`) of the coolant stream crossing one face.
///
/// The value must be strictly positive; the degenerate zero-flow case is
/// rejected at construction rather than propagated as a division by zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CapacitanceRate(Constrained<ThermalConductance, StrictlyPositive>);

impl CapacitanceRate {
    /// Create a [`CapacitanceRate`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::thermal_conductance::Unit + uom::Conversion<f64, T = f64>,
    {
        let quantity = ThermalConductance::new::<U>(value);
        Self::from_quantity(quantity)
    }

    /// Create a [`CapacitanceRate`] from a quantity with thermal-conductance units.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: ThermalConductance) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Create a [`CapacitanceRate`] from a mass rate and specific heat capacity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either operand is not strictly positive.
    pub fn from_mass_rate_and_specific_heat(
        mass_rate: MassRate,
        specific_heat: SpecificHeatCapacity,
    ) -> ConstraintResult<Self> {
        CapacitanceRate::from_quantity(mass_rate * specific_heat)
    }

    /// Equivalent thermal resistance of the stream, `1 / (ε · C_min)`.
    ///
    /// This is the resistance that reproduces `Q = ε · C_min · ΔT` when the
    /// stream is placed in a series thermal circuit. An effectiveness of
    /// zero yields an infinite resistance (no heat leaves through the
    /// stream), which is well-defined but outside the operating range of
    /// the sweep.
    #[must_use]
    pub fn stream_resistance(&self, effectiveness: Effectiveness) -> ThermalResistance {
        (*effectiveness * *self.0.as_ref()).recip()
    }
}

impl Deref for CapacitanceRate {
    type Target = ThermalConductance;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        mass_rate::kilogram_per_second, specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductance::watt_per_kelvin,
    };

    #[test]
    fn from_mass_rate_and_specific_heat() -> ConstraintResult<()> {
        let mass_rate = MassRate::new::<kilogram_per_second>(0.168895);
        let specific_heat = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2270.0);

        let capacitance_rate =
            CapacitanceRate::from_mass_rate_and_specific_heat(mass_rate, specific_heat)?;

        assert_relative_eq!(capacitance_rate.get::<watt_per_kelvin>(), 383.39165);
        Ok(())
    }

    #[test]
    fn rejects_zero_flow() {
        let mass_rate = MassRate::new::<kilogram_per_second>(0.0);
        let specific_heat = SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(2270.0);

        assert!(
            CapacitanceRate::from_mass_rate_and_specific_heat(mass_rate, specific_heat).is_err()
        );
    }

    #[test]
    fn stream_resistance_inverts_effective_conductance() -> ConstraintResult<()> {
        let capacitance_rate = CapacitanceRate::new::<watt_per_kelvin>(400.0)?;
        let effectiveness = Effectiveness::new(0.5)?;

        let resistance = capacitance_rate.stream_resistance(effectiveness);

        assert_relative_eq!(resistance.value, 1.0 / 200.0);
        Ok(())
    }
}
