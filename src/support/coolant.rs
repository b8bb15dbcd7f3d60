//! Coolant property records.
//!
//! A [`Coolant`] names a candidate immersion fluid and carries the constant
//! properties the solver needs, evaluated at the 40 °C reference
//! temperature the datasheets quote. Properties are treated as constant
//! across the modest ΔT of a solve.
//!
//! The [`catalog`] submodule provides the reference fluids as preconfigured
//! records; callers may also build their own.

pub mod catalog;

use thiserror::Error;
use uom::si::{
    area::square_millimeter,
    f64::{Area, MassDensity, Ratio, SpecificHeatCapacity, ThermalConductivity, Time},
    mass_density::kilogram_per_cubic_meter,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    time::second,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    units::KinematicViscosity,
};

/// An error returned when a [`Coolant`] carries a physically meaningless property.
///
/// Every physical property must be finite and strictly positive for the
/// solver to produce meaningful results.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoolantError {
    #[error("invalid density: {density:?}")]
    Density { density: MassDensity },
    #[error("invalid kinematic viscosity: {viscosity:?}")]
    KinematicViscosity { viscosity: KinematicViscosity },
    #[error("invalid specific heat: {cp:?}")]
    SpecificHeat { cp: SpecificHeatCapacity },
    #[error("invalid thermal conductivity: {conductivity:?}")]
    ThermalConductivity { conductivity: ThermalConductivity },
    #[error("invalid Prandtl number: {prandtl:?}")]
    Prandtl { prandtl: Ratio },
}

/// A candidate immersion coolant and its constant properties.
///
/// The `id` keys this coolant's column in every output series; `name` and
/// `color` are display concerns carried through untouched for downstream
/// legends and charts.
#[derive(Debug, Clone, PartialEq)]
pub struct Coolant {
    /// Stable identifier used to key series values.
    pub id: String,
    /// Human-readable display name.
    pub name: String,
    /// Density ρ.
    pub density: MassDensity,
    /// Kinematic viscosity ν.
    pub kinematic_viscosity: KinematicViscosity,
    /// Specific heat capacity cp.
    pub specific_heat: SpecificHeatCapacity,
    /// Thermal conductivity k.
    pub thermal_conductivity: ThermalConductivity,
    /// Prandtl number.
    pub prandtl: Ratio,
    /// Display color (hex), for downstream chart rendering.
    pub color: String,
}

impl Coolant {
    /// Builds a coolant from datasheet values in their customary units:
    /// density in kg/m³, kinematic viscosity in mm²/s (centistokes),
    /// specific heat in J/kg·K, thermal conductivity in W/m·K.
    #[must_use]
    pub fn from_datasheet(
        id: &str,
        name: &str,
        density: f64,
        kinematic_viscosity_cst: f64,
        specific_heat: f64,
        thermal_conductivity: f64,
        prandtl: f64,
        color: &str,
    ) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            density: MassDensity::new::<kilogram_per_cubic_meter>(density),
            kinematic_viscosity: Area::new::<square_millimeter>(kinematic_viscosity_cst)
                / Time::new::<second>(1.0),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(specific_heat),
            thermal_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(
                thermal_conductivity,
            ),
            prandtl: Ratio::new::<ratio>(prandtl),
            color: color.to_owned(),
        }
    }

    /// Checks that every physical property is finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns the first violated property as a [`CoolantError`].
    pub fn validate(&self) -> Result<(), CoolantError> {
        if !finite_positive(self.density.value) {
            return Err(CoolantError::Density {
                density: self.density,
            });
        }
        if !finite_positive(self.kinematic_viscosity.value) {
            return Err(CoolantError::KinematicViscosity {
                viscosity: self.kinematic_viscosity,
            });
        }
        if !finite_positive(self.specific_heat.value) {
            return Err(CoolantError::SpecificHeat {
                cp: self.specific_heat,
            });
        }
        if !finite_positive(self.thermal_conductivity.value) {
            return Err(CoolantError::ThermalConductivity {
                conductivity: self.thermal_conductivity,
            });
        }
        if !finite_positive(self.prandtl.value) {
            return Err(CoolantError::Prandtl {
                prandtl: self.prandtl,
            });
        }
        Ok(())
    }
}

fn finite_positive(value: f64) -> bool {
    value.is_finite() && StrictlyPositive::check(&value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn datasheet_units_convert_to_si() {
        let coolant = Coolant::from_datasheet(
            "novel_mpao",
            "Novel MPAO Dimer",
            794.8,
            7.994,
            2270.0,
            0.15203,
            94.7,
            "#a855f7",
        );

        assert_relative_eq!(coolant.density.value, 794.8);
        // mm²/s to m²/s
        assert_relative_eq!(coolant.kinematic_viscosity.value, 7.994e-6);
        assert_relative_eq!(coolant.specific_heat.value, 2270.0);
        assert!(coolant.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_properties() {
        let mut coolant =
            Coolant::from_datasheet("bad", "Bad Fluid", 800.0, 8.0, 2200.0, 0.14, 100.0, "#000");
        coolant.density = MassDensity::new::<kilogram_per_cubic_meter>(0.0);

        assert!(matches!(
            coolant.validate(),
            Err(CoolantError::Density { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_properties() {
        let mut coolant =
            Coolant::from_datasheet("bad", "Bad Fluid", 800.0, 8.0, 2200.0, 0.14, 100.0, "#000");
        coolant.prandtl = Ratio::new::<uom::si::ratio::ratio>(f64::NAN);
        assert!(matches!(
            coolant.validate(),
            Err(CoolantError::Prandtl { .. })
        ));

        coolant.prandtl = Ratio::new::<uom::si::ratio::ratio>(f64::INFINITY);
        assert!(matches!(
            coolant.validate(),
            Err(CoolantError::Prandtl { .. })
        ));
    }
}
