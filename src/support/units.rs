//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, power,
//! thermal conductance). This module provides extensions that are useful for
//! immersion-cooling analysis but aren't included in [`uom`].
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a
//! [`minus`](TemperatureDifference::minus) method for subtracting one
//! absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use immersion_models::support::units::TemperatureDifference;
//!
//! let junction = ThermodynamicTemperature::new::<degree_celsius>(70.0);
//! let inlet = ThermodynamicTemperature::new::<degree_celsius>(40.0);
//! let driving = junction.minus(inlet);
//! // driving is a TemperatureInterval, not a ThermodynamicTemperature
//! ```
//!
//! This extension trait is currently needed due to limitations in [`uom`].
//! See [`TemperatureDifference`] for details.
//!
//! ## Quantity aliases
//!
//! [`KinematicViscosity`] and [`ThermalResistance`] are dimensioned
//! quantities the solver needs that [`uom`] does not name; they are defined
//! here as type aliases over [`uom::si::Quantity`].

mod quantities;
mod temperature_difference;

pub use quantities::{KinematicViscosity, ThermalResistance};
pub use temperature_difference::TemperatureDifference;
