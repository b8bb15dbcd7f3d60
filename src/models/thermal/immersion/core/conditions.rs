//! Operating conditions for a solve.

use thiserror::Error;
use uom::si::{
    f64::{Power, ThermodynamicTemperature},
    power::watt,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::constraint::{Constraint, StrictlyPositive};

/// An error returned when [`OperatingConditions`] are degenerate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConditionsError {
    #[error("temperature `{name}` must be finite: {value:?}")]
    Temperature {
        name: &'static str,
        value: ThermodynamicTemperature,
    },
    #[error("hash efficiency must be finite and strictly positive: {value} J/TH")]
    HashEfficiency { value: f64 },
}

/// Operating conditions applied to every (velocity, coolant) evaluation.
///
/// The junction temperature is the fixed upper bound the chip array is
/// driven to; the inlet temperature is the bulk coolant temperature
/// entering the tank. Both targets are display-only references for
/// downstream charts and never feed the solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingConditions {
    /// Chip junction temperature (T_j).
    pub junction_temperature: ThermodynamicTemperature,
    /// Coolant inlet temperature (T_in).
    pub inlet_temperature: ThermodynamicTemperature,
    /// Energy per unit of throughput, in J/TH; converts power to hashrate.
    pub hash_efficiency: f64,
    /// Nominal module power, displayed as a chart reference line.
    pub power_target: Power,
    /// Nominal module hashrate in TH/s, displayed as a chart reference line.
    pub hashrate_target: f64,
}

impl Default for OperatingConditions {
    /// Reference conditions: 70 °C junction, 40 °C inlet, 14.5 J/TH.
    fn default() -> Self {
        Self {
            junction_temperature: ThermodynamicTemperature::new::<degree_celsius>(70.0),
            inlet_temperature: ThermodynamicTemperature::new::<degree_celsius>(40.0),
            hash_efficiency: 14.5,
            power_target: Power::new::<watt>(5700.0),
            hashrate_target: 300.0,
        }
    }
}

impl OperatingConditions {
    /// Checks the conditions' invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`ConditionsError`] if either temperature is non-finite or
    /// the hash efficiency would divide by zero.
    pub fn validate(&self) -> Result<(), ConditionsError> {
        let temperatures = [
            ("junction_temperature", self.junction_temperature),
            ("inlet_temperature", self.inlet_temperature),
        ];
        for (name, value) in temperatures {
            if !value.value.is_finite() {
                return Err(ConditionsError::Temperature { name, value });
            }
        }
        if !self.hash_efficiency.is_finite()
            || StrictlyPositive::check(&self.hash_efficiency).is_err()
        {
            return Err(ConditionsError::HashEfficiency {
                value: self.hash_efficiency,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(OperatingConditions::default().validate().is_ok());
    }

    #[test]
    fn zero_hash_efficiency_rejected() {
        let conditions = OperatingConditions {
            hash_efficiency: 0.0,
            ..OperatingConditions::default()
        };

        assert!(matches!(
            conditions.validate(),
            Err(ConditionsError::HashEfficiency { .. })
        ));
    }

    #[test]
    fn non_finite_temperature_rejected() {
        let conditions = OperatingConditions {
            inlet_temperature: ThermodynamicTemperature::new::<degree_celsius>(f64::NAN),
            ..OperatingConditions::default()
        };

        assert!(matches!(
            conditions.validate(),
            Err(ConditionsError::Temperature {
                name: "inlet_temperature",
                ..
            })
        ));
    }
}
