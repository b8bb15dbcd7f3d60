//! Single-phase immersion cooling of a finned ASIC module.
//!
//! Solves the analytical chain for one cold-plate face at each operating
//! point: a laminar duct correlation for the convection coefficient, fin and
//! surface efficiencies for the extended area, and an effectiveness-NTU
//! stream model for the coolant side. Face heat is scaled to the module and
//! converted to hashrate through the module's efficiency figure.
//!
//! [`solve`] runs the full velocity sweep directly; [`ImmersionCooling`]
//! wraps the same computation as a [`Model`] whose input is the coolant
//! selection, for composition with other models.
//!
//! # Example
//!
//! ```
//! use immersion_models::models::thermal::immersion::ImmersionCooling;
//! use immersion_models::support::coolant::catalog;
//! use twine_core::Model;
//!
//! let model = ImmersionCooling::default();
//! let result = model.call(&catalog::all())?;
//!
//! assert_eq!(result.power.len(), 95);
//! # Ok::<(), immersion_models::models::thermal::immersion::SolveError>(())
//! ```

mod core;

pub use self::core::{
    ConditionsError, DataPoint, FaceGeometry, GeometryError, HeatSink, LayoutError, ModuleLayout,
    OperatingConditions, PointSolution, SimulationResult, SolveError, SweepError, VelocitySweep,
    solve, solve_single,
};

use twine_core::Model;

use crate::support::coolant::Coolant;

/// An immersion cooling sweep as a callable model.
///
/// The hardware description and sweep domain are fixed at construction; the
/// input is the coolant selection, which is the quantity that varies when
/// comparing candidate fluids.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImmersionCooling {
    /// Cold plate geometry for one module face.
    pub heat_sink: HeatSink,
    /// Chip count and internal conduction path of the module.
    pub layout: ModuleLayout,
    /// Boundary temperatures and performance targets.
    pub conditions: OperatingConditions,
    /// Velocity domain to evaluate.
    pub sweep: VelocitySweep,
}

impl Model for ImmersionCooling {
    type Input = Vec<Coolant>;
    type Output = SimulationResult;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        solve(
            input,
            &self.heat_sink,
            &self.layout,
            &self.conditions,
            &self.sweep,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::thermodynamic_temperature::degree_celsius;

    use crate::support::coolant::catalog;

    #[test]
    fn model_matches_direct_solve() {
        let model = ImmersionCooling::default();
        let coolants = catalog::all();

        let via_model = model.call(&coolants).unwrap();
        let direct = solve(
            &coolants,
            &model.heat_sink,
            &model.layout,
            &model.conditions,
            &model.sweep,
        )
        .unwrap();

        assert_eq!(via_model, direct);
    }

    #[test]
    fn full_catalog_sweep_produces_all_series() {
        let result = ImmersionCooling::default().call(&catalog::all()).unwrap();

        assert_eq!(result.coolants.len(), 6);
        for point in &result.power {
            assert_eq!(point.values.len(), 6);
        }
        for point in &result.outlet_temperature {
            // Outlet never exceeds the junction temperature.
            for id in point.values.keys() {
                let outlet = point.value(id).unwrap();
                assert!(outlet > 40.0);
                assert!(outlet < 70.0);
            }
        }
    }

    #[test]
    fn invalid_conditions_rejected_before_solving() {
        let model = ImmersionCooling {
            conditions: OperatingConditions {
                inlet_temperature: uom::si::f64::ThermodynamicTemperature::new::<degree_celsius>(
                    f64::NAN,
                ),
                ..OperatingConditions::default()
            },
            ..ImmersionCooling::default()
        };

        let result = model.call(&catalog::all());
        assert!(matches!(
            result,
            Err(SolveError::Conditions(ConditionsError::Temperature { .. }))
        ));
    }

    #[test]
    fn reported_values_are_rounded_to_hundredths() {
        let result = ImmersionCooling::default()
            .call(&vec![catalog::novel_mpao_dimer()])
            .unwrap();

        for series in [&result.power, &result.hashrate, &result.outlet_temperature] {
            for point in series {
                let value = point.value("novel_mpao").unwrap();
                let scaled = value * 100.0;
                assert!((scaled - scaled.round()).abs() < 1e-9, "unrounded: {value}");
            }
        }
    }
}
