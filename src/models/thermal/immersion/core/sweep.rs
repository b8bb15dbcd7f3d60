//! Velocity sweep domain and the solve driver.

use thiserror::Error;
use uom::si::{f64::Velocity, ratio::ratio, velocity::millimeter_per_second};

use crate::support::{constraint::StrictlyPositive, coolant::Coolant};

use super::{
    conditions::OperatingConditions,
    conduction::ModuleLayout,
    error::SolveError,
    geometry::HeatSink,
    point::{PointSolution, solve_point},
    results::{Aggregator, SimulationResult},
};

/// An error returned when a [`VelocitySweep`] is degenerate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SweepError {
    /// A zero start would put the degenerate C_min = 0 point in the domain.
    #[error("sweep start must be strictly positive: {value:?}")]
    Start { value: Velocity },
    #[error("sweep step must be strictly positive: {value:?}")]
    Step { value: Velocity },
    #[error("sweep end must not precede start")]
    Bounds,
}

/// An ordered, inclusive range of flow velocities.
///
/// Both endpoints are included; the last point is `start + n·step` for the
/// largest `n` with `start + n·step ≤ end` (to within float tolerance).
/// Starting above zero excludes the undefined zero-flow operating point by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocitySweep {
    /// First velocity in the domain.
    pub start: Velocity,
    /// Last velocity in the domain (inclusive).
    pub end: Velocity,
    /// Spacing between consecutive velocities.
    pub step: Velocity,
}

impl Default for VelocitySweep {
    /// Reference domain: 6–100 mm/s in 1 mm/s steps, 95 points, deeply
    /// laminar for every catalog coolant.
    fn default() -> Self {
        Self {
            start: Velocity::new::<millimeter_per_second>(6.0),
            end: Velocity::new::<millimeter_per_second>(100.0),
            step: Velocity::new::<millimeter_per_second>(1.0),
        }
    }
}

impl VelocitySweep {
    /// Checks the domain's invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`SweepError`] if either bound or the step is degenerate.
    pub fn validate(&self) -> Result<(), SweepError> {
        if !self.start.value.is_finite() || self.start.value <= 0.0 {
            return Err(SweepError::Start { value: self.start });
        }
        if !self.step.value.is_finite() || self.step.value <= 0.0 {
            return Err(SweepError::Step { value: self.step });
        }
        if !self.end.value.is_finite() || self.end < self.start {
            return Err(SweepError::Bounds);
        }
        Ok(())
    }

    /// Number of velocities in the domain.
    #[must_use]
    pub fn point_count(&self) -> usize {
        // Float-tolerant so an exact multiple of the step lands on `end`
        // instead of being truncated away.
        let spans = ((self.end - self.start) / self.step).get::<ratio>();
        (spans + 1e-9).floor() as usize + 1
    }

    /// The ordered velocities of the domain.
    pub fn velocities(&self) -> impl Iterator<Item = Velocity> + '_ {
        (0..self.point_count()).map(|i| self.start + self.step * i as f64)
    }
}

/// Solves the full sweep: every selected coolant at every velocity.
///
/// Validation happens up front, fail-fast, so the correlation chain only
/// ever sees finite, strictly positive inputs. Evaluations are pure and
/// independent per (velocity, coolant) cell and run in increasing-velocity
/// order, coolants in selection order within each velocity.
///
/// An empty coolant selection is allowed and yields series whose points
/// carry no values, mirroring a fully deselected chart.
///
/// # Errors
///
/// Returns a [`SolveError`] naming the first invalid input encountered.
pub fn solve(
    coolants: &[Coolant],
    heat_sink: &HeatSink,
    layout: &ModuleLayout,
    conditions: &OperatingConditions,
    sweep: &VelocitySweep,
) -> Result<SimulationResult, SolveError> {
    sweep.validate()?;
    layout.validate()?;
    conditions.validate()?;
    let face = heat_sink.face_geometry()?;
    for coolant in coolants {
        coolant.validate().map_err(|source| SolveError::Coolant {
            id: coolant.id.clone(),
            source,
        })?;
    }

    let conduction_resistance = layout.conduction_resistance_per_face();

    let mut aggregator = Aggregator::with_capacity(sweep.point_count());
    for velocity in sweep.velocities() {
        let velocity = StrictlyPositive::new(velocity)
            .expect("sweep validation guarantees positive velocities");

        aggregator.begin_velocity(velocity.into_inner());
        for coolant in coolants {
            let solution = solve_point(
                velocity,
                coolant,
                &face,
                conduction_resistance,
                layout.face_count,
                conditions,
            );
            aggregator.record(&coolant.id, &solution);
        }
    }

    Ok(aggregator.finish(coolants.to_vec()))
}

/// Evaluates one (velocity, coolant) operating point.
///
/// Returns the full [`PointSolution`], intermediates included, so a single
/// point can be audited (e.g. checking the Reynolds number stayed laminar)
/// without running a sweep.
///
/// # Errors
///
/// Returns a [`SolveError`] if the velocity, coolant, geometry, layout, or
/// conditions are invalid.
pub fn solve_single(
    velocity: Velocity,
    coolant: &Coolant,
    heat_sink: &HeatSink,
    layout: &ModuleLayout,
    conditions: &OperatingConditions,
) -> Result<PointSolution, SolveError> {
    let velocity = if velocity.value.is_finite() {
        StrictlyPositive::new(velocity).map_err(|_| SolveError::Velocity { value: velocity })?
    } else {
        return Err(SolveError::Velocity { value: velocity });
    };
    layout.validate()?;
    conditions.validate()?;
    let face = heat_sink.face_geometry()?;
    coolant.validate().map_err(|source| SolveError::Coolant {
        id: coolant.id.clone(),
        source,
    })?;

    Ok(solve_point(
        velocity,
        coolant,
        &face,
        layout.conduction_resistance_per_face(),
        layout.face_count,
        conditions,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::velocity::meter_per_second;

    use crate::support::coolant::catalog;

    #[test]
    fn reference_domain_has_95_points() {
        let sweep = VelocitySweep::default();

        assert_eq!(sweep.point_count(), 95);

        let velocities: Vec<_> = sweep.velocities().collect();
        assert_relative_eq!(velocities[0].get::<meter_per_second>(), 0.006);
        assert_relative_eq!(
            velocities[94].get::<meter_per_second>(),
            0.100,
            epsilon = 1e-12
        );
    }

    #[test]
    fn domain_is_strictly_increasing() {
        let sweep = VelocitySweep::default();
        let velocities: Vec<_> = sweep.velocities().collect();

        for pair in velocities.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn zero_start_rejected() {
        let sweep = VelocitySweep {
            start: Velocity::new::<meter_per_second>(0.0),
            ..VelocitySweep::default()
        };

        assert!(matches!(sweep.validate(), Err(SweepError::Start { .. })));
    }

    #[test]
    fn inverted_bounds_rejected() {
        let sweep = VelocitySweep {
            start: Velocity::new::<meter_per_second>(0.2),
            ..VelocitySweep::default()
        };

        assert_eq!(sweep.validate(), Err(SweepError::Bounds));
    }

    #[test]
    fn series_are_velocity_aligned() {
        let coolants = vec![catalog::novel_mpao_dimer(), catalog::castrol_dc15()];

        let result = solve(
            &coolants,
            &HeatSink::default(),
            &ModuleLayout::default(),
            &OperatingConditions::default(),
            &VelocitySweep::default(),
        )
        .unwrap();

        assert_eq!(result.power.len(), 95);
        assert_eq!(result.hashrate.len(), 95);
        assert_eq!(result.outlet_temperature.len(), 95);

        for i in 0..95 {
            assert_eq!(result.power[i].velocity, result.hashrate[i].velocity);
            assert_eq!(result.power[i].velocity, result.outlet_temperature[i].velocity);
            assert_eq!(result.power[i].values.len(), 2);
        }
    }

    #[test]
    fn coolant_selection_is_independent() {
        // Adding a second coolant must not perturb the first one's values.
        let solo = solve(
            &[catalog::novel_mpao_dimer()],
            &HeatSink::default(),
            &ModuleLayout::default(),
            &OperatingConditions::default(),
            &VelocitySweep::default(),
        )
        .unwrap();
        let paired = solve(
            &[catalog::novel_mpao_dimer(), catalog::dcf_281()],
            &HeatSink::default(),
            &ModuleLayout::default(),
            &OperatingConditions::default(),
            &VelocitySweep::default(),
        )
        .unwrap();

        for (a, b) in solo.power.iter().zip(&paired.power) {
            assert_eq!(a.value("novel_mpao"), b.value("novel_mpao"));
        }
        for (a, b) in solo.outlet_temperature.iter().zip(&paired.outlet_temperature) {
            assert_eq!(a.value("novel_mpao"), b.value("novel_mpao"));
        }
    }

    #[test]
    fn power_is_non_decreasing_in_velocity() {
        // Regression over the reference domain, not a physical law: within
        // the laminar sweep every correlation behaves monotonically.
        let result = solve(
            &[catalog::novel_mpao_dimer()],
            &HeatSink::default(),
            &ModuleLayout::default(),
            &OperatingConditions::default(),
            &VelocitySweep::default(),
        )
        .unwrap();

        let powers: Vec<f64> = result
            .power
            .iter()
            .map(|p| p.value("novel_mpao").unwrap())
            .collect();
        for pair in powers.windows(2) {
            assert!(pair[1] >= pair[0], "power decreased: {} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn empty_selection_yields_empty_points() {
        let result = solve(
            &[],
            &HeatSink::default(),
            &ModuleLayout::default(),
            &OperatingConditions::default(),
            &VelocitySweep::default(),
        )
        .unwrap();

        assert_eq!(result.power.len(), 95);
        assert!(result.power.iter().all(|p| p.values.is_empty()));
        assert!(result.coolants.is_empty());
    }

    #[test]
    fn single_point_matches_sweep_cell() {
        let velocity = Velocity::new::<meter_per_second>(0.05);
        let coolant = catalog::novel_mpao_dimer();

        let point = solve_single(
            velocity,
            &coolant,
            &HeatSink::default(),
            &ModuleLayout::default(),
            &OperatingConditions::default(),
        )
        .unwrap();

        // 0.05 m/s is the 45th point of the default domain.
        let sweep = solve(
            std::slice::from_ref(&coolant),
            &HeatSink::default(),
            &ModuleLayout::default(),
            &OperatingConditions::default(),
            &VelocitySweep::default(),
        )
        .unwrap();
        let cell = &sweep.power[44];

        assert_relative_eq!(cell.velocity.get::<meter_per_second>(), 0.05, epsilon = 1e-12);
        assert_relative_eq!(
            cell.value("novel_mpao").unwrap(),
            (point.total_heat.value * 100.0).round() / 100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn single_point_rejects_degenerate_velocity() {
        let coolant = catalog::novel_mpao_dimer();

        for bad in [0.0, -0.01, f64::NAN, f64::INFINITY] {
            let result = solve_single(
                Velocity::new::<meter_per_second>(bad),
                &coolant,
                &HeatSink::default(),
                &ModuleLayout::default(),
                &OperatingConditions::default(),
            );
            assert!(matches!(result, Err(SolveError::Velocity { .. })));
        }
    }

    #[test]
    fn invalid_coolant_fails_fast() {
        let mut coolant = catalog::shell_xhvi3();
        coolant.specific_heat = uom::si::f64::SpecificHeatCapacity::new::<
            uom::si::specific_heat_capacity::joule_per_kilogram_kelvin,
        >(-1.0);

        let result = solve(
            &[coolant],
            &HeatSink::default(),
            &ModuleLayout::default(),
            &OperatingConditions::default(),
            &VelocitySweep::default(),
        );

        assert!(matches!(
            result,
            Err(SolveError::Coolant { id, .. }) if id == "shell_xhvi3"
        ));
    }
}
