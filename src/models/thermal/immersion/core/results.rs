//! Result series types and the aggregation boundary.
//!
//! Internal solver arithmetic is full `f64` end to end; values are rounded
//! to display precision exactly once, here, as they enter the output
//! series.

use std::collections::BTreeMap;

use uom::si::f64::Velocity;
use uom::si::{power::watt, thermodynamic_temperature::degree_celsius};

use crate::support::coolant::Coolant;

use super::point::PointSolution;

/// Display precision applied at the solver boundary, in decimal places.
const DISPLAY_DECIMALS: i32 = 2;

fn display_round(value: f64) -> f64 {
    let scale = 10f64.powi(DISPLAY_DECIMALS);
    (value * scale).round() / scale
}

/// One velocity sample: a flow velocity plus one display scalar per coolant,
/// keyed by coolant id.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    /// Flow velocity this sample was evaluated at.
    pub velocity: Velocity,
    /// Coolant id → display scalar for this series.
    pub values: BTreeMap<String, f64>,
}

impl DataPoint {
    /// Creates an empty sample at the given velocity.
    #[must_use]
    pub fn new(velocity: Velocity) -> Self {
        Self {
            velocity,
            values: BTreeMap::new(),
        }
    }

    /// Records a coolant's scalar, rounded to display precision.
    pub fn insert_rounded(&mut self, coolant_id: &str, value: f64) {
        self.values.insert(coolant_id.to_owned(), display_round(value));
    }

    /// Looks up a coolant's scalar by id.
    #[must_use]
    pub fn value(&self, coolant_id: &str) -> Option<f64> {
        self.values.get(coolant_id).copied()
    }
}

/// The complete output of one solve: three velocity-ordered series plus the
/// coolants they were computed for, in selection order.
///
/// Series units at the boundary: power in W, hashrate in TH/s, outlet
/// temperature in °C, velocities in m/s.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// Total module power dissipation (W) per coolant per velocity.
    pub power: Vec<DataPoint>,
    /// Derived hashrate (TH/s) per coolant per velocity.
    pub hashrate: Vec<DataPoint>,
    /// Coolant outlet temperature (°C) per coolant per velocity.
    pub outlet_temperature: Vec<DataPoint>,
    /// The coolants actually solved, in selection order, for downstream
    /// legends and labeling.
    pub coolants: Vec<Coolant>,
}

/// Collects per-point solutions into the three output series.
///
/// Points must be recorded in increasing-velocity order; the aggregator
/// keeps the three series index-aligned by construction.
pub(super) struct Aggregator {
    power: Vec<DataPoint>,
    hashrate: Vec<DataPoint>,
    outlet_temperature: Vec<DataPoint>,
}

impl Aggregator {
    pub(super) fn with_capacity(points: usize) -> Self {
        Self {
            power: Vec::with_capacity(points),
            hashrate: Vec::with_capacity(points),
            outlet_temperature: Vec::with_capacity(points),
        }
    }

    /// Opens a new velocity sample across all three series.
    pub(super) fn begin_velocity(&mut self, velocity: Velocity) {
        self.power.push(DataPoint::new(velocity));
        self.hashrate.push(DataPoint::new(velocity));
        self.outlet_temperature.push(DataPoint::new(velocity));
    }

    /// Records one coolant's solution under the current velocity sample.
    pub(super) fn record(&mut self, coolant_id: &str, solution: &PointSolution) {
        let power = self.power.last_mut().expect("begin_velocity opens a sample");
        power.insert_rounded(coolant_id, solution.total_heat.get::<watt>());

        let hashrate = self
            .hashrate
            .last_mut()
            .expect("begin_velocity opens a sample");
        hashrate.insert_rounded(coolant_id, solution.hashrate);

        let outlet = self
            .outlet_temperature
            .last_mut()
            .expect("begin_velocity opens a sample");
        outlet.insert_rounded(
            coolant_id,
            solution.outlet_temperature.get::<degree_celsius>(),
        );
    }

    pub(super) fn finish(self, coolants: Vec<Coolant>) -> SimulationResult {
        SimulationResult {
            power: self.power,
            hashrate: self.hashrate,
            outlet_temperature: self.outlet_temperature,
            coolants,
        }
    }
}
