//! Single-point thermo-fluid solution for one (velocity, coolant) pair.

use uom::si::f64::{
    HeatTransfer, Power, Ratio, ThermalConductance, ThermodynamicTemperature, Velocity,
};
use uom::si::power::watt;

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    coolant::Coolant,
    hx::{CapacitanceRate, Effectiveness, Ntu},
    units::{TemperatureDifference, ThermalResistance},
};

use super::{
    conditions::OperatingConditions,
    correlations::{fin_efficiency, nusselt_laminar, surface_efficiency},
    geometry::FaceGeometry,
};

/// Everything the correlation chain produces for one (velocity, coolant)
/// pair, intermediates included, so callers can audit a point (e.g. check
/// the Reynolds number stayed laminar) without re-deriving anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSolution {
    /// Flow velocity this point was evaluated at.
    pub velocity: Velocity,
    /// Reynolds number; the model is valid for Re < 2300 and does not
    /// enforce the bound itself.
    pub reynolds: Ratio,
    /// Nusselt number after the fully-developed clamp.
    pub nusselt: Ratio,
    /// Convection coefficient h.
    pub convection_coefficient: HeatTransfer,
    /// Adiabatic-tip fin efficiency.
    pub fin_efficiency: Ratio,
    /// Overall surface efficiency.
    pub surface_efficiency: Ratio,
    /// Lumped convective conductance UA for one face.
    pub conductance: ThermalConductance,
    /// Coolant stream capacitance rate through one face.
    pub capacitance_rate: CapacitanceRate,
    /// Number of transfer units.
    pub ntu: Ntu,
    /// Constant-wall-temperature effectiveness.
    pub effectiveness: Effectiveness,
    /// Heat extracted through one face.
    pub heat_per_face: Power,
    /// Heat extracted by the whole module (all faces).
    pub total_heat: Power,
    /// Coolant outlet temperature for one face.
    pub outlet_temperature: ThermodynamicTemperature,
    /// Derived module hashrate in TH/s.
    pub hashrate: f64,
}

/// Runs the full correlation chain for one (velocity, coolant) pair.
///
/// The chain is closed-form: Reynolds → Nusselt (clamped) → convection →
/// fin and surface efficiency → UA → ε-NTU in the constant-wall limit →
/// series resistance network → heat flow → outlet temperature → hashrate.
///
/// Inputs are assumed validated (the sweep driver checks them before any
/// arithmetic); with finite, strictly positive inputs every step here is
/// well-defined.
pub(super) fn solve_point(
    velocity: Constrained<Velocity, StrictlyPositive>,
    coolant: &Coolant,
    face: &FaceGeometry,
    conduction_resistance: ThermalResistance,
    face_count: u32,
    conditions: &OperatingConditions,
) -> PointSolution {
    let velocity = velocity.into_inner();

    let reynolds: Ratio = velocity * face.hydraulic_diameter / coolant.kinematic_viscosity;

    let nusselt = nusselt_laminar(
        reynolds,
        coolant.prandtl,
        face.hydraulic_diameter,
        face.channel_length,
    );

    let convection_coefficient: HeatTransfer =
        nusselt * coolant.thermal_conductivity / face.hydraulic_diameter;

    let eta_fin = fin_efficiency(convection_coefficient, face);
    let eta_surface = surface_efficiency(eta_fin, face);

    let conductance: ThermalConductance = eta_surface * convection_coefficient * face.total_area;

    let mass_rate = coolant.density * velocity * face.frontal_area;
    let capacitance_rate =
        CapacitanceRate::from_mass_rate_and_specific_heat(mass_rate, coolant.specific_heat)
            .expect("validated coolant and positive velocity yield a positive capacitance rate");

    let ntu = Ntu::from_conductance_and_capacitance_rate(conductance, capacitance_rate)
        .expect("positive conductance yields a non-negative NTU");
    let effectiveness = Effectiveness::from_ntu_constant_wall(ntu);

    // Series thermal circuit: junction —R_cond— heatsink —R_stream— coolant.
    let total_resistance = conduction_resistance + capacitance_rate.stream_resistance(effectiveness);

    let driving_difference = conditions
        .junction_temperature
        .minus(conditions.inlet_temperature);
    let heat_per_face: Power = driving_difference / total_resistance;
    let total_heat = heat_per_face * f64::from(face_count);

    // Single-face energy balance: T_out = T_in + Q_face / C_min.
    let outlet_temperature = conditions.inlet_temperature + heat_per_face / *capacitance_rate;

    let hashrate = total_heat.get::<watt>() / conditions.hash_efficiency;

    PointSolution {
        velocity,
        reynolds,
        nusselt,
        convection_coefficient,
        fin_efficiency: eta_fin,
        surface_efficiency: eta_surface,
        conductance,
        capacitance_rate,
        ntu,
        effectiveness,
        heat_per_face,
        total_heat,
        outlet_temperature,
        hashrate,
    }
}
