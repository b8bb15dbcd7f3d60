use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, P2, P3, Z0},
};

/// Kinematic viscosity, m²/s in SI.
///
/// Coolant datasheets quote this in mm²/s (centistokes); construct it as
/// `Area / Time` so the unit conversion stays in [`uom`]:
///
/// ```
/// use uom::si::{area::square_millimeter, f64::{Area, Time}, time::second};
/// use immersion_models::support::units::KinematicViscosity;
///
/// let nu: KinematicViscosity =
///     Area::new::<square_millimeter>(7.994) / Time::new::<second>(1.0);
/// assert!((nu.value - 7.994e-6).abs() < 1e-18);
/// ```
pub type KinematicViscosity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Thermal resistance, K/W in SI.
///
/// The reciprocal of [`uom::si::f64::ThermalConductance`]; arises naturally
/// as `TemperatureInterval / Power`.
pub type ThermalResistance = Quantity<ISQ<N2, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{Power, TemperatureInterval, ThermalConductance},
        power::watt,
        temperature_interval::kelvin,
        thermal_conductance::watt_per_kelvin,
    };

    #[test]
    fn thermal_resistance_is_reciprocal_conductance() {
        let resistance: ThermalResistance =
            TemperatureInterval::new::<kelvin>(1.48) / Power::new::<watt>(1.0);
        let conductance: ThermalConductance = resistance.recip();

        assert_relative_eq!(resistance.value, 1.48);
        assert_relative_eq!(conductance.get::<watt_per_kelvin>(), 1.0 / 1.48);
    }
}
