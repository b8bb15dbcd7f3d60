//! Heat exchanger analysis primitives.
//!
//! The immersion model treats each heatsink face as a single-stream heat
//! exchanger: the coolant stream flows past a surface held at the junction
//! temperature by the chip array, which acts as an infinite-capacity
//! reservoir. This module provides the ε-NTU types for that limit.
//!
//! - [`CapacitanceRate`]: strictly positive `ṁ · cp` of the coolant stream
//! - [`Ntu`]: the dimensionless size of the exchanger, `UA / C_min`
//! - [`Effectiveness`]: achieved fraction of the maximum possible heat
//!   transfer, computed here with the constant-wall-temperature relation
//!   `ε = 1 − exp(−NTU)` (the capacity-ratio → 0 limit)
//!
//! # Example
//!
//! ```
//! use immersion_models::support::constraint::ConstraintResult;
//! use immersion_models::support::hx::{CapacitanceRate, Effectiveness, Ntu};
//! use uom::si::{f64::ThermalConductance, thermal_conductance::watt_per_kelvin};
//!
//! fn main() -> ConstraintResult<()> {
//!     let ua = ThermalConductance::new::<watt_per_kelvin>(160.0);
//!     let c_min = CapacitanceRate::new::<watt_per_kelvin>(384.0)?;
//!
//!     let ntu = Ntu::from_conductance_and_capacitance_rate(ua, c_min)?;
//!     let effectiveness = Effectiveness::from_ntu_constant_wall(ntu);
//!
//!     // The effective stream resistance closes the thermal circuit.
//!     let _r_stream = c_min.stream_resistance(effectiveness);
//!     Ok(())
//! }
//! ```

mod capacitance_rate;
mod effectiveness_ntu;

pub use capacitance_rate::CapacitanceRate;
pub use effectiveness_ntu::{Effectiveness, Ntu};
