use std::ops::Deref;

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative, UnitInterval};
use uom::si::{
    f64::{Ratio, ThermalConductance},
    ratio::ratio,
};

use super::CapacitanceRate;

/// The effectiveness of a heat exchanger.
///
/// The effectiveness is the ratio of the actual amount of heat transferred
/// to the maximum possible amount of heat transferred in the exchanger.
///
/// The effectiveness must be in the interval [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Effectiveness(Constrained<Ratio, UnitInterval>);

impl Effectiveness {
    /// Create an [`Effectiveness`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        let quantity = Ratio::new::<ratio>(value);
        Self::from_quantity(quantity)
    }

    /// Create an [`Effectiveness`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside the interval [0, 1].
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(quantity)?))
    }

    /// Effectiveness in the constant-wall-temperature limit, `ε = 1 − exp(−NTU)`.
    ///
    /// This is the capacity-ratio → 0 limit of the ε-NTU method. It applies
    /// when one side of the exchanger behaves as an infinite-capacity
    /// reservoir at fixed temperature, as the chip junction does in the
    /// immersion model.
    #[must_use]
    pub fn from_ntu_constant_wall(ntu: Ntu) -> Self {
        let value = 1.0 - (-ntu.get::<ratio>()).exp();
        Self::new(value).expect("ntu should always yield valid effectiveness")
    }
}

impl Deref for Effectiveness {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// The number of transfer units for a heat exchanger.
///
/// The number of transfer units represents the dimensionless size of a heat
/// exchanger, `NTU = UA / C_min`.
///
/// The number of transfer units must be >= 0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Ntu(Constrained<Ratio, NonNegative>);

impl Ntu {
    /// Create an [`Ntu`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is negative.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        let quantity = Ratio::new::<ratio>(value);
        Self::from_quantity(quantity)
    }

    /// Create an [`Ntu`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is negative.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(NonNegative::new(quantity)?))
    }

    /// Create an [`Ntu`] from the exchanger conductance and the stream's
    /// [capacitance rate](CapacitanceRate).
    ///
    /// With a single finite-capacity stream, that stream's capacitance rate
    /// is `C_min` by definition.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the resulting NTU would be negative (for example,
    /// when `ua` is negative).
    pub fn from_conductance_and_capacitance_rate(
        ua: ThermalConductance,
        capacitance_rate: CapacitanceRate,
    ) -> ConstraintResult<Self> {
        Self::from_quantity(ua / *capacitance_rate)
    }
}

impl Deref for Ntu {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
