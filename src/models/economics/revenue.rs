//! Fleet-level daily mining revenue.
//!
//! Scales a per-module hashrate series up to a facility-sized fleet and
//! prices it against market conditions. The fleet size is the module count a
//! fixed facility power budget supports at the module's target draw, so
//! revenue comparisons across coolants reflect the same electrical envelope.

use thiserror::Error;
use twine_core::Model;
use uom::si::{
    f64::Power,
    power::{megawatt, watt},
    ratio::ratio,
};

use crate::models::thermal::immersion::DataPoint;

/// An error returned when [`MarketConditions`] are degenerate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MarketError {
    #[error("daily reward must be finite and strictly positive: {value} USD/(TH/s)/day")]
    Reward { value: f64 },
    #[error("asset price must be finite and strictly positive: {value} USD")]
    AssetPrice { value: f64 },
    #[error("baseline price must be finite and strictly positive: {value} USD")]
    BaselinePrice { value: f64 },
    #[error("facility power must be finite and strictly positive: {value:?}")]
    FacilityPower { value: Power },
    #[error("module power target must be finite and strictly positive: {value:?}")]
    ModulePowerTarget { value: Power },
}

/// Market inputs for pricing a hashrate series.
///
/// Revenue scales linearly with the asset price relative to the baseline at
/// which the daily reward was quoted, so a quote taken at one price level
/// can be projected to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketConditions {
    /// Daily revenue per unit hashrate at the baseline price, in
    /// USD/(TH/s)/day.
    pub reward_per_terahash_day: f64,
    /// Current asset price in USD.
    pub asset_price: f64,
    /// Asset price at which the daily reward was quoted, in USD.
    pub baseline_price: f64,
    /// Electrical budget of the whole facility.
    pub facility_power: Power,
    /// Nameplate draw of one module, used to size the fleet.
    pub module_power_target: Power,
}

impl Default for MarketConditions {
    fn default() -> Self {
        Self {
            reward_per_terahash_day: 0.0358,
            asset_price: 93_000.0,
            baseline_price: 93_000.0,
            facility_power: Power::new::<megawatt>(300.0),
            module_power_target: Power::new::<watt>(5700.0),
        }
    }
}

impl MarketConditions {
    /// Number of modules the facility budget supports.
    ///
    /// May be fractional; the fleet is a scaling factor, not an inventory.
    #[must_use]
    pub fn fleet_size(&self) -> f64 {
        (self.facility_power / self.module_power_target).get::<ratio>()
    }

    /// Checks the market inputs.
    ///
    /// # Errors
    ///
    /// Returns a [`MarketError`] if any input is non-finite or non-positive.
    pub fn validate(&self) -> Result<(), MarketError> {
        if !(self.reward_per_terahash_day.is_finite() && self.reward_per_terahash_day > 0.0) {
            return Err(MarketError::Reward {
                value: self.reward_per_terahash_day,
            });
        }
        if !(self.asset_price.is_finite() && self.asset_price > 0.0) {
            return Err(MarketError::AssetPrice {
                value: self.asset_price,
            });
        }
        if !(self.baseline_price.is_finite() && self.baseline_price > 0.0) {
            return Err(MarketError::BaselinePrice {
                value: self.baseline_price,
            });
        }
        if !(self.facility_power.value.is_finite() && self.facility_power.value > 0.0) {
            return Err(MarketError::FacilityPower {
                value: self.facility_power,
            });
        }
        if !(self.module_power_target.value.is_finite() && self.module_power_target.value > 0.0) {
            return Err(MarketError::ModulePowerTarget {
                value: self.module_power_target,
            });
        }
        Ok(())
    }
}

/// Prices a per-module hashrate series as fleet-level daily revenue in USD.
///
/// Each output point keeps its input's velocity and coolant keys; values are
/// `fleet × hashrate × reward × (asset_price / baseline_price)`, rounded the
/// same way the thermal series are.
///
/// # Errors
///
/// Returns a [`MarketError`] if the market conditions are degenerate.
pub fn revenue_series(
    hashrate: &[DataPoint],
    market: &MarketConditions,
) -> Result<Vec<DataPoint>, MarketError> {
    market.validate()?;

    let fleet = market.fleet_size();
    let price_scale = market.asset_price / market.baseline_price;

    Ok(hashrate
        .iter()
        .map(|point| {
            let mut out = DataPoint::new(point.velocity);
            for (id, terahash) in &point.values {
                let daily =
                    fleet * terahash * market.reward_per_terahash_day * price_scale;
                out.insert_rounded(id, daily);
            }
            out
        })
        .collect())
}

/// Fleet revenue as a callable model over a hashrate series.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FleetRevenue {
    pub market: MarketConditions,
}

impl Model for FleetRevenue {
    type Input = Vec<DataPoint>;
    type Output = Vec<DataPoint>;
    type Error = MarketError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        revenue_series(input, &self.market)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeMap;

    use approx::assert_relative_eq;
    use uom::si::{f64::Velocity, velocity::meter_per_second};

    fn hashrate_point(id: &str, terahash: f64) -> DataPoint {
        let mut point = DataPoint::new(Velocity::new::<meter_per_second>(0.05));
        point.values = BTreeMap::from([(id.to_string(), terahash)]);
        point
    }

    #[test]
    fn default_fleet_size() {
        assert_relative_eq!(
            MarketConditions::default().fleet_size(),
            52_631.578_947_368_42,
            epsilon = 1e-6
        );
    }

    #[test]
    fn prices_a_known_hashrate() {
        let series = revenue_series(
            &[hashrate_point("novel_mpao", 300.0)],
            &MarketConditions::default(),
        )
        .unwrap();

        // 52631.578947 modules × 300 TH/s × 0.0358 USD/(TH/s)/day.
        assert_relative_eq!(
            series[0].value("novel_mpao").unwrap(),
            565_263.16,
            epsilon = 1e-9
        );
    }

    #[test]
    fn revenue_scales_with_asset_price() {
        let market = MarketConditions {
            asset_price: 46_500.0,
            ..MarketConditions::default()
        };

        let series = revenue_series(&[hashrate_point("dcf281", 300.0)], &market).unwrap();

        assert_relative_eq!(
            series[0].value("dcf281").unwrap(),
            282_631.58,
            epsilon = 1e-9
        );
    }

    #[test]
    fn velocity_alignment_is_preserved() {
        let points = vec![
            hashrate_point("dcf281", 250.0),
            hashrate_point("dcf281", 260.0),
        ];

        let series = revenue_series(&points, &MarketConditions::default()).unwrap();

        assert_eq!(series.len(), 2);
        for (input, output) in points.iter().zip(&series) {
            assert_eq!(input.velocity, output.velocity);
        }
    }

    #[test]
    fn zero_baseline_price_rejected() {
        let market = MarketConditions {
            baseline_price: 0.0,
            ..MarketConditions::default()
        };

        assert!(matches!(
            revenue_series(&[], &market),
            Err(MarketError::BaselinePrice { .. })
        ));
    }

    #[test]
    fn model_adapter_delegates() {
        let model = FleetRevenue::default();
        let input = vec![hashrate_point("shell_xhvi3", 280.0)];

        let via_model = model.call(&input).unwrap();
        let direct = revenue_series(&input, &model.market).unwrap();

        assert_eq!(via_model, direct);
    }
}
