//! Heatsink geometry and its per-face derived quantities.

use thiserror::Error;
use uom::si::{
    f64::{Area, Length, Ratio, ThermalConductivity},
    length::meter,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::constraint::{Constraint, StrictlyPositive};

/// An error returned when a [`HeatSink`] is degenerate.
///
/// Zero or negative dimensions would otherwise surface later as divisions
/// by zero inside the correlation chain.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("heat sink dimension `{name}` must be finite and strictly positive: {value:?}")]
    Dimension { name: &'static str, value: Length },
    #[error("fin material conductivity must be finite and strictly positive: {value:?}")]
    FinConductivity { value: ThermalConductivity },
    #[error("fin count must be at least 1")]
    FinCount,
    #[error("channel count must be at least 1")]
    ChannelCount,
}

/// Parallel-plate finned heatsink geometry for one heat-exchange face.
///
/// Fin and channel counts are independent inputs; physically
/// `channel_count = fin_count − 1`, but the relationship is not enforced
/// so measured or hypothetical geometries can be explored as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatSink {
    /// Channel length in the flow direction (L).
    pub channel_length: Length,
    /// Face width transverse to the fins (W).
    pub width: Length,
    /// Fin height (H_fin).
    pub fin_height: Length,
    /// Fin thickness (t_fin).
    pub fin_thickness: Length,
    /// Clear spacing between adjacent fins (s).
    pub fin_spacing: Length,
    /// Number of fins on the face.
    pub fin_count: u32,
    /// Number of open channels between fins.
    pub channel_count: u32,
    /// Fin material thermal conductivity (aluminum by default).
    pub fin_conductivity: ThermalConductivity,
}

impl Default for HeatSink {
    /// Reference geometry measured from the S21-XP-class module heatsink.
    fn default() -> Self {
        Self {
            channel_length: Length::new::<meter>(0.28),
            width: Length::new::<meter>(0.17),
            fin_height: Length::new::<meter>(0.025),
            fin_thickness: Length::new::<meter>(0.0015),
            fin_spacing: Length::new::<meter>(0.002),
            fin_count: 49,
            channel_count: 48,
            fin_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(201.0),
        }
    }
}

impl HeatSink {
    /// Derives the fixed per-face hydraulic and area quantities.
    ///
    /// These depend only on geometry, so they are computed once per solve
    /// and shared across every (velocity, coolant) evaluation.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if any dimension is degenerate.
    pub fn face_geometry(&self) -> Result<FaceGeometry, GeometryError> {
        self.validate()?;

        let fins = f64::from(self.fin_count);
        let channels = f64::from(self.channel_count);

        // Rectangular-channel hydraulic diameter: 4·A_cross / P_wetted.
        let hydraulic_diameter = 4.0 * (self.fin_spacing * self.fin_height)
            / (2.0 * (self.fin_height + self.fin_spacing));

        let fin_area = fins * 2.0 * self.fin_height * self.channel_length;
        let base_area = channels * self.fin_spacing * self.channel_length;

        Ok(FaceGeometry {
            hydraulic_diameter,
            channel_length: self.channel_length,
            frontal_area: self.width * self.fin_height,
            fin_area,
            base_area,
            total_area: fin_area + base_area,
            fin_height: self.fin_height,
            fin_thickness: self.fin_thickness,
            fin_conductivity: self.fin_conductivity,
        })
    }

    fn validate(&self) -> Result<(), GeometryError> {
        let dimensions = [
            ("channel_length", self.channel_length),
            ("width", self.width),
            ("fin_height", self.fin_height),
            ("fin_thickness", self.fin_thickness),
            ("fin_spacing", self.fin_spacing),
        ];
        for (name, value) in dimensions {
            if !value.value.is_finite() || StrictlyPositive::check(&value.value).is_err() {
                return Err(GeometryError::Dimension { name, value });
            }
        }
        if !self.fin_conductivity.value.is_finite()
            || StrictlyPositive::check(&self.fin_conductivity.value).is_err()
        {
            return Err(GeometryError::FinConductivity {
                value: self.fin_conductivity,
            });
        }
        if self.fin_count == 0 {
            return Err(GeometryError::FinCount);
        }
        if self.channel_count == 0 {
            return Err(GeometryError::ChannelCount);
        }
        Ok(())
    }
}

/// Fixed per-face quantities derived from a [`HeatSink`].
///
/// Carries the fin dimensions and material conductivity through to the
/// fin-efficiency correlation so the per-point solver needs no second
/// look at the raw geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    /// Hydraulic diameter of one rectangular channel.
    pub hydraulic_diameter: Length,
    /// Channel length in the flow direction.
    pub channel_length: Length,
    /// Frontal flow area of the face (W · H_fin).
    pub frontal_area: Area,
    /// Total exposed fin surface area (two faces per fin).
    pub fin_area: Area,
    /// Exposed base area between fins.
    pub base_area: Area,
    /// Total convective area (fins plus base).
    pub total_area: Area,
    /// Fin height, for the fin-efficiency correlation.
    pub fin_height: Length,
    /// Fin thickness, for the fin-efficiency correlation.
    pub fin_thickness: Length,
    /// Fin material conductivity, for the fin-efficiency correlation.
    pub fin_conductivity: ThermalConductivity,
}

impl FaceGeometry {
    /// Fraction of the total convective area contributed by the fins.
    #[must_use]
    pub fn fin_area_fraction(&self) -> Ratio {
        self.fin_area / self.total_area
    }
}
