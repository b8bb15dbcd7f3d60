//! Laminar convection and fin correlations.

use uom::si::{
    f64::{HeatTransfer, Length, Ratio},
    ratio::ratio,
};

use super::geometry::FaceGeometry;

/// Fully developed Nusselt number for infinite parallel plates.
///
/// Floor for the developing-flow correlation; the max against it is a
/// discontinuous clamp, not a smooth blend.
pub(crate) const FULLY_DEVELOPED_NUSSELT: f64 = 7.54;

/// Sieder-Tate-style developing laminar Nusselt number, clamped to the
/// fully developed limit.
///
/// `Nu = max(1.86·(Re·Pr·Dh/L)^(1/3), 7.54)`
///
/// The developing-flow term decays without bound as Re → 0; the clamp
/// models the transition to fully developed flow at low velocity. Valid in
/// the laminar regime (Re < 2300) only; no turbulent correlation is
/// applied and callers are responsible for staying in range.
pub(crate) fn nusselt_laminar(
    reynolds: Ratio,
    prandtl: Ratio,
    hydraulic_diameter: Length,
    channel_length: Length,
) -> Ratio {
    let graetz_like = reynolds.get::<ratio>()
        * prandtl.get::<ratio>()
        * (hydraulic_diameter / channel_length).get::<ratio>();
    let developing = 1.86 * graetz_like.cbrt();

    Ratio::new::<ratio>(developing.max(FULLY_DEVELOPED_NUSSELT))
}

/// Adiabatic-tip rectangular fin efficiency, `tanh(m·H) / (m·H)` with
/// `m = sqrt(2h / (k_fin·t_fin))`.
pub(crate) fn fin_efficiency(convection: HeatTransfer, face: &FaceGeometry) -> Ratio {
    let m = (2.0 * convection.value / (face.fin_conductivity.value * face.fin_thickness.value))
        .sqrt();
    let mh = m * face.fin_height.value;

    Ratio::new::<ratio>(mh.tanh() / mh)
}

/// Overall surface efficiency, the area-weighted blend of finned and
/// unfinned surface: `η_o = 1 − (A_fin/A_total)·(1 − η_fin)`.
pub(crate) fn surface_efficiency(fin_efficiency: Ratio, face: &FaceGeometry) -> Ratio {
    let fin_fraction = face.fin_area_fraction().get::<ratio>();

    Ratio::new::<ratio>(1.0 - fin_fraction * (1.0 - fin_efficiency.get::<ratio>()))
}
