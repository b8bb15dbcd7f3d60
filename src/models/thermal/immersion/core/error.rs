use thiserror::Error;
use uom::si::f64::Velocity;

use crate::support::coolant::CoolantError;

use super::{
    conditions::ConditionsError, conduction::LayoutError, geometry::GeometryError,
    sweep::SweepError,
};

/// An error returned when a sweep cannot be solved.
///
/// Inputs are checked before any operating point is evaluated, so the first
/// invalid field aborts the whole run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolveError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Conditions(#[from] ConditionsError),

    #[error(transparent)]
    Sweep(#[from] SweepError),

    /// A selected coolant has an invalid property.
    #[error("coolant `{id}` is invalid")]
    Coolant {
        id: String,
        #[source]
        source: CoolantError,
    },

    /// A single-point evaluation was requested at a degenerate velocity.
    #[error("velocity must be finite and strictly positive: {value:?}")]
    Velocity { value: Velocity },
}
