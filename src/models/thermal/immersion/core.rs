mod conditions;
mod conduction;
mod correlations;
mod error;
mod geometry;
mod point;
mod results;
mod sweep;

pub use conditions::{ConditionsError, OperatingConditions};
pub use conduction::{LayoutError, ModuleLayout};
pub use error::SolveError;
pub use geometry::{FaceGeometry, GeometryError, HeatSink};
pub use point::PointSolution;
pub use results::{DataPoint, SimulationResult};
pub use sweep::{SweepError, VelocitySweep, solve, solve_single};
