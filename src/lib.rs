//! # Immersion Models
//!
//! Analytical thermal-hydraulic and economic models for single-phase
//! immersion cooling of high-density ASIC compute modules.
//!
//! The centerpiece is a closed-form solver that sweeps coolant flow velocity
//! and reports, per candidate fluid, the module power the cooling loop can
//! reject, the hashrate that power supports, and the coolant outlet
//! temperature. An economics model prices the hashrate series as fleet-level
//! daily revenue.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it proves useful across models. Only utilities in
//! [`support`] are part of the public API; model-specific code stays private.

pub mod models;
pub mod support;
