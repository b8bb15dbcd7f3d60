//! Thermal systems models.
//!
//! This module contains models for the thermal side of immersion-cooled
//! compute hardware: heat sink convection, module conduction, and the
//! coolant-side effectiveness-NTU stream model.

pub mod immersion;
