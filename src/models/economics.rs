//! Economic models.
//!
//! This module contains models that translate hardware performance into
//! financial terms, currently fleet-level mining revenue.

pub mod revenue;
