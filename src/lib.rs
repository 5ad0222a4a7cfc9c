//! Build price estimator for modular homes.
//!
//! This crate prices a modular home build from its province and floor areas,
//! producing an itemized breakdown (base build, foundation, delivery,
//! appliances, utilities, permit fees) with min/max/average grand totals and
//! an audit trail of every rule applied.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
