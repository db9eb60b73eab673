//! Prospecting cost simulation library
//!
//! This crate models the cost of a sales-prospecting campaign as leads move
//! through a funnel (sent -> replied -> qualified -> booked). It supports:
//! - Tiered (bracket-style) price schedules per funnel stage
//! - Funnel propagation with fractional expected counts
//! - Minimum-billing floors with a reportable adjustment line
//! - Derived cost-per-lead and cost-per-acquisition metrics
//! - Sensitivity sweeps: 1-D cost-vs-volume curves and 2-D rate-vs-rate
//!   matrices, evaluated in parallel with the `parallel` feature
//!
//! The engine is a pure, stateless computation library: every call takes an
//! explicit [`config::SimulationConfig`] and returns a fresh result.
//!
//! # Builder DSL
//!
//! Use the fluent builder API for ergonomic configuration setup:
//!
//! ```
//! use prospect_core::config::SimulationBuilder;
//! use prospect_core::simulation::simulate;
//!
//! let config = SimulationBuilder::new()
//!     .total_leads(2500.0)
//!     .response_rate(0.15)
//!     .qualification_rate(0.25)
//!     .booking_rate(0.33)
//!     .minimum_billing(1000.0)
//!     .build()
//!     .unwrap();
//!
//! let result = simulate(&config).unwrap();
//! assert!(result.total_cost >= config.minimum_billing);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod funnel;
pub mod pricing;
pub mod simulation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{sweep_grid, sweep_volume};
pub use config::{SimulationBuilder, SimulationConfig};
pub use error::{SimulationError, TableError};
pub use model::{FunnelRates, FunnelStage, PricingTable, SimulationResult, StageTables, Tier};
pub use pricing::evaluate_tiers;
pub use simulation::simulate;
