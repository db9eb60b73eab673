//! Cost simulation
//!
//! Combines the funnel model, the stage price tables, and the
//! minimum-billing floor into one point estimate.

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::funnel::propagate;
use crate::model::{SimulationResult, StageCosts};
use crate::pricing::evaluate_tiers;

/// Run one cost simulation.
///
/// Validates the config eagerly, propagates the funnel, prices each stage,
/// applies the minimum-billing floor, and derives per-lead and
/// per-acquisition metrics. Both `calculated_cost` and `total_cost` are
/// returned so callers can detect and report the floor.
///
/// Deterministic and side-effect free: identical configs (by value) yield
/// bit-identical results.
pub fn simulate(config: &SimulationConfig) -> Result<SimulationResult, SimulationError> {
    config.validate()?;

    let counts = propagate(config.total_leads, &config.rates);

    let costs = StageCosts {
        no_reply: config.tables.no_reply.cost(counts.no_replies),
        replies: evaluate_tiers(counts.replies, &config.tables.leads)?,
        qualified: evaluate_tiers(counts.qualified, &config.tables.qualified)?,
        booked: evaluate_tiers(counts.booked, &config.tables.booked)?,
    };

    let calculated_cost = costs.sum();
    let total_cost = calculated_cost.max(config.minimum_billing);

    // Zero denominators are defined to yield 0, not an error.
    let cost_per_lead = if config.total_leads > 0.0 {
        total_cost / config.total_leads
    } else {
        0.0
    };
    let cost_per_acquisition = if counts.booked > 0.0 {
        total_cost / counts.booked
    } else {
        0.0
    };

    Ok(SimulationResult {
        total_leads: config.total_leads,
        counts,
        costs,
        calculated_cost,
        total_cost,
        cost_per_lead,
        cost_per_acquisition,
    })
}
