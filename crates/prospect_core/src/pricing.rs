//! Tiered cost evaluation
//!
//! Bracket-style billing: the portion of a quantity falling within a tier's
//! `[min, max)` range is charged at that tier's marginal rate, the same way
//! progressive tax brackets charge income.

use crate::error::SimulationError;
use crate::model::PricingTable;

/// Evaluate the total cost of `quantity` units against a bracket schedule.
///
/// Walks the tiers in ascending `min` order and accumulates
/// `(min(quantity, tier.max) - tier.min) * tier.unit_price` for every tier
/// whose floor the quantity exceeds. Higher tiers only contribute for the
/// excess above their floor, so for a contiguous non-overlapping table the
/// cost is continuous, piecewise-linear, and non-decreasing in `quantity`.
///
/// Overlapping tiers are not rejected here and double-count the overlapping
/// range; see [`PricingTable::validate_tiling`] for the opt-in strict check.
pub fn evaluate_tiers(quantity: f64, table: &PricingTable) -> Result<f64, SimulationError> {
    if quantity < 0.0 {
        return Err(SimulationError::NegativeQuantity(quantity));
    }
    if quantity == 0.0 {
        return Ok(0.0);
    }

    let mut total_cost = 0.0;
    for tier in table.tiers() {
        if quantity > tier.min {
            let units_in_tier = quantity.min(tier.max) - tier.min;
            total_cost += units_in_tier * tier.unit_price;
        }
    }

    Ok(total_cost)
}
