//! Simulation results
//!
//! Output types from a single cost simulation, including the itemized cost
//! breakdown consumed by reporting layers.

use serde::{Deserialize, Serialize};

use super::funnel::FunnelCounts;

/// Cost of each charged funnel stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageCosts {
    pub no_reply: f64,
    pub replies: f64,
    pub qualified: f64,
    pub booked: f64,
}

impl StageCosts {
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.no_reply + self.replies + self.qualified + self.booked
    }
}

/// Complete result of one cost simulation.
///
/// Created fresh per call and never cached; two simulations of
/// value-identical configs produce bit-identical results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Lead volume the funnel was fed with
    pub total_leads: f64,
    /// Expected counts at each funnel stage
    pub counts: FunnelCounts,
    /// Per-stage costs
    pub costs: StageCosts,
    /// Sum of stage costs before the minimum-billing floor
    pub calculated_cost: f64,
    /// Cost after the minimum-billing floor
    pub total_cost: f64,
    /// `total_cost / total_leads`, 0 when no leads were processed
    pub cost_per_lead: f64,
    /// `total_cost / booked`, 0 when no meetings were booked
    pub cost_per_acquisition: f64,
}

impl SimulationResult {
    /// Whether the minimum-billing floor raised the total.
    #[must_use]
    pub fn minimum_billing_applied(&self) -> bool {
        self.total_cost > self.calculated_cost
    }

    /// Amount added by the minimum-billing floor (0 when not applied).
    #[must_use]
    pub fn minimum_billing_adjustment(&self) -> f64 {
        self.total_cost - self.calculated_cost
    }

    /// Itemized cost composition: one line per charged stage, plus an
    /// adjustment line when the minimum-billing floor was applied.
    #[must_use]
    pub fn breakdown(&self) -> CostBreakdown {
        let mut lines = vec![
            BreakdownLine::new(
                CostComponent::NoReply,
                Some(self.counts.no_replies),
                self.costs.no_reply,
                self.total_cost,
            ),
            BreakdownLine::new(
                CostComponent::Replies,
                Some(self.counts.replies),
                self.costs.replies,
                self.total_cost,
            ),
            BreakdownLine::new(
                CostComponent::Qualified,
                Some(self.counts.qualified),
                self.costs.qualified,
                self.total_cost,
            ),
            BreakdownLine::new(
                CostComponent::Booked,
                Some(self.counts.booked),
                self.costs.booked,
                self.total_cost,
            ),
        ];
        if self.minimum_billing_applied() {
            lines.push(BreakdownLine::new(
                CostComponent::MinimumBillingAdjustment,
                None,
                self.minimum_billing_adjustment(),
                self.total_cost,
            ));
        }
        CostBreakdown {
            lines,
            total_cost: self.total_cost,
        }
    }
}

/// A component of the cost composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostComponent {
    NoReply,
    Replies,
    Qualified,
    Booked,
    MinimumBillingAdjustment,
}

/// One line of the cost composition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreakdownLine {
    pub component: CostComponent,
    /// Stage count behind the charge; None for the adjustment line
    pub quantity: Option<f64>,
    pub cost: f64,
    /// Fraction of the total cost (0 when the total is 0)
    pub share: f64,
}

impl BreakdownLine {
    fn new(component: CostComponent, quantity: Option<f64>, cost: f64, total_cost: f64) -> Self {
        let share = if total_cost > 0.0 {
            cost / total_cost
        } else {
            0.0
        };
        Self {
            component,
            quantity,
            cost,
            share,
        }
    }
}

/// Itemized cost composition for a simulation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub lines: Vec<BreakdownLine>,
    pub total_cost: f64,
}
