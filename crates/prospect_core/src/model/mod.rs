mod funnel;
mod results;
mod tables;

pub use funnel::{FunnelCounts, FunnelRates, FunnelStage};
pub use results::{
    BreakdownLine, CostBreakdown, CostComponent, SimulationResult, StageCosts,
};
pub use tables::{FlatRate, PricingTable, StageTables, Tier};
