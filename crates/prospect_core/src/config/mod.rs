//! Simulation configuration
//!
//! `SimulationConfig` bundles everything one simulation needs: lead volume,
//! funnel rates, stage price tables, and the minimum-billing floor. Configs
//! are constructed fresh per call and never mutated by the engine; callers
//! that vary a field build a new config (or use [`SimulationBuilder`]).

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::model::{FunnelRates, FunnelStage, StageTables};

pub mod builder;

pub use builder::SimulationBuilder;

/// Everything needed to run one cost simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Lead volume fed into the funnel
    pub total_leads: f64,

    /// Stage conversion rates, each expected in [0, 1]
    pub rates: FunnelRates,

    /// Price schedules per charged stage
    pub tables: StageTables,

    /// Cost floor applied to the calculated cost
    #[serde(default)]
    pub minimum_billing: f64,
}

impl SimulationConfig {
    /// The documented reference scenario: 2500 leads at the POC conversion
    /// rates, priced with [`StageTables::reference`], no billing floor.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            total_leads: 2500.0,
            rates: FunnelRates::new(0.15, 0.25, 0.33),
            tables: StageTables::reference(),
            minimum_billing: 0.0,
        }
    }

    /// Eager boundary validation: non-negative volume and floor, every rate
    /// within [0, 1]. Table validity is enforced at table construction, so
    /// it is not re-checked here.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.total_leads < 0.0 {
            return Err(SimulationError::NegativeLeadVolume(self.total_leads));
        }
        if self.minimum_billing < 0.0 {
            return Err(SimulationError::NegativeMinimumBilling(
                self.minimum_billing,
            ));
        }
        for stage in [
            FunnelStage::Response,
            FunnelStage::Qualification,
            FunnelStage::Booking,
        ] {
            let rate = self.rates.get(stage);
            if !(0.0..=1.0).contains(&rate) {
                return Err(SimulationError::RateOutOfRange { stage, rate });
            }
        }
        Ok(())
    }

    /// A copy with one stage's rate replaced. Sweeps derive per-point
    /// configs this way.
    #[must_use]
    pub fn with_rate(&self, stage: FunnelStage, rate: f64) -> Self {
        Self {
            rates: self.rates.with(stage, rate),
            ..self.clone()
        }
    }

    /// A copy with a different lead volume.
    #[must_use]
    pub fn with_total_leads(&self, total_leads: f64) -> Self {
        Self {
            total_leads,
            ..self.clone()
        }
    }
}
