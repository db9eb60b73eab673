//! Funnel types
//!
//! Conversion stages and their rates. Propagation logic is in the `funnel`
//! module.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A conversion stage of the prospecting funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunnelStage {
    /// Sent leads that reply
    Response,
    /// Replies that qualify
    Qualification,
    /// Qualified leads that book a meeting
    Booking,
}

impl fmt::Display for FunnelStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunnelStage::Response => write!(f, "response"),
            FunnelStage::Qualification => write!(f, "qualification"),
            FunnelStage::Booking => write!(f, "booking"),
        }
    }
}

/// Conversion rates for each funnel stage, each expected in [0, 1].
///
/// The engine validates the range at the `simulate`/sweep boundary rather
/// than clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FunnelRates {
    /// Fraction of sent leads that reply
    pub response: f64,
    /// Fraction of replies that qualify
    pub qualification: f64,
    /// Fraction of qualified leads that book a meeting
    pub booking: f64,
}

impl FunnelRates {
    #[must_use]
    pub fn new(response: f64, qualification: f64, booking: f64) -> Self {
        Self {
            response,
            qualification,
            booking,
        }
    }

    /// Rate for a single stage.
    #[must_use]
    pub fn get(&self, stage: FunnelStage) -> f64 {
        match stage {
            FunnelStage::Response => self.response,
            FunnelStage::Qualification => self.qualification,
            FunnelStage::Booking => self.booking,
        }
    }

    /// A copy with one stage's rate replaced. Sweeps derive per-point rate
    /// sets this way instead of mutating a shared value.
    #[must_use]
    pub fn with(&self, stage: FunnelStage, rate: f64) -> Self {
        let mut rates = *self;
        match stage {
            FunnelStage::Response => rates.response = rate,
            FunnelStage::Qualification => rates.qualification = rate,
            FunnelStage::Booking => rates.booking = rate,
        }
        rates
    }
}

/// Expected lead counts at each funnel stage.
///
/// Counts are expected values and may be fractional; no rounding is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FunnelCounts {
    pub replies: f64,
    pub no_replies: f64,
    pub qualified: f64,
    pub booked: f64,
}
