use std::fmt;

use crate::model::FunnelStage;

/// Errors found while validating a pricing table definition
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// A tier whose floor is not strictly below its ceiling
    InvertedTier { index: usize, min: f64, max: f64 },
    /// A tier with a negative unit price
    NegativePrice { index: usize, price: f64 },
    /// A tier whose floor is negative
    NegativeFloor { index: usize, min: f64 },
    /// Strict tiling check: tier overlaps the one before it
    Overlap { index: usize },
    /// Strict tiling check: gap between this tier and the one before it
    Gap { index: usize },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvertedTier { index, min, max } => {
                write!(f, "tier {index}: min ({min}) must be below max ({max})")
            }
            TableError::NegativePrice { index, price } => {
                write!(f, "tier {index}: unit price ({price}) must be non-negative")
            }
            TableError::NegativeFloor { index, min } => {
                write!(f, "tier {index}: min ({min}) must be non-negative")
            }
            TableError::Overlap { index } => {
                write!(f, "tier {index} overlaps the previous tier")
            }
            TableError::Gap { index } => {
                write!(f, "gap between tier {index} and the previous tier")
            }
        }
    }
}

impl std::error::Error for TableError {}

/// Errors reported at the `simulate`/sweep boundary
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Negative quantity passed to tier evaluation
    NegativeQuantity(f64),
    /// Negative lead volume in the configuration
    NegativeLeadVolume(f64),
    /// Negative minimum billing in the configuration
    NegativeMinimumBilling(f64),
    /// A funnel rate outside [0, 1]
    RateOutOfRange { stage: FunnelStage, rate: f64 },
    /// An invalid pricing table definition
    Table(TableError),
    /// Sweep axis misconfiguration
    Config(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::NegativeQuantity(q) => {
                write!(f, "quantity ({q}) must be non-negative")
            }
            SimulationError::NegativeLeadVolume(n) => {
                write!(f, "lead volume ({n}) must be non-negative")
            }
            SimulationError::NegativeMinimumBilling(m) => {
                write!(f, "minimum billing ({m}) must be non-negative")
            }
            SimulationError::RateOutOfRange { stage, rate } => {
                write!(f, "{stage} rate ({rate}) must be within [0, 1]")
            }
            SimulationError::Table(e) => write!(f, "{e}"),
            SimulationError::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Table(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TableError> for SimulationError {
    fn from(e: TableError) -> Self {
        SimulationError::Table(e)
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
