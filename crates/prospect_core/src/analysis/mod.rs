//! Sensitivity sweep module.
//!
//! Re-evaluates the cost simulator across varied assumptions to
//! characterize outcome ranges:
//!
//! - [`sweep_volume`] builds one cost-vs-volume series per labeled variation
//!   of a single stage's rate (variations leaving `[0, 1]` are skipped).
//! - [`sweep_grid`] builds total-cost, cost-per-acquisition, and
//!   booked-meeting matrices over every combination of two rate axes.
//!
//! Both are pure: they take the base config plus axis specifications and
//! return series/matrices with enough metadata (labels, axis values, target
//! overlay) for a presentation layer to render without recomputation.
//!
//! ```
//! use prospect_core::analysis::{RateAxis, VolumeSweepSpec, sweep_grid, sweep_volume};
//! use prospect_core::config::SimulationConfig;
//! use prospect_core::model::FunnelStage;
//!
//! let config = SimulationConfig::reference();
//!
//! let curves = sweep_volume(&config, &VolumeSweepSpec::for_stage(FunnelStage::Response))?;
//! assert_eq!(curves.series.len(), 4); // -20pp falls below 0% and is skipped
//!
//! let grid = sweep_grid(
//!     &config,
//!     &RateAxis::qualification_reference(),
//!     &RateAxis::booking_reference(),
//! )?;
//! assert_eq!(grid.total_cost.rows(), 8);
//! assert_eq!(grid.total_cost.cols(), 11);
//! # Ok::<(), prospect_core::error::SimulationError>(())
//! ```

mod config;
mod evaluator;

pub use config::*;
pub use evaluator::*;
