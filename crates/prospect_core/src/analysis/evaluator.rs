//! Sweep evaluators - run the cost simulator over rate/volume variations.
//!
//! Every point derives its own config from the base (`with_rate` /
//! `with_total_leads`); the base config is never mutated. Points are
//! mutually independent, so with the `parallel` feature they are evaluated
//! with a rayon parallel map.

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::model::FunnelStage;
use crate::simulation::simulate;

use super::config::{Grid, RateAxis, VolumeSweepSpec};

/// One evaluated point of a volume series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub volume: f64,
    pub total_cost: f64,
}

/// One labeled cost-vs-volume curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeSeries {
    /// Display label, e.g. `"+10pp (25.0%)"`
    pub label: String,
    /// The varied stage's rate for this series
    pub rate: f64,
    pub is_target: bool,
    /// Ordered `(volume, total_cost)` pairs
    pub points: Vec<SweepPoint>,
}

/// Result of a volume sweep: one series per surviving rate variation plus
/// the base scenario's point for overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeSweep {
    /// The stage whose rate was varied
    pub stage: FunnelStage,
    pub series: Vec<VolumeSeries>,
    /// `(base.total_leads, base total cost)` for overlay annotation
    pub target: SweepPoint,
}

impl VolumeSweep {
    /// Labels of all series, in series order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.label.as_str()).collect()
    }
}

/// Sweep total cost over lead volume for labeled variations of one stage's
/// rate.
///
/// Variations that would leave `[0, 1]` are skipped (their series are
/// omitted); the target variation always survives since the base rate is
/// validated. Series are ordered by ascending rate.
pub fn sweep_volume(
    base_config: &SimulationConfig,
    spec: &VolumeSweepSpec,
) -> Result<VolumeSweep, SimulationError> {
    base_config.validate()?;
    spec.axis.validate()?;

    let stage = spec.variation.stage;
    let volumes = spec.axis.volumes();
    let variations = spec.variation.variations(base_config.rates.get(stage));

    let target_result = simulate(base_config)?;
    let target = SweepPoint {
        volume: base_config.total_leads,
        total_cost: target_result.total_cost,
    };

    let mut series = Vec::with_capacity(variations.len());
    for variation in variations {
        let config = base_config.with_rate(stage, variation.rate);

        #[cfg(feature = "parallel")]
        let points: Vec<SweepPoint> = volumes
            .par_iter()
            .map(|&volume| {
                let result = simulate(&config.with_total_leads(volume))?;
                Ok(SweepPoint {
                    volume,
                    total_cost: result.total_cost,
                })
            })
            .collect::<Result<_, SimulationError>>()?;

        #[cfg(not(feature = "parallel"))]
        let points: Vec<SweepPoint> = volumes
            .iter()
            .map(|&volume| {
                let result = simulate(&config.with_total_leads(volume))?;
                Ok(SweepPoint {
                    volume,
                    total_cost: result.total_cost,
                })
            })
            .collect::<Result<_, SimulationError>>()?;

        series.push(VolumeSeries {
            label: variation.label,
            rate: variation.rate,
            is_target: variation.is_target,
            points,
        });
    }

    Ok(VolumeSweep {
        stage,
        series,
        target,
    })
}

/// Result of a two-factor grid sweep: three parallel matrices over the same
/// `(row, col)` rate axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSweep {
    pub row_axis: RateAxis,
    pub col_axis: RateAxis,
    /// Total cost per cell
    pub total_cost: Grid<f64>,
    /// Cost per booked meeting per cell (0 where nothing books)
    pub cost_per_acquisition: Grid<f64>,
    /// Booked-meeting count per cell
    pub booked: Grid<f64>,
    /// Cell nearest to the base config's rate pair, for overlay annotation
    pub target_cell: Option<(usize, usize)>,
}

/// Extrema across a sweep grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSummary {
    pub min_cost: f64,
    pub max_cost: f64,
    pub max_booked: f64,
}

impl GridSweep {
    /// Best/worst total cost and maximum bookings across the grid.
    #[must_use]
    pub fn summary(&self) -> GridSummary {
        let mut min_cost = f64::INFINITY;
        let mut max_cost = f64::NEG_INFINITY;
        let mut max_booked = f64::NEG_INFINITY;
        for &cost in self.total_cost.data() {
            min_cost = min_cost.min(cost);
            max_cost = max_cost.max(cost);
        }
        for &count in self.booked.data() {
            max_booked = max_booked.max(count);
        }
        GridSummary {
            min_cost,
            max_cost,
            max_booked,
        }
    }
}

/// Sweep total cost, cost per acquisition, and bookings over every
/// combination of two rate axes at the base lead volume.
///
/// Rows follow `row_axis` ascending, columns follow `col_axis` ascending.
/// The two axes must target different funnel stages.
pub fn sweep_grid(
    base_config: &SimulationConfig,
    row_axis: &RateAxis,
    col_axis: &RateAxis,
) -> Result<GridSweep, SimulationError> {
    base_config.validate()?;
    row_axis.validate()?;
    col_axis.validate()?;
    if row_axis.stage == col_axis.stage {
        return Err(SimulationError::Config(format!(
            "grid axes must vary different stages, both are {}",
            row_axis.stage
        )));
    }

    let rows = row_axis.values.len();
    let cols = col_axis.values.len();
    let cells: Vec<(usize, usize)> = (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .collect();

    let evaluate_cell = |&(row, col): &(usize, usize)| {
        let rates = base_config
            .rates
            .with(row_axis.stage, row_axis.values[row])
            .with(col_axis.stage, col_axis.values[col]);
        let config = SimulationConfig {
            rates,
            ..base_config.clone()
        };
        let result = simulate(&config)?;
        Ok((
            result.total_cost,
            result.cost_per_acquisition,
            result.counts.booked,
        ))
    };

    #[cfg(feature = "parallel")]
    let outcomes: Vec<(f64, f64, f64)> = cells
        .par_iter()
        .map(evaluate_cell)
        .collect::<Result<_, SimulationError>>()?;

    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<(f64, f64, f64)> = cells
        .iter()
        .map(evaluate_cell)
        .collect::<Result<_, SimulationError>>()?;

    let mut total_cost = Grid::new(rows, cols, 0.0);
    let mut cost_per_acquisition = Grid::new(rows, cols, 0.0);
    let mut booked = Grid::new(rows, cols, 0.0);
    for (&(row, col), &(cost, cpa, meetings)) in cells.iter().zip(&outcomes) {
        total_cost.set(row, col, cost);
        cost_per_acquisition.set(row, col, cpa);
        booked.set(row, col, meetings);
    }

    let target_cell = match (
        row_axis.nearest_index(base_config.rates.get(row_axis.stage)),
        col_axis.nearest_index(base_config.rates.get(col_axis.stage)),
    ) {
        (Some(row), Some(col)) => Some((row, col)),
        _ => None,
    };

    Ok(GridSweep {
        row_axis: row_axis.clone(),
        col_axis: col_axis.clone(),
        total_cost,
        cost_per_acquisition,
        booked,
        target_cell,
    })
}
