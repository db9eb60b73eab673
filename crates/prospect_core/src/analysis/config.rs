//! Sweep specifications and grid storage.

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::model::FunnelStage;

/// A labeled rate value produced by a variation spec.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateVariation {
    /// Display label, e.g. `"-20pp (5.0%)"` or `"Target (15.0%)"`
    pub label: String,
    pub rate: f64,
    pub is_target: bool,
}

/// Symmetric rate variations around a target rate for one funnel stage.
///
/// Variations are generated at offsets `k * step` for `k` in
/// `-steps_each_side..=steps_each_side`; any variation outside `[0, 1]` is
/// skipped rather than clamped, so the labeled series is simply omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateVariationSpec {
    pub stage: FunnelStage,
    /// Offset per step, in rate units (0.10 = 10 percentage points)
    pub step: f64,
    pub steps_each_side: usize,
}

impl RateVariationSpec {
    /// Default variation steps per stage: response and qualification move in
    /// 10pp steps, booking in 15pp steps, two steps each side.
    #[must_use]
    pub fn for_stage(stage: FunnelStage) -> Self {
        let step = match stage {
            FunnelStage::Response | FunnelStage::Qualification => 0.10,
            FunnelStage::Booking => 0.15,
        };
        Self {
            stage,
            step,
            steps_each_side: 2,
        }
    }

    /// Labeled variations around `base_rate`, ascending, clipped to `[0, 1]`.
    #[must_use]
    pub fn variations(&self, base_rate: f64) -> Vec<RateVariation> {
        let n = self.steps_each_side as i32;
        (-n..=n)
            .filter_map(|k| {
                let rate = base_rate + f64::from(k) * self.step;
                if !(0.0..=1.0).contains(&rate) {
                    return None;
                }
                let label = if k == 0 {
                    format!("Target ({:.1}%)", rate * 100.0)
                } else {
                    format!(
                        "{:+.0}pp ({:.1}%)",
                        f64::from(k) * self.step * 100.0,
                        rate * 100.0
                    )
                };
                Some(RateVariation {
                    label,
                    rate,
                    is_target: k == 0,
                })
            })
            .collect()
    }
}

/// Lead-volume axis for the 1-D sweep: `0..=max_volume` in `step` increments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeAxis {
    pub max_volume: f64,
    pub step: f64,
}

impl Default for VolumeAxis {
    fn default() -> Self {
        Self {
            max_volume: 3500.0,
            step: 100.0,
        }
    }
}

impl VolumeAxis {
    pub(crate) fn validate(&self) -> Result<(), SimulationError> {
        if self.max_volume < 0.0 {
            return Err(SimulationError::Config(format!(
                "volume axis maximum ({}) must be non-negative",
                self.max_volume
            )));
        }
        if self.step <= 0.0 {
            return Err(SimulationError::Config(format!(
                "volume axis step ({}) must be positive",
                self.step
            )));
        }
        Ok(())
    }

    /// Ordered volumes on the axis, starting at 0.
    #[must_use]
    pub fn volumes(&self) -> Vec<f64> {
        (0..)
            .map(|i| f64::from(i) * self.step)
            .take_while(|v| *v <= self.max_volume)
            .collect()
    }
}

/// Full specification for a volume sweep: which stage to vary and over which
/// volume range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeSweepSpec {
    pub variation: RateVariationSpec,
    pub axis: VolumeAxis,
}

impl VolumeSweepSpec {
    /// Default spec for a stage: stage-specific variation steps over the
    /// reference 0..=3500 volume range.
    #[must_use]
    pub fn for_stage(stage: FunnelStage) -> Self {
        Self {
            variation: RateVariationSpec::for_stage(stage),
            axis: VolumeAxis::default(),
        }
    }
}

/// One axis of the 2-D grid sweep: a funnel stage and the rate values to
/// evaluate, ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateAxis {
    pub stage: FunnelStage,
    pub values: Vec<f64>,
}

impl RateAxis {
    #[must_use]
    pub fn new(stage: FunnelStage, values: Vec<f64>) -> Self {
        Self { stage, values }
    }

    /// Axis over whole-percent rates: `from_pct..=to_pct` in `step_pct`
    /// increments.
    #[must_use]
    pub fn percent_range(stage: FunnelStage, from_pct: u32, to_pct: u32, step_pct: u32) -> Self {
        let values = (from_pct..=to_pct)
            .step_by(step_pct.max(1) as usize)
            .map(|p| f64::from(p) / 100.0)
            .collect();
        Self { stage, values }
    }

    /// Reference qualification axis: 0% to 35% in 5pp steps.
    #[must_use]
    pub fn qualification_reference() -> Self {
        Self::percent_range(FunnelStage::Qualification, 0, 35, 5)
    }

    /// Reference booking axis: 0% to 50% in 5pp steps.
    #[must_use]
    pub fn booking_reference() -> Self {
        Self::percent_range(FunnelStage::Booking, 0, 50, 5)
    }

    pub(crate) fn validate(&self) -> Result<(), SimulationError> {
        if self.values.is_empty() {
            return Err(SimulationError::Config(format!(
                "{} axis has no values",
                self.stage
            )));
        }
        for &rate in &self.values {
            if !(0.0..=1.0).contains(&rate) {
                return Err(SimulationError::RateOutOfRange {
                    stage: self.stage,
                    rate,
                });
            }
        }
        Ok(())
    }

    /// Index of the axis value closest to `rate` (first wins on ties).
    /// None only for an empty axis.
    #[must_use]
    pub fn nearest_index(&self, rate: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &value) in self.values.iter().enumerate() {
            let distance = (value - rate).abs();
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((i, distance)),
            }
        }
        best.map(|(i, _)| i)
    }
}

/// Row-major 2-D matrix storage backing the grid sweep outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Clone> Grid<T> {
    /// Create a grid filled with `default`.
    #[must_use]
    pub fn new(rows: usize, cols: usize, default: T) -> Self {
        Self {
            data: vec![default; rows * cols],
            rows,
            cols,
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col)
    }

    /// Set a cell; returns false when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.data[row * self.cols + col] = value;
        true
    }

    /// One row as a slice.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }
        Some(&self.data[row * self.cols..(row + 1) * self.cols])
    }

    /// The flat backing data in row-major order.
    #[must_use]
    pub fn data(&self) -> &[T] {
        &self.data
    }
}
