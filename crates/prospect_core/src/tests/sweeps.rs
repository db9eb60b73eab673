//! Tests for the sensitivity sweeps
//!
//! These tests verify:
//! - Variation labeling and [0, 1] clipping for volume sweeps
//! - Series ordering, length, and the target overlay point
//! - Grid matrix shapes and cell values against direct simulation
//! - Nearest-cell target matching and grid extrema
//! - That sweeps never mutate the base config

use crate::analysis::{
    RateAxis, RateVariationSpec, VolumeAxis, VolumeSweepSpec, sweep_grid, sweep_volume,
};
use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::model::FunnelStage;
use crate::simulation::simulate;

/// At a 15% response rate the -20pp variation falls below zero and its
/// series is omitted; the rest survive in ascending rate order
#[test]
fn test_volume_sweep_clips_low_variations() {
    let config = SimulationConfig::reference();
    let sweep = sweep_volume(&config, &VolumeSweepSpec::for_stage(FunnelStage::Response)).unwrap();

    assert_eq!(
        sweep.labels(),
        vec![
            "-10pp (5.0%)",
            "Target (15.0%)",
            "+10pp (25.0%)",
            "+20pp (35.0%)"
        ]
    );
    assert!(sweep.series[1].is_target);
    assert!((sweep.series[1].rate - 0.15).abs() < 1e-12);
}

/// Booking variations step by 15pp and all five fit at a 33% base rate
#[test]
fn test_volume_sweep_booking_steps() {
    let config = SimulationConfig::reference();
    let sweep = sweep_volume(&config, &VolumeSweepSpec::for_stage(FunnelStage::Booking)).unwrap();

    assert_eq!(sweep.series.len(), 5);
    assert_eq!(sweep.series[0].label, "-30pp (3.0%)");
    assert_eq!(sweep.series[4].label, "+30pp (63.0%)");
}

/// The default axis runs 0..=3500 in steps of 100, ordered ascending
#[test]
fn test_volume_sweep_series_points() {
    let config = SimulationConfig::reference();
    let sweep = sweep_volume(&config, &VolumeSweepSpec::for_stage(FunnelStage::Response)).unwrap();

    for series in &sweep.series {
        assert_eq!(series.points.len(), 36);
        assert_eq!(series.points[0].volume, 0.0);
        assert_eq!(series.points[35].volume, 3500.0);
        // Non-negative prices make each curve non-decreasing in volume
        for pair in series.points.windows(2) {
            assert!(pair[1].total_cost >= pair[0].total_cost);
        }
    }
}

/// The overlay point is the base scenario's own simulation
#[test]
fn test_volume_sweep_target_point() {
    let config = SimulationConfig::reference();
    let sweep = sweep_volume(&config, &VolumeSweepSpec::for_stage(FunnelStage::Response)).unwrap();

    let expected = simulate(&config).unwrap().total_cost;
    assert_eq!(sweep.target.volume, 2500.0);
    assert!((sweep.target.total_cost - expected).abs() < 1e-9);
}

/// Every series point agrees with a direct simulation of the derived config
#[test]
fn test_volume_sweep_matches_direct_simulation() {
    let config = SimulationConfig::reference();
    let spec = VolumeSweepSpec {
        variation: RateVariationSpec::for_stage(FunnelStage::Qualification),
        axis: VolumeAxis {
            max_volume: 500.0,
            step: 250.0,
        },
    };
    let sweep = sweep_volume(&config, &spec).unwrap();

    for series in &sweep.series {
        for point in &series.points {
            let derived = config
                .with_rate(FunnelStage::Qualification, series.rate)
                .with_total_leads(point.volume);
            let expected = simulate(&derived).unwrap().total_cost;
            assert!(
                (point.total_cost - expected).abs() < 1e-9,
                "series {} at volume {}",
                series.label,
                point.volume
            );
        }
    }
}

#[test]
fn test_volume_sweep_rejects_bad_axis() {
    let config = SimulationConfig::reference();
    let spec = VolumeSweepSpec {
        variation: RateVariationSpec::for_stage(FunnelStage::Response),
        axis: VolumeAxis {
            max_volume: 1000.0,
            step: 0.0,
        },
    };
    assert!(matches!(
        sweep_volume(&config, &spec),
        Err(SimulationError::Config(_))
    ));
}

/// Reference axes: qualification 0..=35% x booking 0..=50%, 5pp steps
#[test]
fn test_grid_sweep_shape() {
    let config = SimulationConfig::reference();
    let grid = sweep_grid(
        &config,
        &RateAxis::qualification_reference(),
        &RateAxis::booking_reference(),
    )
    .unwrap();

    assert_eq!(grid.total_cost.rows(), 8);
    assert_eq!(grid.total_cost.cols(), 11);
    assert_eq!(grid.cost_per_acquisition.rows(), 8);
    assert_eq!(grid.booked.cols(), 11);
}

/// A zero qualification or booking rate forces zero bookings and zero CPA
/// across the whole row/column, regardless of the other rate
#[test]
fn test_grid_sweep_zero_rate_boundaries() {
    let config = SimulationConfig::reference();
    let grid = sweep_grid(
        &config,
        &RateAxis::qualification_reference(),
        &RateAxis::booking_reference(),
    )
    .unwrap();

    for col in 0..grid.booked.cols() {
        assert_eq!(*grid.booked.get(0, col).unwrap(), 0.0);
        assert_eq!(*grid.cost_per_acquisition.get(0, col).unwrap(), 0.0);
    }
    for row in 0..grid.booked.rows() {
        assert_eq!(*grid.booked.get(row, 0).unwrap(), 0.0);
        assert_eq!(*grid.cost_per_acquisition.get(row, 0).unwrap(), 0.0);
    }
}

/// Cells agree with direct simulation of the derived rate pair
#[test]
fn test_grid_sweep_cell_values() {
    let config = SimulationConfig::reference();
    let row_axis = RateAxis::qualification_reference();
    let col_axis = RateAxis::booking_reference();
    let grid = sweep_grid(&config, &row_axis, &col_axis).unwrap();

    let derived = config
        .with_rate(FunnelStage::Qualification, row_axis.values[5])
        .with_rate(FunnelStage::Booking, col_axis.values[7]);
    let expected = simulate(&derived).unwrap();

    assert!((grid.total_cost.get(5, 7).unwrap() - expected.total_cost).abs() < 1e-9);
    assert!(
        (grid.cost_per_acquisition.get(5, 7).unwrap() - expected.cost_per_acquisition).abs()
            < 1e-9
    );
    assert!((grid.booked.get(5, 7).unwrap() - expected.counts.booked).abs() < 1e-9);
}

/// The target pair (25%, 33%) matches 25% exactly and lands on 35% as the
/// nearest booking value
#[test]
fn test_grid_sweep_target_cell() {
    let config = SimulationConfig::reference();
    let grid = sweep_grid(
        &config,
        &RateAxis::qualification_reference(),
        &RateAxis::booking_reference(),
    )
    .unwrap();

    assert_eq!(grid.target_cell, Some((5, 7)));
}

/// Summary extrema: max bookings occur at the highest rate pair
#[test]
fn test_grid_sweep_summary() {
    let config = SimulationConfig::reference();
    let grid = sweep_grid(
        &config,
        &RateAxis::qualification_reference(),
        &RateAxis::booking_reference(),
    )
    .unwrap();
    let summary = grid.summary();

    // 2500 x 0.15 x 0.35 x 0.50 meetings
    assert!((summary.max_booked - 65.625).abs() < 1e-6);
    assert!(summary.min_cost <= summary.max_cost);

    let corner = *grid.booked.get(7, 10).unwrap();
    assert!((corner - summary.max_booked).abs() < 1e-9);
}

/// Sweeps derive fresh configs; the base is left untouched
#[test]
fn test_sweeps_do_not_mutate_base_config() {
    let config = SimulationConfig::reference();
    let snapshot = config.clone();

    sweep_volume(&config, &VolumeSweepSpec::for_stage(FunnelStage::Booking)).unwrap();
    sweep_grid(
        &config,
        &RateAxis::qualification_reference(),
        &RateAxis::booking_reference(),
    )
    .unwrap();

    assert_eq!(config, snapshot);
}

#[test]
fn test_grid_sweep_rejects_bad_axes() {
    let config = SimulationConfig::reference();

    let empty = RateAxis::new(FunnelStage::Qualification, vec![]);
    assert!(matches!(
        sweep_grid(&config, &empty, &RateAxis::booking_reference()),
        Err(SimulationError::Config(_))
    ));

    let out_of_range = RateAxis::new(FunnelStage::Booking, vec![0.5, 1.5]);
    assert_eq!(
        sweep_grid(&config, &RateAxis::qualification_reference(), &out_of_range),
        Err(SimulationError::RateOutOfRange {
            stage: FunnelStage::Booking,
            rate: 1.5
        })
    );

    let same_stage = RateAxis::percent_range(FunnelStage::Booking, 0, 50, 5);
    assert!(matches!(
        sweep_grid(&config, &same_stage, &RateAxis::booking_reference()),
        Err(SimulationError::Config(_))
    ));
}
