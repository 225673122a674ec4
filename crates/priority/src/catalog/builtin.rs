//! Built-in SEPTA data: the core bus spine, latent demand hotspots, mode
//! recovery figures and the "day in the network" snapshots.
//!
//! Path coordinates are written (lat, lon) as in the source map data.

use chrono::NaiveTime;
use geo::Point;

use crate::identifiers::*;
use crate::models::demand::{DemandPriority, LatentDemandTarget};
use crate::models::ridership::{ModeRecovery, RidershipSample, RidershipSeries, TransitMode};
use crate::models::segment::Segment;
use crate::models::types::{Direction, PriorityError, Result};
use crate::view::{TripFrame, VehiclePosition};

use super::SegmentCatalog;

/// Routes 23, 47 and 52 in both directions
pub fn bus_spine() -> Vec<Segment> {
    use Direction::*;

    vec![
        Segment::new("23_north_1", "Route 23", Northbound, "South Philadelphia", "Center City")
            .with_measurements(18.0, 4.0, 0.85)
            .with_lat_lon_path(&[(39.92, -75.16), (39.94, -75.16), (39.96, -75.16)]),
        Segment::new("23_south_1", "Route 23", Southbound, "Center City", "South Philadelphia")
            .with_measurements(18.0, 6.0, 0.9)
            .with_lat_lon_path(&[(39.96, -75.158), (39.94, -75.158), (39.92, -75.158)]),
        Segment::new("47_north_1", "Route 47", Northbound, "South Philadelphia", "North Philadelphia")
            .with_measurements(14.0, 5.0, 0.8)
            .with_lat_lon_path(&[(39.92, -75.15), (39.95, -75.15), (39.98, -75.15)]),
        Segment::new("47_south_1", "Route 47", Southbound, "North Philadelphia", "South Philadelphia")
            .with_measurements(14.0, 3.0, 0.7)
            .with_lat_lon_path(&[(39.98, -75.148), (39.95, -75.148), (39.92, -75.148)]),
        Segment::new("52_east_1", "Route 52", Eastbound, "West Philadelphia", "Center City")
            .with_measurements(10.0, 7.0, 0.92)
            .with_lat_lon_path(&[(39.96, -75.23), (39.96, -75.21), (39.96, -75.19), (39.96, -75.17)]),
        Segment::new("52_west_1", "Route 52", Westbound, "Center City", "West Philadelphia")
            .with_measurements(10.0, 5.0, 0.75)
            .with_lat_lon_path(&[(39.958, -75.17), (39.958, -75.19), (39.958, -75.21), (39.958, -75.23)]),
    ]
}

/// The bus spine as a validated catalog
pub fn bus_spine_catalog() -> Result<SegmentCatalog> {
    SegmentCatalog::from_segments(bus_spine())
}

pub fn latent_demand_targets() -> Vec<LatentDemandTarget> {
    let target = |tract: &str,
                  name: &str,
                  baseline: u32,
                  peak: u32,
                  priority: DemandPriority,
                  description: &str,
                  action: &str,
                  (lat, lon): (f64, f64)| LatentDemandTarget {
        tract: TractIdentifier::new(tract),
        name: name.into(),
        baseline,
        peak,
        priority,
        description: description.into(),
        action: action.into(),
        location: Point::new(lon, lat),
    };

    vec![
        target(
            "42101010106",
            "North Philadelphia - Temple",
            12,
            108,
            DemandPriority::High,
            "High student density. Current fixed routes miss off-peak demand.",
            "Deploy micro-transit 8pm–2am.",
            (39.98, -75.16),
        ),
        target(
            "42101010",
            "Germantown",
            15,
            98,
            DemandPriority::High,
            "Historic neighborhood with gaps in current network coverage.",
            "Connector service to Wayne Junction.",
            (40.0428, -75.17),
        ),
        target(
            "42101104503",
            "West Philadelphia",
            18,
            95,
            DemandPriority::High,
            "Dense residential; significant essential worker population.",
            "First-mile/last-mile to Market-Frankford Line.",
            (39.96, -75.22),
        ),
        target(
            "42101203207",
            "Northeast Philadelphia",
            14,
            89,
            DemandPriority::High,
            "Transit desert characteristics; high reliance on infrequent routes.",
            "On-demand zone replacing low-frequency bus.",
            (40.04, -75.05),
        ),
        target(
            "42101308402",
            "South Philadelphia",
            16,
            87,
            DemandPriority::Medium,
            "High density but narrow streets; ideal for micro-transit.",
            "Small vehicle circulator pilot.",
            (39.92, -75.16),
        ),
    ]
}

/// Weekday ridership recovery, 2025 against 2019
pub fn mode_recovery() -> Vec<ModeRecovery> {
    [
        (TransitMode::Bus, 81.4),
        (TransitMode::Cct, 56.5),
        (TransitMode::HeavyRail, 69.8),
        (TransitMode::RegionalRail, 67.7),
        (TransitMode::TracklessTrolley, 69.1),
        (TransitMode::Trolley, 72.2),
    ]
    .into_iter()
    .map(|(mode, recovery_pct)| ModeRecovery { mode, recovery_pct })
    .collect()
}

/// Average weekday bus and rail ridership, 2019–2025
pub fn ridership_series() -> RidershipSeries {
    RidershipSeries::new(
        [
            (2019, 457_781.7, 424_974.6),
            (2020, 259_231.7, 165_482.2),
            (2021, 238_124.8, 152_147.8),
            (2022, 298_306.6, 192_273.7),
            (2023, 338_974.2, 220_749.8),
            (2024, 362_268.8, 276_689.1),
            (2025, 372_465.8, 294_126.0),
        ]
        .into_iter()
        .map(|(year, bus, rail)| RidershipSample { year, bus, rail })
        .collect(),
    )
}

fn trip_frame(hour: u32, minute: u32, positions: [(f64, f64); 3]) -> Result<TripFrame> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
        PriorityError::InvalidData(format!("Invalid frame time {hour:02}:{minute:02}"))
    })?;

    Ok(TripFrame {
        time,
        vehicles: ["23", "47", "52"]
            .into_iter()
            .zip(positions)
            .map(|(route, (lat, lon))| VehiclePosition {
                id: VehicleIdentifier::new(route),
                label: route.into(),
                location: Point::new(lon, lat),
            })
            .collect(),
    })
}

/// Vehicle snapshots across a service day on routes 23, 47 and 52
pub fn trip_frames() -> Result<Vec<TripFrame>> {
    Ok(vec![
        trip_frame(6, 0, [(39.93, -75.16), (39.93, -75.15), (39.96, -75.22)])?,
        trip_frame(8, 0, [(39.955, -75.16), (39.965, -75.15), (39.96, -75.2)])?,
        trip_frame(12, 0, [(39.96, -75.16), (39.97, -75.15), (39.96, -75.18)])?,
        trip_frame(17, 30, [(39.95, -75.16), (39.96, -75.15), (39.96, -75.19)])?,
        trip_frame(22, 30, [(39.935, -75.16), (39.94, -75.15), (39.96, -75.215)])?,
    ])
}
