//! Directed transit segments and their operational measurements.

use std::sync::Arc;

use geo::{Coord, LineString};

use crate::identifiers::SegmentIdentifier;
use crate::models::types::*;

/// A directed portion of a transit route with its measured service.
///
/// Geometry is only used for spatial lookups; scoring reads the three
/// measurements and nothing else.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub id: SegmentIdentifier,
    pub line: Arc<str>,
    pub direction: Direction,
    pub from: Arc<str>,
    pub to: Arc<str>,
    pub frequency_per_hour: f64,   // Vehicles per hour
    pub average_delay_minutes: f64,
    pub load_factor: f64,          // Passengers / capacity, 0..=1
    pub geometry: LineString,      // (lon, lat)
}

impl Segment {
    /// Start a segment with zeroed measurements and no geometry.
    pub fn new(
        id: impl Into<SegmentIdentifier>,
        line: impl Into<Arc<str>>,
        direction: Direction,
        from: impl Into<Arc<str>>,
        to: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            id: id.into(),
            line: line.into(),
            direction,
            from: from.into(),
            to: to.into(),
            frequency_per_hour: 0.0,
            average_delay_minutes: 0.0,
            load_factor: 0.0,
            geometry: LineString::new(Vec::new()),
        }
    }

    pub fn with_measurements(
        mut self,
        frequency_per_hour: f64,
        average_delay_minutes: f64,
        load_factor: f64,
    ) -> Self {
        self.frequency_per_hour = frequency_per_hour;
        self.average_delay_minutes = average_delay_minutes;
        self.load_factor = load_factor;
        self
    }

    /// Set the polyline from `(lat, lon)` pairs as they appear in map data.
    pub fn with_lat_lon_path(mut self, path: &[(f64, f64)]) -> Self {
        self.geometry = path
            .iter()
            .map(|&(lat, lon)| Coord { x: lon, y: lat })
            .collect();
        self
    }

    /// Display label, e.g. "Route 23 – Northbound"
    pub fn label(&self) -> String {
        format!("{} – {}", self.line, self.direction)
    }

    /// Check the measurements are physically meaningful.
    ///
    /// Scoring itself never calls this; catalogs validate on ingestion.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            (MeasurementField::FrequencyPerHour, self.frequency_per_hour, f64::INFINITY),
            (MeasurementField::AverageDelayMinutes, self.average_delay_minutes, f64::INFINITY),
            (MeasurementField::LoadFactor, self.load_factor, 1.0),
        ];

        for (field, value, max) in checks {
            if !value.is_finite() || value < 0.0 || value > max {
                return Err(PriorityError::InvalidMeasurement {
                    segment: self.id.clone(),
                    field,
                    value,
                });
            }
        }

        Ok(())
    }
}
