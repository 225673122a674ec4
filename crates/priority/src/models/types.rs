//! Core enums and the crate error type.

use strum::{Display, EnumIter, EnumString};

use crate::identifiers::*;

// ============================================================================
// Enums
// ============================================================================

/// Travel direction of a segment
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    Northbound,
    Southbound,
    Eastbound,
    Westbound,
}

impl Direction {
    /// The direction a vehicle travels on the paired segment of the same line
    pub fn reverse(self) -> Self {
        match self {
            Self::Northbound => Self::Southbound,
            Self::Southbound => Self::Northbound,
            Self::Eastbound => Self::Westbound,
            Self::Westbound => Self::Eastbound,
        }
    }
}

/// Measured field on a segment, named in validation errors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum MeasurementField {
    #[strum(serialize = "frequency_per_hour")]
    FrequencyPerHour,
    #[strum(serialize = "average_delay_minutes")]
    AverageDelayMinutes,
    #[strum(serialize = "load_factor")]
    LoadFactor,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PriorityError {
    #[error("Invalid {criterion} weight: {value} (weights must be finite and non-negative)")]
    InvalidWeight { criterion: String, value: f64 },

    #[error("Invalid {field} on segment {segment}: {value}")]
    InvalidMeasurement {
        segment: SegmentIdentifier,
        field: MeasurementField,
        value: f64,
    },

    #[error("Duplicate segment: {0}")]
    DuplicateSegment(SegmentIdentifier),

    #[error("Segment not found: {0}")]
    SegmentNotFound(SegmentIdentifier),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, PriorityError>;
