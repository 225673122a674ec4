//! Segment, demand and ridership models, types, and traits.

pub mod demand;
pub mod ridership;
pub mod segment;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use demand::{BandCounts, DemandPriority, LatentDemandTarget, RidershipBand};
pub use ridership::{ModeRecovery, RecoveryStatus, RidershipSample, RidershipSeries, TransitMode};
pub use segment::Segment;
pub use traits::SegmentProvider;
pub use types::{Direction, MeasurementField, PriorityError, Result};
