//! Source of segment data.
//!
//! Scoring never depends on where segments come from. The in-memory
//! catalog implements this; a GTFS or AVL backed source would too.

use std::sync::Arc;

use geo::Point;

use crate::identifiers::SegmentIdentifier;
use crate::models::segment::Segment;

/// Provider of an ordered segment catalog with lookup and hit-testing
pub trait SegmentProvider: Send + Sync {
    // ---- Lookups ----
    fn get_segment(&self, id: &SegmentIdentifier) -> Option<Arc<Segment>>;

    /// All segments in catalog order
    fn all_segments(&self) -> Vec<Arc<Segment>>;

    // ---- Spatial queries ----

    /// Segments whose polyline passes within radius (meters), catalog order
    fn segments_near(&self, point: Point, radius_m: f64) -> Vec<Arc<Segment>>;

    /// The segment whose polyline is closest to a point
    fn nearest_segment(&self, point: Point) -> Option<Arc<Segment>>;
}
