//! R-tree nodes for hit-testing segment polylines.
//!
//! Each leg (consecutive coordinate pair) of a segment becomes one node.
//! Queries filter in two stages: the R-tree prunes with planar distance in
//! degrees, then the Haversine distance to the leg decides.

use std::sync::Arc;

use geo::Line;
use rstar::{PointDistance, RTreeObject, AABB};

use crate::models::segment::Segment;

#[derive(Clone, Debug)]
pub struct SegmentLegNode {
    pub segment: Arc<Segment>,
    pub leg: Line,
    pub position: usize, // Index of the owning segment in catalog order
    aabb: AABB<[f64; 2]>,
}

impl SegmentLegNode {
    pub fn new(leg: Line, segment: Arc<Segment>, position: usize) -> Self {
        let start = [leg.start.x, leg.start.y];
        let end = [leg.end.x, leg.end.y];

        Self {
            segment,
            leg,
            position,
            aabb: AABB::from_corners(start, end),
        }
    }

    /// One node per leg of every segment's geometry
    pub fn from_segments(segments: &[Arc<Segment>]) -> Vec<Self> {
        segments
            .iter()
            .enumerate()
            .flat_map(|(position, segment)| {
                segment
                    .geometry
                    .lines()
                    .map(move |leg| Self::new(leg, segment.clone(), position))
            })
            .collect()
    }
}

impl RTreeObject for SegmentLegNode {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.aabb
    }
}

impl PointDistance for SegmentLegNode {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        // Squared planar distance from the point to the leg
        let a = [self.leg.start.x, self.leg.start.y];
        let b = [self.leg.end.x, self.leg.end.y];

        let ab = [b[0] - a[0], b[1] - a[1]];
        let ap = [point[0] - a[0], point[1] - a[1]];

        let ab_ab = ab[0] * ab[0] + ab[1] * ab[1];

        if ab_ab == 0.0 {
            // Degenerate leg
            return ap[0] * ap[0] + ap[1] * ap[1];
        }

        let t = ((ab[0] * ap[0] + ab[1] * ap[1]) / ab_ab).clamp(0.0, 1.0);

        let dx = point[0] - (a[0] + t * ab[0]);
        let dy = point[1] - (a[1] + t * ab[1]);

        dx * dx + dy * dy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::Direction;

    fn segment() -> Arc<Segment> {
        Arc::new(
            Segment::new("52_east_1", "Route 52", Direction::Eastbound, "West Philadelphia", "Center City")
                .with_lat_lon_path(&[(39.96, -75.23), (39.96, -75.21), (39.96, -75.19)]),
        )
    }

    #[test]
    fn test_one_node_per_leg() {
        let nodes = SegmentLegNode::from_segments(&[segment(), segment()]);
        assert_eq!(nodes.len(), 4);
        assert_eq!(nodes[0].position, 0);
        assert_eq!(nodes[3].position, 1);
    }

    #[test]
    fn test_leg_distance() {
        let node = &SegmentLegNode::from_segments(&[segment()])[0];

        // On the leg
        assert!(node.distance_2(&[-75.22, 39.96]) < 1e-18);

        // 0.01 degrees north of it
        assert!((node.distance_2(&[-75.22, 39.97]) - 1e-4).abs() < 1e-12);

        // Past the west end, measured to the endpoint
        assert!((node.distance_2(&[-75.24, 39.96]) - 1e-4).abs() < 1e-12);
    }
}
