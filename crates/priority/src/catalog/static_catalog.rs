//! In-memory segment catalog.
//!
//! Holds a validated, ordered set of segments with an id lookup map and an
//! R-tree over their polylines for hover hit-testing.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use geo::Point;
use rstar::RTree;

use crate::identifiers::SegmentIdentifier;
use crate::models::{segment::Segment, traits::SegmentProvider, types::*};
use crate::scoring::{PriorityScorer, ScoredSegment, WeightSet};
use crate::spatial::index::SegmentLegNode;
use crate::spatial::queries::{
    haversine_distance_to_line, min_meters_for_degrees, search_radius_degrees,
};

/// Validated segment catalog
///
/// This type is cheap to clone since all data is stored in `Arc`s.
#[derive(Clone, Debug)]
pub struct SegmentCatalog {
    // Catalog order is ranking tie-break order
    segments: Vec<Arc<Segment>>,

    segment_map: HashMap<SegmentIdentifier, Arc<Segment>>,

    leg_tree: RTree<SegmentLegNode>,
}

impl SegmentCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            segment_map: HashMap::new(),
            leg_tree: RTree::new(),
        }
    }

    /// Build a catalog, validating every segment.
    ///
    /// Fails on the first segment with an out-of-range measurement or a
    /// repeated id. Input order is kept.
    pub fn from_segments(segments: Vec<Segment>) -> Result<Self> {
        let mut seen = HashSet::new();
        for segment in &segments {
            if let Err(err) = segment.validate() {
                tracing::warn!("rejecting segment catalog: {err}");
                return Err(err);
            }
            if !seen.insert(segment.id.clone()) {
                tracing::warn!("rejecting segment catalog: duplicate id {}", segment.id);
                return Err(PriorityError::DuplicateSegment(segment.id.clone()));
            }
        }

        let segments: Vec<Arc<Segment>> = segments.into_iter().map(Arc::new).collect();

        let segment_map: HashMap<_, _> = segments
            .iter()
            .map(|s| (s.id.clone(), s.clone()))
            .collect();

        let leg_tree = RTree::bulk_load(SegmentLegNode::from_segments(&segments));

        tracing::debug!(
            segments = segments.len(),
            legs = leg_tree.size(),
            "built segment catalog"
        );

        Ok(Self {
            segments,
            segment_map,
            leg_tree,
        })
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().map(|s| s.as_ref())
    }

    /// Look up a segment, failing with `SegmentNotFound`
    pub fn require(&self, id: &SegmentIdentifier) -> Result<Arc<Segment>> {
        self.get_segment(id)
            .ok_or_else(|| PriorityError::SegmentNotFound(id.clone()))
    }

    /// Rank the whole catalog with the default scorer
    pub fn rank(&self, weights: &WeightSet) -> Vec<ScoredSegment<'_>> {
        self.rank_with(&PriorityScorer::default(), weights)
    }

    pub fn rank_with(&self, scorer: &PriorityScorer, weights: &WeightSet) -> Vec<ScoredSegment<'_>> {
        scorer.rank(self.iter(), weights)
    }

    /// Catalog positions of segments within `radius_m` of a point
    fn positions_near(&self, point: Point, radius_m: f64) -> Vec<usize> {
        let radius_deg = search_radius_degrees(radius_m, point.y());

        let mut positions: Vec<usize> = self
            .leg_tree
            .locate_within_distance([point.x(), point.y()], radius_deg * radius_deg)
            .filter(|node| haversine_distance_to_line(point, node.leg) <= radius_m)
            .map(|node| node.position)
            .collect();

        positions.sort_unstable();
        positions.dedup();
        positions
    }
}

impl Default for SegmentCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl SegmentProvider for SegmentCatalog {
    fn get_segment(&self, id: &SegmentIdentifier) -> Option<Arc<Segment>> {
        self.segment_map.get(id).cloned()
    }

    fn all_segments(&self) -> Vec<Arc<Segment>> {
        self.segments.clone()
    }

    fn segments_near(&self, point: Point, radius_m: f64) -> Vec<Arc<Segment>> {
        // Validate radius is positive
        if radius_m <= 0.0 || !radius_m.is_finite() {
            return Vec::new();
        }

        self.positions_near(point, radius_m)
            .into_iter()
            .map(|position| self.segments[position].clone())
            .collect()
    }

    fn nearest_segment(&self, point: Point) -> Option<Arc<Segment>> {
        // The tree orders by planar degrees, which understates east-west gaps.
        // Keep scanning until no remaining leg can beat the best in meters.
        let mut best: Option<(f64, &SegmentLegNode)> = None;

        for (node, distance_2) in self
            .leg_tree
            .nearest_neighbor_iter_with_distance_2(&[point.x(), point.y()])
        {
            if let Some((best_m, _)) = best {
                if min_meters_for_degrees(distance_2.sqrt(), point.y()) > best_m {
                    break;
                }
            }

            let meters = haversine_distance_to_line(point, node.leg);
            if best.map_or(true, |(best_m, _)| meters < best_m) {
                best = Some((meters, node));
            }
        }

        best.map(|(_, node)| node.segment.clone())
    }
}
