//! # transit-priority
//!
//! Multi-criteria priority scoring for transit corridor segments.
//!
//! ## Features
//!
//! - **Composite scoring**: frequency, reliability (inverse delay) and load,
//!   weighted by caller-chosen importance
//! - **Deterministic ranking**: stable descending order, ties keep catalog order
//! - **Validated catalogs**: bad measurements and duplicate ids are rejected on
//!   ingestion so scoring stays total
//! - **Hit-testing**: R-tree lookup of segments under a map point
//! - **Colour scale**: blue-to-red interpolation for scored segments
//!
//! ## Example
//!
//! ```
//! use transit_priority::prelude::*;
//!
//! let segment = Segment::new("23_north_1", "Route 23", Direction::Northbound, "South Philadelphia", "Center City")
//!     .with_measurements(18.0, 4.0, 0.85);
//!
//! let weights = WeightSet::new(40.0, 30.0, 30.0).unwrap();
//! assert!((score(&segment, &weights) - 0.795).abs() < 1e-12);
//!
//! let catalog = SegmentCatalog::from_segments(vec![segment]).unwrap();
//! let ranked = catalog.rank(&weights);
//! assert_eq!(css_rgb(color_for(ranked[0].score)), "rgb(190, 68, 87)");
//! ```

pub mod catalog;
pub mod identifiers;
pub mod models;
pub mod scoring;
pub mod spatial;
pub mod view;

// Re-exports for convenience
pub mod prelude {
    pub use crate::catalog::{builtin, SegmentCatalog};
    pub use crate::identifiers::*;
    pub use crate::models::*;
    pub use crate::scoring::*;
    pub use crate::view::{advance_frame, DashboardState, Section, TripFrame, VehiclePosition};
}

pub use prelude::*;
