//! Spatial indexing and distance utilities for hit-testing segments.

pub mod index;
pub mod queries;

pub use queries::{haversine_distance, haversine_distance_to_line};
