//! Priority scoring: weights, the composite scorer, and its colour scale.

pub mod color;
pub mod scorer;
pub mod weights;

pub use color::{color_for, css_rgb, hex, HIGH_PRIORITY_COLOR, LOW_PRIORITY_COLOR};
pub use scorer::{
    rank, score, Criterion, FrequencyPolicy, PriorityScorer, ScoredSegment,
    DELAY_CEILING_MINUTES, FREQUENCY_CEILING_PER_HOUR, LOAD_CEILING,
};
pub use weights::{NormalizedWeights, WeightSet, WeightValues};
