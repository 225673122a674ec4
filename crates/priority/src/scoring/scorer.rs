//! Composite priority scoring and ranking.
//!
//! Each criterion is normalized against a fixed ceiling:
//!
//! - **Frequency**: vehicles per hour over 20. Not capped by default, so a
//!   segment running more than 20 per hour contributes more than 1.
//! - **Delay**: inverted, `1 - min(delay / 10, 1)`, so shorter delays score
//!   higher and anything at or past 10 minutes scores 0.
//! - **Load**: the load factor as-is.
//!
//! The composite is the weighted mean of the three using
//! [`WeightSet::normalize`] fractions. Scoring is pure: the same segment and
//! weights always give the same number.

use std::cmp::Ordering;

use palette::Srgb;
use strum::{Display, EnumIter, EnumString};

use crate::models::segment::Segment;
use crate::scoring::color::color_for;
use crate::scoring::weights::WeightSet;

/// Frequency at which the frequency criterion reaches 1
pub const FREQUENCY_CEILING_PER_HOUR: f64 = 20.0;

/// Delay at which the reliability criterion reaches 0
pub const DELAY_CEILING_MINUTES: f64 = 10.0;

/// Load factor at which the load criterion reaches 1
pub const LOAD_CEILING: f64 = 1.0;

/// One of the three things a segment is scored on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Criterion {
    #[strum(to_string = "frequency", serialize = "freq")]
    Frequency,
    Delay,
    Load,
}

impl Criterion {
    /// Normalized single-criterion score for a segment.
    ///
    /// Frequency is left uncapped here; see [`FrequencyPolicy`].
    pub fn score(&self, segment: &Segment) -> f64 {
        match self {
            Self::Frequency => segment.frequency_per_hour / FREQUENCY_CEILING_PER_HOUR,
            Self::Delay => {
                let ratio = (segment.average_delay_minutes / DELAY_CEILING_MINUTES).min(1.0);
                (1.0 - ratio).clamp(0.0, 1.0)
            }
            Self::Load => segment.load_factor / LOAD_CEILING,
        }
    }
}

/// Whether the frequency criterion is capped at 1
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum FrequencyPolicy {
    /// `frequency / 20` with no upper bound. Composite scores can exceed 1
    /// for segments above 20 vehicles per hour.
    #[default]
    Unclamped,
    /// `min(frequency / 20, 1)`, matching how delay is treated
    Clamped,
}

/// A segment paired with its composite score
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoredSegment<'a> {
    pub segment: &'a Segment,
    pub score: f64,
}

impl ScoredSegment<'_> {
    /// Score on a 0–100 scale, rounded
    pub fn percent(&self) -> i64 {
        (self.score * 100.0).round() as i64
    }

    pub fn color(&self) -> Srgb<u8> {
        color_for(self.score)
    }
}

/// Stateless scorer; the only setting is the frequency policy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PriorityScorer {
    pub frequency_policy: FrequencyPolicy,
}

impl PriorityScorer {
    pub fn new(frequency_policy: FrequencyPolicy) -> Self {
        Self { frequency_policy }
    }

    pub fn criterion_score(&self, criterion: Criterion, segment: &Segment) -> f64 {
        let score = criterion.score(segment);
        match (criterion, self.frequency_policy) {
            (Criterion::Frequency, FrequencyPolicy::Clamped) => score.min(1.0),
            _ => score,
        }
    }

    /// Composite priority for one segment
    pub fn score(&self, segment: &Segment, weights: &WeightSet) -> f64 {
        let fractions = weights.normalize();

        fractions.frequency * self.criterion_score(Criterion::Frequency, segment)
            + fractions.delay * self.criterion_score(Criterion::Delay, segment)
            + fractions.load * self.criterion_score(Criterion::Load, segment)
    }

    /// Score every segment and order by descending score.
    ///
    /// The sort is stable: segments with equal scores keep their input order.
    pub fn rank<'a, I>(&self, segments: I, weights: &WeightSet) -> Vec<ScoredSegment<'a>>
    where
        I: IntoIterator<Item = &'a Segment>,
    {
        let mut scored: Vec<ScoredSegment<'a>> = segments
            .into_iter()
            .map(|segment| ScoredSegment {
                segment,
                score: self.score(segment, weights),
            })
            .collect();

        sort_descending(&mut scored);

        tracing::debug!(
            segments = scored.len(),
            policy = %self.frequency_policy,
            "ranked segments"
        );

        scored
    }

    /// Rank by a single criterion (the "colour by" map view)
    pub fn rank_by<'a, I>(&self, segments: I, criterion: Criterion) -> Vec<ScoredSegment<'a>>
    where
        I: IntoIterator<Item = &'a Segment>,
    {
        self.rank(segments, &WeightSet::only(criterion))
    }
}

fn sort_descending(scored: &mut [ScoredSegment<'_>]) {
    // Vec::sort_by is stable
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}

/// Score a segment with the default (unclamped) scorer
pub fn score(segment: &Segment, weights: &WeightSet) -> f64 {
    PriorityScorer::default().score(segment, weights)
}

/// Rank segments with the default (unclamped) scorer
pub fn rank<'a, I>(segments: I, weights: &WeightSet) -> Vec<ScoredSegment<'a>>
where
    I: IntoIterator<Item = &'a Segment>,
{
    PriorityScorer::default().rank(segments, weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::Direction;
    use approx::assert_relative_eq;
    use strum::IntoEnumIterator;

    fn segment(id: &str, freq: f64, delay: f64, load: f64) -> Segment {
        Segment::new(id, "Route 23", Direction::Northbound, "South Philadelphia", "Center City")
            .with_measurements(freq, delay, load)
    }

    fn ids<'a>(ranked: &'a [ScoredSegment<'_>]) -> Vec<&'a str> {
        ranked.iter().map(|s| s.segment.id.as_str()).collect()
    }

    fn spine() -> Vec<Segment> {
        vec![
            segment("23_north_1", 18.0, 4.0, 0.85),
            segment("23_south_1", 18.0, 6.0, 0.9),
            segment("47_north_1", 14.0, 5.0, 0.8),
            segment("47_south_1", 14.0, 3.0, 0.7),
            segment("52_east_1", 10.0, 7.0, 0.92),
            segment("52_west_1", 10.0, 5.0, 0.75),
        ]
    }

    #[test]
    fn test_worked_example() {
        let s = segment("23_north_1", 18.0, 4.0, 0.85);
        let weights = WeightSet::new(40.0, 30.0, 30.0).unwrap();

        assert_relative_eq!(Criterion::Frequency.score(&s), 0.9);
        assert_relative_eq!(Criterion::Delay.score(&s), 0.6);
        assert_relative_eq!(Criterion::Load.score(&s), 0.85);
        assert_relative_eq!(score(&s, &weights), 0.795, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_weights_score_zero() {
        let zero = WeightSet::zero();
        for s in spine() {
            assert_eq!(score(&s, &zero), 0.0);
        }
    }

    #[test]
    fn test_delay_score_monotonic_and_floored() {
        let mut previous = f64::INFINITY;
        for tenths in 0..=200 {
            let delay = tenths as f64 / 10.0;
            let current = Criterion::Delay.score(&segment("s", 10.0, delay, 0.5));
            assert!(current <= previous, "delay score rose at {delay}");
            if delay >= DELAY_CEILING_MINUTES {
                assert_eq!(current, 0.0);
            }
            previous = current;
        }
    }

    #[test]
    fn test_load_score_is_load_factor() {
        for hundredths in 0..=100 {
            let load = hundredths as f64 / 100.0;
            assert_eq!(Criterion::Load.score(&segment("s", 10.0, 2.0, load)), load);
        }
    }

    #[test]
    fn test_frequency_above_ceiling_is_unclamped_by_default() {
        let busy = segment("busy", 30.0, 0.0, 1.0);
        let weights = WeightSet::default();

        assert_relative_eq!(Criterion::Frequency.score(&busy), 1.5);
        assert!(score(&busy, &weights) > 1.0);

        let clamped = PriorityScorer::new(FrequencyPolicy::Clamped);
        assert_relative_eq!(clamped.criterion_score(Criterion::Frequency, &busy), 1.0);
        assert_relative_eq!(clamped.score(&busy, &weights), 1.0);
    }

    #[test]
    fn test_rank_orders_descending() {
        let segments = spine();
        let ranked = rank(&segments, &WeightSet::default());

        assert_eq!(
            ids(&ranked),
            ["23_north_1", "23_south_1", "47_south_1", "47_north_1", "52_west_1", "52_east_1"]
        );
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_rank_is_invariant_under_weight_scaling() {
        let segments = spine();
        let weights = WeightSet::default();
        let expected = ids(&rank(&segments, &weights))
            .into_iter()
            .map(str::to_owned)
            .collect::<Vec<_>>();

        for k in [0.5, 2.0, 3.0, 1000.0] {
            let scaled = weights.scaled(k).unwrap();
            let ranked = rank(&segments, &scaled);
            assert_eq!(ids(&ranked), expected, "ranking changed at k = {k}");
        }
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let segments = vec![
            segment("b", 12.0, 5.0, 0.6),
            segment("a", 12.0, 5.0, 0.6),
            segment("top", 20.0, 0.0, 1.0),
            segment("c", 12.0, 5.0, 0.6),
        ];

        let ranked = rank(&segments, &WeightSet::default());
        assert_eq!(ids(&ranked), ["top", "b", "a", "c"]);
    }

    #[test]
    fn test_zero_weights_preserve_catalog_order() {
        let segments = spine();
        let ranked = rank(&segments, &WeightSet::zero());

        let catalog: Vec<&str> = segments.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids(&ranked), catalog);
    }

    #[test]
    fn test_rank_does_not_mutate_input() {
        let segments = spine();
        let before = segments.clone();
        let _ = rank(&segments, &WeightSet::new(0.0, 100.0, 0.0).unwrap());
        assert_eq!(segments, before);
    }

    #[test]
    fn test_rank_by_single_criterion() {
        let segments = spine();
        let scorer = PriorityScorer::default();

        let by_load = scorer.rank_by(&segments, Criterion::Load);
        assert_eq!(by_load[0].segment.id.as_str(), "52_east_1");
        assert_relative_eq!(by_load[0].score, 0.92);

        let by_delay = scorer.rank_by(&segments, Criterion::Delay);
        assert_eq!(by_delay[0].segment.id.as_str(), "47_south_1");
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let s = segment("s", 13.0, 2.5, 0.66);
        let weights = WeightSet::new(12.0, 55.0, 9.0).unwrap();
        let first = score(&s, &weights);
        for _ in 0..10 {
            assert_eq!(score(&s, &weights), first);
        }
    }

    #[test]
    fn test_percent() {
        let s = segment("23_south_1", 18.0, 6.0, 0.9);
        let scored = ScoredSegment { segment: &s, score: score(&s, &WeightSet::default()) };
        assert_eq!(scored.percent(), 75);
    }

    #[test]
    fn test_criterion_names() {
        assert_eq!("freq".parse::<Criterion>().unwrap(), Criterion::Frequency);
        assert_eq!("Delay".parse::<Criterion>().unwrap(), Criterion::Delay);
        let names: Vec<String> = Criterion::iter().map(|c| c.to_string()).collect();
        assert_eq!(names, ["frequency", "delay", "load"]);
    }
}
