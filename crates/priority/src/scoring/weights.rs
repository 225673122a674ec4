//! Caller-chosen importance of the three scoring criteria.

use crate::models::types::*;
use crate::scoring::scorer::Criterion;

/// Raw weight values as they arrive from a caller, before validation
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightValues {
    pub frequency: f64,
    pub delay: f64,
    pub load: f64,
}

/// Validated relative importance of frequency, delay and load.
///
/// Only relative magnitude matters; the dashboard sliders run 0 to 100.
/// Every weight is finite and non-negative, and so is their total. All zeros
/// is valid and scores every segment 0.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "WeightValues", into = "WeightValues")
)]
pub struct WeightSet {
    frequency: f64,
    delay: f64,
    load: f64,
}

/// Weights divided by their sum
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormalizedWeights {
    pub frequency: f64,
    pub delay: f64,
    pub load: f64,
}

impl NormalizedWeights {
    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Frequency => self.frequency,
            Criterion::Delay => self.delay,
            Criterion::Load => self.load,
        }
    }

    pub fn sum(&self) -> f64 {
        self.frequency + self.delay + self.load
    }
}

fn check(criterion: Criterion, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        tracing::warn!("rejecting {criterion} weight {value}");
        return Err(PriorityError::InvalidWeight {
            criterion: criterion.to_string(),
            value,
        });
    }
    Ok(value)
}

impl WeightSet {
    pub fn new(frequency: f64, delay: f64, load: f64) -> Result<Self> {
        Self {
            frequency: check(Criterion::Frequency, frequency)?,
            delay: check(Criterion::Delay, delay)?,
            load: check(Criterion::Load, load)?,
        }
        .check_total()
    }

    // Finite weights can still overflow when summed
    fn check_total(self) -> Result<Self> {
        let total = self.total();
        if !total.is_finite() {
            tracing::warn!("rejecting weights with total {total}");
            return Err(PriorityError::InvalidWeight {
                criterion: "total".to_string(),
                value: total,
            });
        }
        Ok(self)
    }

    /// All three criteria at zero
    pub fn zero() -> Self {
        Self {
            frequency: 0.0,
            delay: 0.0,
            load: 0.0,
        }
    }

    /// Weight everything on a single criterion
    pub fn only(criterion: Criterion) -> Self {
        let mut weights = Self::zero();
        match criterion {
            Criterion::Frequency => weights.frequency = 1.0,
            Criterion::Delay => weights.delay = 1.0,
            Criterion::Load => weights.load = 1.0,
        }
        weights
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn delay(&self) -> f64 {
        self.delay
    }

    pub fn load(&self) -> f64 {
        self.load
    }

    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Frequency => self.frequency,
            Criterion::Delay => self.delay,
            Criterion::Load => self.load,
        }
    }

    /// Copy with one weight replaced (a slider move)
    pub fn with(mut self, criterion: Criterion, value: f64) -> Result<Self> {
        let value = check(criterion, value)?;
        match criterion {
            Criterion::Frequency => self.frequency = value,
            Criterion::Delay => self.delay = value,
            Criterion::Load => self.load = value,
        }
        self.check_total()
    }

    /// Multiply every weight by `k`
    pub fn scaled(&self, k: f64) -> Result<Self> {
        Self::new(self.frequency * k, self.delay * k, self.load * k)
    }

    pub fn total(&self) -> f64 {
        self.frequency + self.delay + self.load
    }

    pub fn is_zero(&self) -> bool {
        self.total() == 0.0
    }

    /// Fractional contribution of each criterion.
    ///
    /// A zero total divides by 1 instead, so every fraction is 0.
    pub fn normalize(&self) -> NormalizedWeights {
        let total = match self.total() {
            t if t == 0.0 => 1.0,
            t => t,
        };

        NormalizedWeights {
            frequency: self.frequency / total,
            delay: self.delay / total,
            load: self.load / total,
        }
    }
}

impl Default for WeightSet {
    fn default() -> Self {
        Self {
            frequency: 40.0,
            delay: 30.0,
            load: 30.0,
        }
    }
}

impl TryFrom<WeightValues> for WeightSet {
    type Error = PriorityError;

    fn try_from(values: WeightValues) -> Result<Self> {
        Self::new(values.frequency, values.delay, values.load)
    }
}

impl From<WeightSet> for WeightValues {
    fn from(weights: WeightSet) -> Self {
        Self {
            frequency: weights.frequency,
            delay: weights.delay,
            load: weights.load,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_invalid_weights() {
        assert!(matches!(
            WeightSet::new(-1.0, 30.0, 30.0),
            Err(PriorityError::InvalidWeight { .. })
        ));
        assert!(WeightSet::new(40.0, f64::NAN, 30.0).is_err());
        assert!(WeightSet::new(40.0, 30.0, f64::INFINITY).is_err());
        assert!(WeightSet::default().with(Criterion::Load, -0.5).is_err());
        assert!(WeightSet::default().scaled(-2.0).is_err());
    }

    #[test]
    fn test_rejects_overflowing_total() {
        assert!(matches!(
            WeightSet::new(f64::MAX, f64::MAX, 1.0),
            Err(PriorityError::InvalidWeight { value, .. }) if value.is_infinite()
        ));

        let large = WeightSet::new(1e308, 0.0, 0.0).unwrap();
        assert!(large.with(Criterion::Delay, 1e308).is_err());
        assert!(WeightSet::new(1.0, 1.0, 0.0).unwrap().scaled(1e308).is_err());
    }

    #[test]
    fn test_large_finite_totals_still_normalize() {
        let quarter = f64::MAX / 4.0;
        let normalized = WeightSet::new(quarter, quarter, quarter).unwrap().normalize();
        assert_relative_eq!(normalized.sum(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(normalized.frequency, 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fractions_sum_to_one() {
        let cases = [
            (40.0, 30.0, 30.0),
            (1.0, 0.0, 0.0),
            (100.0, 3.0, 7.0),
            (0.1, 0.2, 0.3),
            (33.0, 33.0, 33.0),
        ];

        for (f, d, l) in cases {
            let normalized = WeightSet::new(f, d, l).unwrap().normalize();
            assert_relative_eq!(normalized.sum(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_default_normalizes_to_forty_thirty_thirty() {
        let normalized = WeightSet::default().normalize();
        assert_relative_eq!(normalized.frequency, 0.4);
        assert_relative_eq!(normalized.delay, 0.3);
        assert_relative_eq!(normalized.load, 0.3);
    }

    #[test]
    fn test_zero_weights_normalize_to_zero() {
        let weights = WeightSet::new(0.0, 0.0, 0.0).unwrap();
        assert!(weights.is_zero());

        let normalized = weights.normalize();
        assert_eq!(normalized.frequency, 0.0);
        assert_eq!(normalized.delay, 0.0);
        assert_eq!(normalized.load, 0.0);
    }

    #[test]
    fn test_slider_update() {
        let weights = WeightSet::default().with(Criterion::Delay, 90.0).unwrap();
        assert_eq!(weights.delay(), 90.0);
        assert_eq!(weights.frequency(), 40.0);
        assert_eq!(weights.get(Criterion::Load), 30.0);
    }

    #[test]
    fn test_only() {
        let normalized = WeightSet::only(Criterion::Load).normalize();
        assert_eq!(normalized.get(Criterion::Load), 1.0);
        assert_eq!(normalized.get(Criterion::Frequency), 0.0);
    }
}
