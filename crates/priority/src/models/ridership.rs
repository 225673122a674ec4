//! Ridership recovery by mode against the pre-pandemic baseline.

use strum::{Display, EnumIter, EnumString};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitMode {
    Bus,
    #[strum(serialize = "CCT")]
    Cct,
    #[strum(serialize = "Heavy Rail")]
    HeavyRail,
    #[strum(serialize = "Regional Rail")]
    RegionalRail,
    #[strum(serialize = "Trackless Trolley")]
    TracklessTrolley,
    Trolley,
}

/// How a mode's recovery reads against its baseline
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecoveryStatus {
    Resilient,
    Mixed,
    #[strum(serialize = "Structural Decline")]
    StructuralDecline,
}

/// Recovered ridership as a percentage of the baseline year
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeRecovery {
    pub mode: TransitMode,
    pub recovery_pct: f64,
}

impl ModeRecovery {
    pub const RESILIENT_FLOOR: f64 = 80.0;
    pub const DECLINE_CEILING: f64 = 60.0;

    /// Percentage points still missing (negative while below baseline)
    pub fn gap(&self) -> f64 {
        self.recovery_pct - 100.0
    }

    pub fn status(&self) -> RecoveryStatus {
        if self.recovery_pct >= Self::RESILIENT_FLOOR {
            RecoveryStatus::Resilient
        } else if self.recovery_pct < Self::DECLINE_CEILING {
            RecoveryStatus::StructuralDecline
        } else {
            RecoveryStatus::Mixed
        }
    }
}

/// Average weekday ridership for one year
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RidershipSample {
    pub year: i32,
    pub bus: f64,
    pub rail: f64,
}

#[derive(Clone, Debug, Default)]
pub struct RidershipSeries {
    samples: Vec<RidershipSample>,
}

impl RidershipSeries {
    pub fn new(mut samples: Vec<RidershipSample>) -> Self {
        samples.sort_by_key(|s| s.year);
        Self { samples }
    }

    pub fn samples(&self) -> &[RidershipSample] {
        &self.samples
    }

    pub fn get(&self, year: i32) -> Option<&RidershipSample> {
        self.samples.iter().find(|s| s.year == year)
    }

    /// Bus and rail ridership in `year` as a percentage of `baseline_year`.
    ///
    /// `None` if either year is missing or the baseline has no riders.
    pub fn recovery(&self, baseline_year: i32, year: i32) -> Option<(f64, f64)> {
        let base = self.get(baseline_year)?;
        let current = self.get(year)?;

        if base.bus <= 0.0 || base.rail <= 0.0 {
            return None;
        }

        Some((
            current.bus / base.bus * 100.0,
            current.rail / base.rail * 100.0,
        ))
    }
}
