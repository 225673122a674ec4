//! Census-tract latent demand: hotspots with irregular ridership spikes and
//! the volume bands tracts are grouped into.

use std::sync::Arc;

use geo::Point;
use strum::{Display, EnumIter, EnumString};

use crate::identifiers::TractIdentifier;
use crate::models::types::*;

/// Tracts below this total (boardings + alightings) are cold spots
pub const COLD_SPOT_CEILING: u64 = 50;

/// Tracts at or above this total are high volume
pub const HIGH_VOLUME_FLOOR: u64 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DemandPriority {
    High,
    Medium,
    Low,
}

/// A tract whose occasional peaks far exceed its everyday baseline
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatentDemandTarget {
    pub tract: TractIdentifier,
    pub name: Arc<str>,
    pub baseline: u32, // Typical daily riders
    pub peak: u32,     // Observed peak daily riders
    pub priority: DemandPriority,
    pub description: Arc<str>,
    pub action: Arc<str>,
    pub location: Point,
}

impl LatentDemandTarget {
    /// Peak riders as a multiple of the baseline
    pub fn spike_ratio(&self) -> Result<f64> {
        if self.baseline == 0 {
            return Err(PriorityError::InvalidData(format!(
                "Tract {} has a zero baseline",
                self.tract
            )));
        }

        Ok(self.peak as f64 / self.baseline as f64)
    }

    /// Spike ratio formatted for display, e.g. "9.0x"
    pub fn spike_label(&self) -> Result<String> {
        Ok(format!("{:.1}x", self.spike_ratio()?))
    }
}

/// Volume band a tract falls into by total ridership
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RidershipBand {
    #[strum(serialize = "Cold Spots (<50)")]
    Cold,
    #[strum(serialize = "Standard (50–1000)")]
    Standard,
    #[strum(serialize = "High Volume (1000+)")]
    High,
}

impl RidershipBand {
    pub fn classify(total: u64) -> Self {
        if total < COLD_SPOT_CEILING {
            Self::Cold
        } else if total < HIGH_VOLUME_FLOOR {
            Self::Standard
        } else {
            Self::High
        }
    }
}

/// Number of tracts per band
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BandCounts {
    pub cold: usize,
    pub standard: usize,
    pub high: usize,
}

impl BandCounts {
    pub fn tally(totals: impl IntoIterator<Item = u64>) -> Self {
        let mut counts = Self::default();
        for total in totals {
            match RidershipBand::classify(total) {
                RidershipBand::Cold => counts.cold += 1,
                RidershipBand::Standard => counts.standard += 1,
                RidershipBand::High => counts.high += 1,
            }
        }
        counts
    }

    pub fn get(&self, band: RidershipBand) -> usize {
        match band {
            RidershipBand::Cold => self.cold,
            RidershipBand::Standard => self.standard,
            RidershipBand::High => self.high,
        }
    }

    pub fn total(&self) -> usize {
        self.cold + self.standard + self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(baseline: u32, peak: u32) -> LatentDemandTarget {
        LatentDemandTarget {
            tract: TractIdentifier::new("42101010106"),
            name: "North Philadelphia - Temple".into(),
            baseline,
            peak,
            priority: DemandPriority::High,
            description: "".into(),
            action: "".into(),
            location: Point::new(-75.16, 39.98),
        }
    }

    #[test]
    fn test_spike_label() {
        assert_eq!(target(12, 108).spike_label().unwrap(), "9.0x");
        assert_eq!(target(15, 98).spike_label().unwrap(), "6.5x");
        assert_eq!(target(18, 95).spike_label().unwrap(), "5.3x");
    }

    #[test]
    fn test_zero_baseline_is_rejected() {
        assert!(matches!(
            target(0, 40).spike_ratio(),
            Err(PriorityError::InvalidData(_))
        ));
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(RidershipBand::classify(0), RidershipBand::Cold);
        assert_eq!(RidershipBand::classify(49), RidershipBand::Cold);
        assert_eq!(RidershipBand::classify(50), RidershipBand::Standard);
        assert_eq!(RidershipBand::classify(999), RidershipBand::Standard);
        assert_eq!(RidershipBand::classify(1000), RidershipBand::High);
    }

    #[test]
    fn test_band_tally() {
        let counts = BandCounts::tally([12, 49, 50, 400, 1000, 9_800, 25_000]);
        assert_eq!(counts.cold, 2);
        assert_eq!(counts.standard, 2);
        assert_eq!(counts.high, 3);
        assert_eq!(counts.total(), 7);
        assert_eq!(counts.get(RidershipBand::High), 3);
    }

    #[test]
    fn test_band_labels() {
        assert_eq!(RidershipBand::Cold.to_string(), "Cold Spots (<50)");
        assert_eq!(RidershipBand::High.to_string(), "High Volume (1000+)");
    }
}
