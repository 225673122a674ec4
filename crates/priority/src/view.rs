//! Dashboard view state.
//!
//! Everything the presentation layer needs to remember between frames lives
//! in [`DashboardState`]. Transitions are plain methods; the timer that drives
//! [`DashboardState::tick`] belongs to the caller.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveTime;
use geo::Point;
use strum::{Display, EnumIter, EnumString};

use crate::identifiers::*;
use crate::models::types::Result;
use crate::scoring::{Criterion, WeightSet};

/// How often playback advances one frame
pub const FRAME_INTERVAL: Duration = Duration::from_millis(1500);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    #[default]
    Overview,
    Trends,
    Equity,
    Map,
    Targets,
    Network,
    Priority,
    Animation,
    Roadmap,
}

/// Where one vehicle is in a snapshot
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehiclePosition {
    pub id: VehicleIdentifier,
    pub label: Arc<str>,
    pub location: Point,
}

/// All vehicle positions at one time of day
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripFrame {
    pub time: NaiveTime,
    pub vehicles: Vec<VehiclePosition>,
}

/// Next frame index, wrapping at `frame_count`. Always 0 with no frames.
pub fn advance_frame(index: usize, frame_count: usize) -> usize {
    if frame_count == 0 {
        return 0;
    }
    (index + 1) % frame_count
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DashboardState {
    pub section: Section,
    pub hovered: Option<SegmentIdentifier>,
    pub selected_tract: Option<TractIdentifier>,
    pub weights: WeightSet,
    pub metric: Criterion, // Single criterion the network map is coloured by
    pub frame_index: usize,
    pub playing: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            section: Section::default(),
            hovered: None,
            selected_tract: None,
            weights: WeightSet::default(),
            metric: Criterion::Frequency,
            frame_index: 0,
            playing: false,
        }
    }
}

impl DashboardState {
    /// Switch section. Any hover context belongs to the old section and is dropped.
    pub fn select_section(&mut self, section: Section) {
        self.section = section;
        self.hovered = None;
    }

    pub fn hover(&mut self, segment: SegmentIdentifier) {
        self.hovered = Some(segment);
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    pub fn select_tract(&mut self, tract: TractIdentifier) {
        self.selected_tract = Some(tract);
    }

    /// Move one weight slider. Invalid values leave the state untouched.
    pub fn set_weight(&mut self, criterion: Criterion, value: f64) -> Result<()> {
        self.weights = self.weights.with(criterion, value)?;
        Ok(())
    }

    pub fn set_metric(&mut self, metric: Criterion) {
        self.metric = metric;
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle_playback(&mut self) {
        self.playing = !self.playing;
    }

    /// Manually step to the next frame
    pub fn step(&mut self, frame_count: usize) {
        self.frame_index = advance_frame(self.frame_index, frame_count);
    }

    /// Timer callback; only advances while playing
    pub fn tick(&mut self, frame_count: usize) {
        if self.playing {
            self.step(frame_count);
        }
    }

    pub fn current_frame<'a>(&self, frames: &'a [TripFrame]) -> Option<&'a TripFrame> {
        frames.get(self.frame_index)
    }
}
