//! Parts handed to segmentation callbacks.
//!
//! A part is one normalized piece of a tick: `previous` and `current` both lie
//! in `[0,1]` relative to whatever window, cycle or timeline entry produced it.
//! The producing algorithm is recorded in [`PartKind`].

use serde::{Deserialize, Serialize};

use crate::change::{Direction, ScalarChange};
use crate::float::lerp;

/// Which segmentation produced a part, with the context that goes with it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PartKind {
    /// Single window (`ScalarChange::segment_window`).
    Window,
    /// One cycle of a repeating window (`ScalarChange::segment_repeating`).
    #[serde(rename_all = "camelCase")]
    Repeat {
        repeat_index: u32,
        repeat_length: u32,
    },
    /// One entry of a weighted timeline (`ScalarChange::segment_timeline`).
    #[serde(rename_all = "camelCase")]
    Timeline {
        index: usize,
        range_left: f32,
        range_right: f32,
    },
}

/// One normalized piece of a tick, as delivered to segmentation callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePart {
    pub previous: f32,
    pub current: f32,
    pub kind: PartKind,
    /// More parts for the same tick follow this one.
    pub is_minor_change: bool,
}

impl ChangePart {
    pub fn window(previous: f32, current: f32) -> Self {
        Self {
            previous,
            current,
            kind: PartKind::Window,
            is_minor_change: false,
        }
    }

    pub fn repeat(previous: f32, current: f32, repeat_index: u32, repeat_length: u32) -> Self {
        Self {
            previous,
            current,
            kind: PartKind::Repeat {
                repeat_index,
                repeat_length,
            },
            is_minor_change: false,
        }
    }

    pub fn timeline(
        previous: f32,
        current: f32,
        index: usize,
        range_left: f32,
        range_right: f32,
    ) -> Self {
        Self {
            previous,
            current,
            kind: PartKind::Timeline {
                index,
                range_left,
                range_right,
            },
            is_minor_change: false,
        }
    }

    pub(crate) fn with_minor_change(mut self, is_minor_change: bool) -> Self {
        self.is_minor_change = is_minor_change;
        self
    }

    /// The tick entered the `[0,1]` window through one of its edges.
    #[inline]
    pub fn is_entrance(&self) -> bool {
        (self.previous <= 0.0 && 0.0 < self.current) || (self.current < 1.0 && 1.0 <= self.previous)
    }

    /// The tick left the `[0,1]` window through one of its edges.
    #[inline]
    pub fn is_exit(&self) -> bool {
        (self.current <= 0.0 && 0.0 < self.previous) || (self.previous < 1.0 && 1.0 <= self.current)
    }

    #[inline]
    pub fn repeat_index(&self) -> Option<u32> {
        match self.kind {
            PartKind::Repeat { repeat_index, .. } => Some(repeat_index),
            _ => None,
        }
    }

    #[inline]
    pub fn timeline_index(&self) -> Option<usize> {
        match self.kind {
            PartKind::Timeline { index, .. } => Some(index),
            _ => None,
        }
    }

    /// Normalized span of the timeline entry this part belongs to.
    #[inline]
    pub fn range(&self) -> Option<(f32, f32)> {
        match self.kind {
            PartKind::Timeline {
                range_left,
                range_right,
                ..
            } => Some((range_left, range_right)),
            _ => None,
        }
    }

    /// Local pair as a change, e.g. to feed it through an easing with `map`.
    #[inline]
    pub fn change(&self) -> ScalarChange {
        ScalarChange::new(self.previous, self.current)
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.change().direction()
    }

    /// Local pair mapped back to the producer's outer coordinate:
    /// cycle units for repeat parts, timeline `[0,1]` for timeline parts.
    pub fn absolute_change(&self) -> ScalarChange {
        match self.kind {
            PartKind::Window => self.change(),
            PartKind::Repeat { repeat_index, .. } => {
                let base = repeat_index as f32;
                ScalarChange::new(base + self.previous, base + self.current)
            }
            PartKind::Timeline {
                range_left,
                range_right,
                ..
            } => self
                .change()
                .map(|rate| lerp(rate, range_left, range_right)),
        }
    }
}
