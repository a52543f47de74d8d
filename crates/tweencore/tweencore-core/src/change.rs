//! Per-tick scalar change and its segmentation walks.
//!
//! A [`ScalarChange`] is the `previous -> current` step a value took during one
//! update. The segmentation methods cut that step at window edges, cycle edges
//! or timeline entry boundaries and report each piece as a [`ChangePart`]
//! normalized into its own `[0,1]`:
//! - `segment_window`: at most one part, clipped to a single window.
//! - `segment_repeating`: one part per cycle the tick passes through.
//! - `segment_timeline`: one part per weighted timeline entry passed through.
//!
//! Parts are delivered synchronously, in the direction of travel, before the
//! method returns. Zero-width pieces are never delivered.

use serde::{Deserialize, Serialize};

use crate::error::ChangeError;
use crate::float::{clamp, clamp01, inverse_lerp};
use crate::part::ChangePart;
use crate::search::BoundaryMode;
use crate::timeline::WeightedTimeline;

/// Which way a change moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
    Stopped,
}

/// Value before and after one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScalarChange {
    previous: f32,
    current: f32,
}

impl ScalarChange {
    #[inline]
    pub fn new(previous: f32, current: f32) -> Self {
        Self { previous, current }
    }

    #[inline]
    pub fn previous(&self) -> f32 {
        self.previous
    }

    #[inline]
    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn direction(&self) -> Direction {
        if self.previous < self.current {
            Direction::Forward
        } else if self.current < self.previous {
            Direction::Backward
        } else {
            Direction::Stopped
        }
    }

    /// Apply `f` (typically an easing) to both ends.
    pub fn map<F>(&self, mut f: F) -> ScalarChange
    where
        F: FnMut(f32) -> f32,
    {
        ScalarChange::new(f(self.previous), f(self.current))
    }

    /// Whether the tick passes `threshold`, in either direction.
    ///
    /// The threshold must lie inside the interval between the two ends:
    /// - `High`: closed at the lower end, open at the upper end
    ///   (`min <= t < max`), so a threshold at the tick's lower end counts.
    /// - `Low`: open at the lower end, closed at the upper end
    ///   (`min < t <= max`), so a threshold at the tick's upper end counts.
    pub fn crosses_threshold(&self, threshold: f32, mode: BoundaryMode) -> bool {
        let (p, c, t) = (self.previous, self.current, threshold);
        match mode {
            BoundaryMode::Low => (p < t && t <= c) || (c < t && t <= p),
            BoundaryMode::High => (p <= t && t < c) || (c <= t && t < p),
        }
    }

    /// Clip the tick to the window `from..to` and report it as one part.
    ///
    /// Nothing is reported for a zero-length tick or a tick that never enters
    /// the window. `from > to` describes a reversed window. A zero-width window
    /// (`from == to`) acts as a step: a tick strictly crossing it reports
    /// `0 -> 1` or `1 -> 0`.
    pub fn segment_window<F>(&self, from: f32, to: f32, mut on_part: F)
    where
        F: FnMut(ChangePart),
    {
        let (p, c) = (self.previous, self.current);
        let overlaps = (from < p && c < to)
            || (from < c && p < to)
            || (to < p && c < from)
            || (to < c && p < from);
        if !overlaps || p == c {
            return;
        }
        on_part(ChangePart::window(
            window_rate(p, from, to),
            window_rate(c, from, to),
        ));
    }

    /// Split the tick over a window that repeats `repeat_limit` times.
    ///
    /// One cycle spans `cycle_from..cycle_to`; cycle `k` covers
    /// `[k, k + 1)` in cycle units. Both ends are clamped to
    /// `[0, repeat_limit]` and the tick is walked cycle by cycle, reporting
    /// each visited cycle's local piece.
    pub fn segment_repeating<F>(
        &self,
        cycle_from: f32,
        cycle_to: f32,
        repeat_limit: u32,
        mut on_part: F,
    ) -> Result<(), ChangeError>
    where
        F: FnMut(ChangePart),
    {
        if cycle_from == cycle_to {
            log::debug!("segment_repeating: degenerate cycle {cycle_from}..{cycle_to}");
            return Err(ChangeError::DegenerateWindow {
                from: cycle_from,
                to: cycle_to,
            });
        }

        let limit = repeat_limit as f32;
        let p = inverse_lerp(self.previous, cycle_from, cycle_to);
        let c = inverse_lerp(self.current, cycle_from, cycle_to);
        if !((0.0 < c && p < limit) || (0.0 < p && c < limit)) {
            return Ok(());
        }
        let p = clamp(p, 0.0, limit);
        let c = clamp(c, 0.0, limit);
        if p == c {
            return Ok(());
        }

        let mut queue = PartQueue::new(|_: (), part: ChangePart| on_part(part));
        let part = |start: f32, end: f32, index: u32| {
            ChangePart::repeat(start, end, index, repeat_limit)
        };
        let c_index = c.floor() as u32;
        let end = c - c_index as f32;
        let mut index = p.floor() as u32;
        let mut start = p - index as f32;

        if p < c {
            while index < c_index {
                if start < 1.0 {
                    queue.push((), part(start, 1.0, index));
                }
                index += 1;
                start = 0.0;
            }
            if start < end {
                queue.push((), part(start, end, index));
            }
        } else {
            while index > c_index {
                if start > 0.0 {
                    queue.push((), part(start, 0.0, index));
                }
                index -= 1;
                start = 1.0;
            }
            if start > end {
                queue.push((), part(start, end, index));
            }
        }

        let emitted = queue.finish();
        log::trace!("segment_repeating: {p}..{c} of {repeat_limit} cycles -> {emitted} parts");
        Ok(())
    }

    /// Split the tick over the entries of a weighted timeline spanning
    /// `timeline_from..timeline_to`.
    ///
    /// `on_part` receives the entry's item together with the part, so a
    /// timeline of handlers can be dispatched with `|handler, part| handler(part)`.
    /// Entry boundaries hit exactly are resolved with [`BoundaryMode::High`].
    pub fn segment_timeline<T, F>(
        &self,
        timeline_from: f32,
        timeline_to: f32,
        timeline: &WeightedTimeline<T>,
        on_part: F,
    ) -> Result<(), ChangeError>
    where
        F: FnMut(&T, ChangePart),
    {
        if timeline_from == timeline_to {
            log::debug!("segment_timeline: degenerate window {timeline_from}..{timeline_to}");
            return Err(ChangeError::DegenerateWindow {
                from: timeline_from,
                to: timeline_to,
            });
        }
        if timeline.is_empty() {
            return Err(ChangeError::EmptyTimeline);
        }

        let p = inverse_lerp(self.previous, timeline_from, timeline_to);
        let c = inverse_lerp(self.current, timeline_from, timeline_to);
        if !((0.0 < p && c < 1.0) || (0.0 < c && p < 1.0)) {
            return Ok(());
        }
        let p = clamp01(p);
        let c = clamp01(c);
        if p == c {
            return Ok(());
        }

        let p_hit = timeline.search(p, BoundaryMode::High)?;
        let c_hit = timeline.search(c, BoundaryMode::High)?;
        let c_index = c_hit.index();
        let end = clamp01(c_hit.inner_rate(c));
        let mut index = p_hit.index();
        let mut start = clamp01(p_hit.inner_rate(p));

        let mut queue: PartQueue<&T, F> = PartQueue::new(on_part);
        let mut visit = |index: usize, start: f32, end: f32| {
            if let Some(item) = timeline.get(index) {
                let part = ChangePart::timeline(
                    start,
                    end,
                    index,
                    timeline.range_left(index),
                    timeline.range_right(index),
                );
                queue.push(item, part);
            }
        };

        if p < c {
            while index < c_index {
                if start < 1.0 {
                    visit(index, start, 1.0);
                }
                index += 1;
                start = 0.0;
            }
            if start < end {
                visit(index, start, end);
            }
        } else {
            while index > c_index {
                if start > 0.0 {
                    visit(index, start, 0.0);
                }
                index -= 1;
                start = 1.0;
            }
            if start > end {
                visit(index, start, end);
            }
        }

        let emitted = queue.finish();
        log::trace!(
            "segment_timeline: {p}..{c} over {} entries -> {emitted} parts",
            timeline.len()
        );
        Ok(())
    }
}

impl From<(f32, f32)> for ScalarChange {
    fn from((previous, current): (f32, f32)) -> Self {
        Self::new(previous, current)
    }
}

/// Window-local rate of `value`; a zero-width window saturates to a step.
#[inline]
fn window_rate(value: f32, from: f32, to: f32) -> f32 {
    if from == to {
        if value > from {
            1.0
        } else {
            0.0
        }
    } else {
        clamp01(inverse_lerp(value, from, to))
    }
}

/// Holds back the latest part by one step so that the final part of a walk is
/// the only one delivered with `is_minor_change == false`.
struct PartQueue<P, F>
where
    F: FnMut(P, ChangePart),
{
    pending: Option<(P, ChangePart)>,
    sink: F,
    emitted: usize,
}

impl<P, F> PartQueue<P, F>
where
    F: FnMut(P, ChangePart),
{
    fn new(sink: F) -> Self {
        Self {
            pending: None,
            sink,
            emitted: 0,
        }
    }

    fn push(&mut self, payload: P, part: ChangePart) {
        if let Some((prev_payload, prev_part)) = self.pending.replace((payload, part)) {
            self.emit(prev_payload, prev_part.with_minor_change(true));
        }
    }

    fn emit(&mut self, payload: P, part: ChangePart) {
        self.emitted += 1;
        (self.sink)(payload, part);
    }

    /// Flush the held part as final and return how many parts were delivered.
    fn finish(mut self) -> usize {
        if let Some((payload, part)) = self.pending.take() {
            self.emit(payload, part.with_minor_change(false));
        }
        self.emitted
    }
}
