//! Weighted timeline: an ordered list of items, each owning a share of the
//! normalized `[0,1]` range proportional to its weight.
//!
//! Model:
//! - `boundaries[i]` is the cumulative weight before entry `i + 1`, so entry 0
//!   records no boundary and `boundaries.len() == len() - 1`.
//! - Entry `i` spans `[boundaries[i-1] / total, boundaries[i] / total]`, with 0
//!   and 1 at the two ends.
//! - Entries are only ever appended.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::ChangeError;
use crate::float::inverse_lerp;
use crate::search::{boundary_search, BoundaryMode};

fn default_weight() -> f32 {
    1.0
}

/// Serialized form of one timeline entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry<T> {
    pub item: T,
    #[serde(default = "default_weight")]
    pub weight: f32,
}

impl<T> TimelineEntry<T> {
    pub fn new(item: T, weight: f32) -> Self {
        Self { item, weight }
    }
}

/// Ordered items sharing the normalized `[0,1]` range in proportion to their weights.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedTimeline<T> {
    items: Vec<T>,
    weights: Vec<f32>,
    boundaries: Vec<f32>,
    total_weight: f32,
}

impl<T> Default for WeightedTimeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> WeightedTimeline<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            weights: Vec::with_capacity(capacity),
            boundaries: Vec::with_capacity(capacity.saturating_sub(1)),
            total_weight: 0.0,
        }
    }

    /// Build a timeline from entries in order, validating every weight.
    pub fn from_entries<I>(entries: I) -> Result<Self, ChangeError>
    where
        I: IntoIterator<Item = TimelineEntry<T>>,
    {
        let entries = entries.into_iter();
        let mut timeline = Self::with_capacity(entries.size_hint().0);
        for entry in entries {
            timeline.add(entry.item, entry.weight)?;
        }
        Ok(timeline)
    }

    /// Append `item` with the given share of the timeline.
    ///
    /// Returns `self` so additions can be chained with `?`.
    pub fn add(&mut self, item: T, weight: f32) -> Result<&mut Self, ChangeError> {
        if !(weight > 0.0 && weight.is_finite()) {
            log::debug!("timeline: rejecting entry with weight {weight}");
            return Err(ChangeError::InvalidWeight { weight });
        }
        if self.items.is_empty() {
            self.total_weight = weight;
        } else {
            self.boundaries.push(self.total_weight);
            self.total_weight += weight;
        }
        self.items.push(item);
        self.weights.push(weight);
        Ok(self)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all entry weights (0 when empty).
    #[inline]
    pub fn total_weight(&self) -> f32 {
        self.total_weight
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate entries in order as `(item, weight)`.
    pub fn iter(&self) -> impl Iterator<Item = (&T, f32)> + '_ {
        self.items.iter().zip(self.weights.iter().copied())
    }

    /// Normalized lower bound of entry `index`. 0 for the first entry; indices
    /// past the end saturate to 1.
    pub fn range_left(&self, index: usize) -> f32 {
        match index.checked_sub(1) {
            None => 0.0,
            Some(prev) => self.normalized_boundary(prev),
        }
    }

    /// Normalized upper bound of entry `index`. 1 for the last entry and beyond.
    pub fn range_right(&self, index: usize) -> f32 {
        self.normalized_boundary(index)
    }

    fn normalized_boundary(&self, boundary: usize) -> f32 {
        self.boundaries
            .get(boundary)
            .map_or(1.0, |b| b / self.total_weight)
    }

    /// Resolve the entry that owns normalized `position`.
    ///
    /// Positions outside `[0,1]` are not rejected: they resolve to the first or
    /// last entry. A position exactly on a boundary goes to the entry chosen by
    /// `mode` (`High` keeps it in the lower entry, `Low` in the upper one).
    pub fn search(
        &self,
        position: f32,
        mode: BoundaryMode,
    ) -> Result<TimelineQuery<'_, T>, ChangeError> {
        if self.items.is_empty() {
            return Err(ChangeError::EmptyTimeline);
        }
        let index = boundary_search(&self.boundaries, position * self.total_weight, mode);
        Ok(TimelineQuery {
            item: &self.items[index],
            index,
            range_left: self.range_left(index),
            range_right: self.range_right(index),
        })
    }
}

impl<T: Serialize> Serialize for WeightedTimeline<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            self.iter()
                .map(|(item, weight)| TimelineEntry { item, weight }),
        )
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for WeightedTimeline<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<TimelineEntry<T>>::deserialize(deserializer)?;
        Self::from_entries(entries).map_err(de::Error::custom)
    }
}

/// Result of [`WeightedTimeline::search`].
#[derive(Debug)]
pub struct TimelineQuery<'a, T> {
    item: &'a T,
    index: usize,
    range_left: f32,
    range_right: f32,
}

impl<T> Clone for TimelineQuery<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TimelineQuery<'_, T> {}

impl<'a, T> TimelineQuery<'a, T> {
    #[inline]
    pub fn item(&self) -> &'a T {
        self.item
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn range_left(&self) -> f32 {
        self.range_left
    }

    #[inline]
    pub fn range_right(&self) -> f32 {
        self.range_right
    }

    /// Re-normalize a timeline position into this entry's local `[0,1]`.
    #[inline]
    pub fn inner_rate(&self, position: f32) -> f32 {
        inverse_lerp(position, self.range_left, self.range_right)
    }
}
