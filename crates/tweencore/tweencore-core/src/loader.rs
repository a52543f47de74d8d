use serde::de::DeserializeOwned;

use crate::error::ChangeError;
use crate::timeline::WeightedTimeline;

/// Public API: parse a timeline definition from JSON.
///
/// Expected shape is an ordered array of entries:
/// `[{ "item": ..., "weight": 2.0 }, { "item": ... }]`
///
/// Notes:
/// - `weight` defaults to 1.0 when omitted.
/// - Weights must be positive and finite; the first offending entry fails the
///   whole load with `InvalidWeight`.
/// - Items are deserialized as `T`, so labels (strings, ids) are the usual
///   choice; callers map them onto handlers after loading.
pub fn parse_timeline_json<T>(s: &str) -> Result<WeightedTimeline<T>, ChangeError>
where
    T: DeserializeOwned,
{
    let entries: Vec<crate::timeline::TimelineEntry<T>> = serde_json::from_str(s)?;
    let timeline = WeightedTimeline::from_entries(entries)?;
    log::debug!(
        "loaded timeline: {} entries, total weight {}",
        timeline.len(),
        timeline.total_weight()
    );
    Ok(timeline)
}
