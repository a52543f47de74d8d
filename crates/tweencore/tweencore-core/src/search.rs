//! Binary search over sorted break-points with explicit tie-breaking.
//!
//! Two modes decide which side owns a value that lands exactly on a
//! break-point:
//! - `Low`: break-points equal to the value count as "before" it, so the
//!   returned insertion index moves right past them.
//! - `High`: only break-points strictly below the value count as "before".

use serde::{Deserialize, Serialize};

/// Tie-break rule for values landing exactly on a boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryMode {
    Low,
    #[default]
    High,
}

/// Returns the insertion index `i` in `[0, sorted.len()]` for `value`.
///
/// `sorted` must be non-decreasing. Runs in O(log n).
pub fn boundary_search(sorted: &[f32], value: f32, mode: BoundaryMode) -> usize {
    match mode {
        BoundaryMode::Low => sorted.partition_point(|&b| b <= value),
        BoundaryMode::High => sorted.partition_point(|&b| b < value),
    }
}
