//! TweenCore core (engine-agnostic)
//!
//! Splits the scalar change a value takes during one update tick into
//! boundary-aligned parts: against a single window, a repeating cycle, or a
//! weighted timeline. Each part is normalized into `[0,1]` and handed to a
//! caller-supplied callback in traversal order.
//!
//! ```rust
//! use tweencore_core::{ScalarChange, WeightedTimeline};
//!
//! let mut timeline = WeightedTimeline::new();
//! timeline.add("fade", 1.0)?.add("hold", 3.0)?;
//!
//! let mut seen = Vec::new();
//! ScalarChange::new(0.0, 0.5).segment_timeline(0.0, 1.0, &timeline, |name, part| {
//!     seen.push((*name, part.previous, part.current));
//! })?;
//! assert_eq!(seen[0], ("fade", 0.0, 1.0));
//! assert_eq!(seen[1].0, "hold");
//! # Ok::<(), tweencore_core::ChangeError>(())
//! ```

pub mod change;
pub mod error;
pub mod float;
pub mod loader;
pub mod part;
pub mod search;
pub mod timeline;

// Re-exports for consumers
pub use change::{Direction, ScalarChange};
pub use error::ChangeError;
pub use loader::parse_timeline_json;
pub use part::{ChangePart, PartKind};
pub use search::{boundary_search, BoundaryMode};
pub use timeline::{TimelineEntry, TimelineQuery, WeightedTimeline};

/// Result type for timeline and segmentation operations.
pub type Result<T> = core::result::Result<T, ChangeError>;
