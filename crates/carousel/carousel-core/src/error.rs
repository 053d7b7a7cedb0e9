//! Error type for the engine's hardened entry points.

use thiserror::Error;

/// The one failure the carousel reports. Everything else the transition
/// table absorbs as a no-op.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    /// A slide was requested against an empty collection.
    #[error("carousel needs at least one item to slide (got {0})")]
    InvalidItemCount(usize),
}
