//! Mapping from the external gesture recognizer to carousel commands.
//!
//! Gesture recognition itself is a host concern. The core defines only the
//! two directional signals it consumes and the recognizer options the host
//! passes through unchanged.

use serde::{Deserialize, Serialize};

use crate::inputs::Command;

/// Directional swipe reported by the host's gesture layer.
///
/// Swiping left pulls the next item toward the anchor, so it advances;
/// swiping right retreats.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Swipe {
    Left,
    Right,
}

impl Swipe {
    /// Command this swipe issues, carrying the item count at issuance time.
    #[must_use]
    pub fn command(self, item_count: usize) -> Command {
        match self {
            Swipe::Left => Command::Advance { item_count },
            Swipe::Right => Command::Retreat { item_count },
        }
    }
}

/// Recognizer options forwarded to the gesture layer unmodified. Core
/// behavior does not depend on their values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureOptions {
    pub prevent_default_touchmove: bool,
    pub track_mouse: bool,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            prevent_default_touchmove: true,
            track_mouse: true,
        }
    }
}
