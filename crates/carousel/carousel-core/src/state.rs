//! Carousel state and the transition function that advances it.
//!
//! The reactive "dispatch + reducer" shape made explicit: [`CarouselState::apply`]
//! is a pure function from (state, command) to the next state, and every
//! application returns a full replacement value. The machine has no terminal
//! state; it runs for the component's whole lifetime.

use serde::{Deserialize, Serialize};

use crate::inputs::Command;

/// Direction of the most recent slide. Hosts use it to pick the enter/exit
/// animation; it never feeds back into position math.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Full carousel state. `position` is the logical index currently sitting at
/// the anchor slot; `sliding` is true while a deferred settle is pending.
///
/// The item count is deliberately not stored: slide commands carry the live
/// count at issuance time, so items added or removed between renders are
/// picked up immediately instead of going stale here.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselState {
    pub position: usize,
    pub sliding: bool,
    pub direction: Direction,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            position: 0,
            sliding: false,
            direction: Direction::Forward,
        }
    }
}

impl CarouselState {
    /// Apply one command and return the next state.
    ///
    /// Slide commands whose `item_count` is zero fail their guard and leave
    /// the state untouched; [`crate::Engine`] is where that case gets
    /// rejected loudly. `Settle` on a settled state is a no-op, so repeated
    /// settles from overlapping timers are harmless.
    #[must_use]
    pub fn apply(self, cmd: Command) -> CarouselState {
        match cmd {
            Command::Advance { item_count: n } if n >= 1 => CarouselState {
                position: (self.position + 1) % n,
                sliding: true,
                direction: Direction::Forward,
            },
            Command::Retreat { item_count: n } if n >= 1 => CarouselState {
                position: (self.position + n - 1) % n,
                sliding: true,
                direction: Direction::Backward,
            },
            Command::Settle => CarouselState {
                sliding: false,
                ..self
            },
            Command::Reset => CarouselState::default(),
            // Guard-failed slides fall through unchanged.
            _ => self,
        }
    }
}
