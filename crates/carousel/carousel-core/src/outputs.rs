//! Output contracts from the carousel engine.
//!
//! Directives carry everything the rendering layer needs to place and
//! animate each item this tick. Events are discrete signals hosts can
//! forward to tests or instrumentation; adapters transport both as-is.

use serde::{Deserialize, Serialize};

use crate::state::Direction;

/// Per-item render directive for one tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    /// Fixed logical index of the item in the host's collection.
    pub index: usize,
    /// Ring slot the item occupies this tick; slot 0 is the anchor.
    pub slot: usize,
    /// True while a settle is pending; drives the enter/exit animation.
    pub sliding: bool,
    /// Direction of the most recent slide, for animation hinting.
    pub direction: Direction,
}

/// Discrete signals emitted during stepping.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoreEvent {
    SlideStarted {
        position: usize,
        direction: Direction,
    },
    Settled {
        position: usize,
    },
    Reset,
}

/// Outputs returned by `Engine::update()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub directives: Vec<Directive>,
    #[serde(default)]
    pub events: Vec<CoreEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.directives.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_directive(&mut self, directive: Directive) {
        self.directives.push(directive);
    }

    #[inline]
    pub fn push_event(&mut self, event: CoreEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty() && self.events.is_empty()
    }
}
