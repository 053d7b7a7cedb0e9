//! Engine: state ownership and the public stepping API.
//!
//! Methods:
//! - new, state, gesture_options
//! - advance / retreat / swipe / settle / reset (synchronous triggers)
//! - update (apply queued commands → advance the clock → fire expired
//!   settles → emit per-item directives)

use log::{debug, warn};

use crate::config::Config;
use crate::error::CarouselError;
use crate::gesture::{GestureOptions, Swipe};
use crate::inputs::{Command, Inputs};
use crate::order::display_order;
use crate::outputs::{CoreEvent, Directive, Outputs};
use crate::state::CarouselState;

/// Carousel engine: the single owner of carousel state.
///
/// All mutation funnels through the reducer in [`CarouselState::apply`]; the
/// engine adds the settle clock and the per-item directive pass on top. It
/// is single-threaded and deterministic: identical command and `dt`
/// sequences produce identical outputs.
#[derive(Debug)]
pub struct Engine {
    cfg: Config,
    state: CarouselState,
    /// Logical time, advanced only by `update`.
    clock: f32,
    /// Absolute deadlines of in-flight settle timers. A new slide never
    /// cancels an earlier deadline, so rapid slides leave several in flight
    /// and each one fires.
    pending_settles: Vec<f32>,
    /// Events raised by trigger methods between ticks, drained into the next
    /// update's outputs.
    queued_events: Vec<CoreEvent>,
    // Per-tick outputs
    outputs: Outputs,
}

impl Engine {
    /// Create a new engine with the given config.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            state: CarouselState::default(),
            clock: 0.0,
            pending_settles: Vec::new(),
            queued_events: Vec::new(),
            outputs: Outputs::default(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// Recognizer options for the host's gesture layer, passed through
    /// unmodified from the config.
    pub fn gesture_options(&self) -> GestureOptions {
        self.cfg.gesture
    }

    /// Slide forward one item (the "next" button). Fails fast on an empty
    /// collection instead of leaving the reducer guard to swallow it.
    pub fn advance(&mut self, item_count: usize) -> Result<&CarouselState, CarouselError> {
        self.slide(Command::Advance { item_count }, item_count)
    }

    /// Slide back one item (the "previous" button).
    pub fn retreat(&mut self, item_count: usize) -> Result<&CarouselState, CarouselError> {
        self.slide(Command::Retreat { item_count }, item_count)
    }

    /// Slide in response to a gesture signal; identical in effect to the
    /// button surface.
    pub fn swipe(
        &mut self,
        swipe: Swipe,
        item_count: usize,
    ) -> Result<&CarouselState, CarouselError> {
        self.slide(swipe.command(item_count), item_count)
    }

    fn slide(&mut self, cmd: Command, item_count: usize) -> Result<&CarouselState, CarouselError> {
        if item_count == 0 {
            return Err(CarouselError::InvalidItemCount(item_count));
        }
        self.apply_slide(cmd);
        Ok(&self.state)
    }

    /// Clear the sliding flag now, without waiting for the timer.
    pub fn settle(&mut self) {
        self.apply_settle();
    }

    /// Return to the initial state. In-flight settle timers keep running;
    /// their later firing re-asserts an already-cleared flag.
    pub fn reset(&mut self) {
        self.apply_reset();
    }

    /// Step the carousel by `dt` time units with queued host commands,
    /// producing this tick's outputs. `item_count` is the live size of the
    /// host collection at render time; the directive pass covers exactly
    /// `0..item_count`.
    pub fn update(&mut self, dt: f32, inputs: Inputs, item_count: usize) -> &Outputs {
        self.outputs.clear();

        // 1) Queued host commands, in order.
        for cmd in inputs.commands {
            self.apply_command(cmd);
        }

        // 2) Advance the settle clock and fire expired timers. Every timer
        //    applies Settle; repeats are absorbed by idempotence.
        self.clock += dt;
        let clock = self.clock;
        let before = self.pending_settles.len();
        self.pending_settles.retain(|deadline| *deadline > clock);
        for _ in 0..before - self.pending_settles.len() {
            self.apply_settle();
        }

        // 3) Everything that happened since the previous tick, in order.
        self.outputs.events.append(&mut self.queued_events);

        // 4) One render directive per item, relative to the current anchor.
        if item_count > 0 {
            // The live count may have shrunk below the last slide's
            // position; fold the anchor back into range rather than trusting
            // it.
            let anchor = self.state.position % item_count;
            for index in 0..item_count {
                self.outputs.push_directive(Directive {
                    index,
                    slot: display_order(index, anchor, item_count),
                    sliding: self.state.sliding,
                    direction: self.state.direction,
                });
            }
        }

        &self.outputs
    }

    fn apply_command(&mut self, cmd: Command) {
        match cmd {
            Command::Advance { item_count: 0 } | Command::Retreat { item_count: 0 } => {
                warn!("dropping slide command against an empty collection");
            }
            Command::Advance { .. } | Command::Retreat { .. } => self.apply_slide(cmd),
            Command::Settle => self.apply_settle(),
            Command::Reset => self.apply_reset(),
        }
    }

    fn apply_slide(&mut self, cmd: Command) {
        self.state = self.state.apply(cmd);
        self.pending_settles.push(self.clock + self.cfg.settle_delay);
        self.queued_events.push(CoreEvent::SlideStarted {
            position: self.state.position,
            direction: self.state.direction,
        });
        debug!(
            "slide applied: position={} direction={:?} ({} settle timer(s) in flight)",
            self.state.position,
            self.state.direction,
            self.pending_settles.len()
        );
    }

    fn apply_settle(&mut self) {
        let was_sliding = self.state.sliding;
        self.state = self.state.apply(Command::Settle);
        if was_sliding {
            self.queued_events.push(CoreEvent::Settled {
                position: self.state.position,
            });
            debug!("carousel settled at position {}", self.state.position);
        }
    }

    fn apply_reset(&mut self) {
        self.state = self.state.apply(Command::Reset);
        self.queued_events.push(CoreEvent::Reset);
        debug!("carousel reset");
    }
}
