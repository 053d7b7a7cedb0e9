//! Input contracts for the carousel engine.
//!
//! Hosts queue one command per user trigger and pass the batch into
//! [`crate::Engine::update`] each tick. Slide commands carry the live item
//! count at issuance time because the collection may grow or shrink between
//! renders.

use serde::{Deserialize, Serialize};

/// A single carousel command.
///
/// Marked non-exhaustive so hosts built against an older core keep compiling
/// when commands are added; unrecognized input at the host boundary is
/// dropped rather than treated as an error.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Move the anchor forward one item, wrapping past the end.
    Advance { item_count: usize },
    /// Move the anchor back one item, wrapping past the start.
    Retreat { item_count: usize },
    /// Clear the transient sliding flag.
    Settle,
    /// Return to the initial state.
    Reset,
}

impl Command {
    /// Parse a host-supplied command name. Unknown names yield `None`, which
    /// callers drop silently.
    pub fn parse(name: &str, item_count: usize) -> Option<Command> {
        match name {
            "advance" | "next" => Some(Command::Advance { item_count }),
            "retreat" | "prev" => Some(Command::Retreat { item_count }),
            "settle" => Some(Command::Settle),
            "reset" => Some(Command::Reset),
            other => {
                log::debug!("ignoring unknown carousel command {other:?}");
                None
            }
        }
    }
}

/// Commands applied by [`crate::Engine::update`] before time advances.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Inputs {
    #[serde(default)]
    pub commands: Vec<Command>,
}
