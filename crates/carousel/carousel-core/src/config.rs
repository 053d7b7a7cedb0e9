//! Core configuration for carousel-core.

use serde::{Deserialize, Serialize};

use crate::gesture::GestureOptions;

/// Engine configuration. Deliberately small; hosts hand it over as plain
/// JSON and take the defaults for anything they omit.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Delay between a slide command and its automatic settle, in the same
    /// time units the host passes to `Engine::update`.
    pub settle_delay: f32,
    /// Options handed through to the host's gesture recognizer.
    pub gesture: GestureOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settle_delay: 50.0,
            gesture: GestureOptions::default(),
        }
    }
}
