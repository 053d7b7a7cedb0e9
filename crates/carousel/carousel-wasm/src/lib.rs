use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use carousel_core::{Command, Config, Engine, Inputs, Swipe};

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

#[wasm_bindgen]
pub struct Carousel {
    core: Engine,
}

#[wasm_bindgen]
impl Carousel {
    /// Create a new carousel. Pass a JSON config object or undefined/null
    /// for defaults.
    /// Example:
    ///   new Carousel({ settle_delay: 50 })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<Carousel, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        Ok(Carousel {
            core: Engine::new(cfg),
        })
    }

    /// Slide forward one item (the "next" button). `item_count` is the live
    /// size of the host's collection. Returns the new state as JSON.
    #[wasm_bindgen(js_name = slide_next)]
    pub fn slide_next(&mut self, item_count: u32) -> Result<JsValue, JsError> {
        let state = self
            .core
            .advance(item_count as usize)
            .map_err(|e| JsError::new(&e.to_string()))?;
        swb::to_value(state).map_err(|e| JsError::new(&format!("state error: {e}")))
    }

    /// Slide back one item (the "previous" button). Returns the new state as
    /// JSON.
    #[wasm_bindgen(js_name = slide_prev)]
    pub fn slide_prev(&mut self, item_count: u32) -> Result<JsValue, JsError> {
        let state = self
            .core
            .retreat(item_count as usize)
            .map_err(|e| JsError::new(&e.to_string()))?;
        swb::to_value(state).map_err(|e| JsError::new(&format!("state error: {e}")))
    }

    /// Feed a gesture signal ("left" or "right"). Anything else is ignored
    /// without error.
    #[wasm_bindgen]
    pub fn swipe(&mut self, direction: &str, item_count: u32) -> Result<(), JsError> {
        let swipe = match direction {
            "left" => Swipe::Left,
            "right" => Swipe::Right,
            _ => return Ok(()),
        };
        self.core
            .swipe(swipe, item_count as usize)
            .map(|_| ())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Apply one named command ("advance"/"next", "retreat"/"prev",
    /// "settle", "reset"). Unknown names are dropped without error.
    #[wasm_bindgen]
    pub fn dispatch(&mut self, name: &str, item_count: u32) -> Result<(), JsError> {
        match Command::parse(name, item_count as usize) {
            Some(Command::Advance { .. }) => self
                .core
                .advance(item_count as usize)
                .map(|_| ())
                .map_err(|e| JsError::new(&e.to_string())),
            Some(Command::Retreat { .. }) => self
                .core
                .retreat(item_count as usize)
                .map(|_| ())
                .map_err(|e| JsError::new(&e.to_string())),
            Some(Command::Settle) => {
                self.core.settle();
                Ok(())
            }
            Some(Command::Reset) => {
                self.core.reset();
                Ok(())
            }
            // Commands added later, and names we do not recognize.
            Some(_) | None => Ok(()),
        }
    }

    /// Clear the sliding flag now, without waiting for the deferred settle.
    #[wasm_bindgen]
    pub fn settle(&mut self) {
        self.core.settle();
    }

    /// Return to the initial state.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.core.reset();
    }

    /// Current state as a JSON object.
    #[wasm_bindgen]
    pub fn state(&self) -> Result<JsValue, JsError> {
        swb::to_value(self.core.state()).map_err(|e| JsError::new(&format!("state error: {e}")))
    }

    /// Ring slot of `index` for the current anchor, or 0 for an empty
    /// collection.
    #[wasm_bindgen(js_name = order_of)]
    pub fn order_of(&self, index: u32, item_count: u32) -> u32 {
        let n = item_count as usize;
        if n == 0 || index as usize >= n {
            return 0;
        }
        let anchor = self.core.state().position % n;
        carousel_core::display_order(index as usize, anchor, n) as u32
    }

    /// Recognizer options from the config, for the host to hand to its
    /// gesture layer.
    #[wasm_bindgen(js_name = gesture_options)]
    pub fn gesture_options(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.core.gesture_options())
            .map_err(|e| JsError::new(&format!("options error: {e}")))
    }

    /// Step the engine by `dt` time units. `inputs_json` is an optional
    /// JSON Inputs batch. Returns this tick's outputs as JSON.
    #[wasm_bindgen]
    pub fn update(
        &mut self,
        dt: f32,
        inputs_json: JsValue,
        item_count: u32,
    ) -> Result<JsValue, JsError> {
        let inputs: Inputs = if jsvalue_is_undefined_or_null(&inputs_json) {
            Inputs::default()
        } else {
            swb::from_value(inputs_json).map_err(|e| JsError::new(&format!("inputs error: {e}")))?
        };
        let out = self.core.update(dt, inputs, item_count as usize);
        swb::to_value(out).map_err(|e| JsError::new(&format!("outputs error: {e}")))
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
