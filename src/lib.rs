//! Convenience helpers for mobile UI-test automation
//!
//! This crate layers common test gestures — scroll-until-visible,
//! wait-then-tap, wait-then-enter-text, conditional taps, screenshot
//! composition — on top of an injected [`AutomationEngine`]. All element
//! querying, gesture injection, text entry and screenshot capture is the
//! engine's job; the helpers only sequence and retry calls into it.

use std::sync::Arc;

pub mod actions;
pub mod device_log;
pub mod element;
pub mod engine;
pub mod errors;
pub mod scroll;
pub mod selector;
#[cfg(test)]
mod tests;
pub mod wait;

pub use element::{ElementMatch, Rect};
pub use engine::AutomationEngine;
pub use errors::AutomationError;
pub use selector::Selector;

/// The main entry point: a handle on the application under test.
///
/// Wraps the engine behind an `Arc` so the handle is cheap to clone and
/// share across test steps. Every helper method lives in a topic module
/// (`scroll`, `wait`, `actions`, `device_log`) as an `impl App` block.
pub struct App {
    engine: Arc<dyn AutomationEngine>,
}

impl App {
    pub fn new(engine: Arc<dyn AutomationEngine>) -> Self {
        Self { engine }
    }

    /// Direct access to the underlying engine, for steps the helpers
    /// don't cover.
    pub fn engine(&self) -> &Arc<dyn AutomationEngine> {
        &self.engine
    }
}

impl Clone for App {
    fn clone(&self) -> Self {
        Self {
            engine: self.engine.clone(),
        }
    }
}
