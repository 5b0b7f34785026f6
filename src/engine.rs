use std::time::Duration;

use crate::element::ElementMatch;
use crate::errors::AutomationError;
use crate::selector::Selector;

/// The collaborator trait every automation engine must implement.
///
/// The helpers treat the engine as a black box: matching semantics, gesture
/// injection, screenshot storage and the device-log transport are all owned
/// by the implementation. Engines are expected to report failures with
/// `ElementNotFound`, `Timeout` or `PlatformError`, which the helpers pass
/// through unchanged.
#[async_trait::async_trait]
pub trait AutomationEngine: Send + Sync {
    /// Look up all elements currently matching the selector. An empty
    /// result is "not found yet", not an error.
    async fn query(&self, selector: &Selector) -> Result<Vec<ElementMatch>, AutomationError>;

    /// Inject one drag gesture between two screen coordinates.
    async fn drag_coordinates(
        &self,
        from_x: f64,
        from_y: f64,
        to_x: f64,
        to_y: f64,
    ) -> Result<(), AutomationError>;

    /// Block until an element matching the selector appears, failing with
    /// `Timeout` otherwise. Polling cadence and default timeout are the
    /// engine's own.
    async fn wait_for_element(
        &self,
        selector: &Selector,
        message: Option<&str>,
        timeout: Option<Duration>,
    ) -> Result<(), AutomationError>;

    /// Tap the first element matching the selector.
    async fn tap(&self, selector: &Selector) -> Result<(), AutomationError>;

    /// Enter text into the first element matching the selector.
    async fn enter_text(&self, selector: &Selector, text: &str) -> Result<(), AutomationError>;

    /// Capture a screenshot under the given label. Side-effect only; where
    /// the capture lands is the engine's concern.
    async fn screenshot(&self, label: &str) -> Result<(), AutomationError>;

    /// Best-effort diagnostic channel to the device log.
    async fn log_to_device(&self, label: &str, text: &str) -> Result<(), AutomationError>;
}
