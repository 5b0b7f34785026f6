use tracing::instrument;

use crate::errors::AutomationError;
use crate::selector::Selector;
use crate::App;

/// Ordering wrappers combining one element action with one screenshot
/// capture. No waiting, no retry: the element is assumed to be on screen.
impl App {
    /// Tap the selector, then capture a screenshot of the result.
    #[instrument(level = "debug", skip(self))]
    pub async fn tap_then_screenshot(
        &self,
        selector: &Selector,
        label: &str,
    ) -> Result<(), AutomationError> {
        self.engine().tap(selector).await?;
        self.engine().screenshot(label).await?;
        Ok(())
    }

    /// Capture a screenshot of the pre-tap state, then tap the selector.
    #[instrument(level = "debug", skip(self))]
    pub async fn screenshot_then_tap(
        &self,
        selector: &Selector,
        label: &str,
    ) -> Result<(), AutomationError> {
        self.engine().screenshot(label).await?;
        self.engine().tap(selector).await?;
        Ok(())
    }

    /// Enter text into the selector, then capture a screenshot.
    #[instrument(level = "debug", skip(self, text))]
    pub async fn enter_text_then_screenshot(
        &self,
        selector: &Selector,
        text: &str,
        label: &str,
    ) -> Result<(), AutomationError> {
        self.engine().enter_text(selector, text).await?;
        self.engine().screenshot(label).await?;
        Ok(())
    }
}
