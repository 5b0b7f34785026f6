use std::time::Duration;

use tracing::{debug, instrument};

use crate::errors::AutomationError;
use crate::selector::Selector;
use crate::App;

/// Default budget for the engine's wait-for-element primitive, if no
/// timeout is specified on the call itself.
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(20);

/// Default poll budget, in seconds, for `wait_then_tap_if_exists`.
pub const DEFAULT_POLL_SECS: u32 = 5;

const POLL_INTERVAL: Duration = Duration::from_secs(1);

const WAIT_TIMEOUT_MESSAGE: &str = "Timed out waiting for element";

impl App {
    /// Wait for the selector to appear, tap it, then capture an optional
    /// screenshot. A missed wait surfaces the engine's `Timeout` error and
    /// performs no tap.
    #[instrument(level = "debug", skip(self))]
    pub async fn wait_then_tap(
        &self,
        selector: &Selector,
        screenshot: Option<&str>,
        timeout: Option<Duration>,
    ) -> Result<(), AutomationError> {
        self.wait(selector, timeout).await?;
        self.engine().tap(selector).await?;
        if let Some(label) = screenshot {
            self.engine().screenshot(label).await?;
        }
        Ok(())
    }

    /// Wait for the selector, capture a screenshot of the pre-tap state,
    /// then tap.
    #[instrument(level = "debug", skip(self))]
    pub async fn wait_screenshot_then_tap(
        &self,
        selector: &Selector,
        label: &str,
        timeout: Option<Duration>,
    ) -> Result<(), AutomationError> {
        self.wait(selector, timeout).await?;
        self.engine().screenshot(label).await?;
        self.engine().tap(selector).await?;
        Ok(())
    }

    /// Wait for the selector, enter text into it, then capture an optional
    /// screenshot.
    #[instrument(level = "debug", skip(self, text))]
    pub async fn wait_then_enter_text(
        &self,
        selector: &Selector,
        text: &str,
        screenshot: Option<&str>,
    ) -> Result<(), AutomationError> {
        self.wait(selector, None).await?;
        self.engine().enter_text(selector, text).await?;
        if let Some(label) = screenshot {
            self.engine().screenshot(label).await?;
        }
        Ok(())
    }

    /// Tap the selector only if it shows up within the poll budget.
    ///
    /// Polls the query once per second, at most `timeout_secs` times
    /// (default [`DEFAULT_POLL_SECS`]), sleeping between polls rather than
    /// using the engine's wait primitive. An element that never appears is
    /// a normal outcome: the call returns `Ok(())` without tapping. Engine
    /// failures still propagate.
    #[instrument(level = "debug", skip(self))]
    pub async fn wait_then_tap_if_exists(
        &self,
        selector: &Selector,
        timeout_secs: Option<u32>,
        screenshot: Option<&str>,
    ) -> Result<(), AutomationError> {
        let budget = timeout_secs.unwrap_or(DEFAULT_POLL_SECS);

        for poll in 1..=budget {
            if !self.engine().query(selector).await?.is_empty() {
                debug!(poll, "optional element appeared, tapping");
                if let Some(label) = screenshot {
                    self.engine().screenshot(label).await?;
                }
                self.engine().tap(selector).await?;
                return Ok(());
            }
            if poll < budget {
                tokio::time::sleep(POLL_INTERVAL).await;
            }
        }

        debug!(budget, "optional element never appeared, skipping tap");
        Ok(())
    }

    async fn wait(
        &self,
        selector: &Selector,
        timeout: Option<Duration>,
    ) -> Result<(), AutomationError> {
        let effective_timeout = timeout.unwrap_or(DEFAULT_WAIT_TIMEOUT);
        self.engine()
            .wait_for_element(selector, Some(WAIT_TIMEOUT_MESSAGE), Some(effective_timeout))
            .await
    }
}
