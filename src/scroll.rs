use tracing::{debug, instrument};

use crate::element::{ElementMatch, Rect};
use crate::errors::AutomationError;
use crate::selector::Selector;
use crate::App;

/// Query attempts a scroll search makes before giving up, unless the
/// caller overrides it.
pub const DEFAULT_SCROLL_ATTEMPTS: u32 = 20;

/// Nominal half-distance of one scroll drag, in screen units.
const NOMINAL_SCROLL_GAP: f64 = 100.0;

/// Half the vertical drag distance for a reference element of the given
/// height. Short viewports get a proportional gap so the drag stays inside
/// the visible area.
pub(crate) fn scroll_gap(height: f64) -> f64 {
    if height < NOMINAL_SCROLL_GAP * 2.0 {
        height / 4.0
    } else {
        NOMINAL_SCROLL_GAP
    }
}

impl App {
    /// Incrementally scroll down until the selector matches, returning the
    /// match set of the successful attempt.
    ///
    /// Each attempt queries the selector; on a miss an upward drag is
    /// injected through the vertical center of the reference element (the
    /// first element of an any-element query, resolved once per call).
    /// With a budget of `max_attempts` queries (default
    /// [`DEFAULT_SCROLL_ATTEMPTS`]) at most `max_attempts - 1` drags are
    /// issued; a first-attempt match performs no gesture at all.
    #[instrument(level = "debug", skip(self))]
    pub async fn scroll_down_until_found(
        &self,
        selector: &Selector,
        max_attempts: Option<u32>,
    ) -> Result<Vec<ElementMatch>, AutomationError> {
        let max_attempts = max_attempts.unwrap_or(DEFAULT_SCROLL_ATTEMPTS);
        if max_attempts == 0 {
            return Err(AutomationError::InvalidArgument(
                "max_attempts must be greater than zero".to_string(),
            ));
        }

        // Reference rect lives only for this invocation.
        let mut reference: Option<Rect> = None;

        for attempt in 1..=max_attempts {
            let matches = self.engine().query(selector).await?;
            if !matches.is_empty() {
                debug!(attempt, matched = matches.len(), "scroll search hit");
                return Ok(matches);
            }

            if attempt == max_attempts {
                break;
            }

            let rect = match reference {
                Some(rect) => rect,
                None => {
                    let rect = self.reference_rect().await?;
                    reference = Some(rect);
                    rect
                }
            };

            let gap = scroll_gap(rect.height);
            let cx = rect.center_x();
            let cy = rect.center_y();
            debug!(attempt, gap, "no match, scrolling down");
            self.engine()
                .drag_coordinates(cx, cy + gap, cx, cy - gap)
                .await?;
        }

        Err(AutomationError::ScrollSearchExhausted {
            selector: selector.to_string(),
            attempts: max_attempts,
        })
    }

    /// Scroll until the selector is visible, tap it, then capture an
    /// optional screenshot.
    #[instrument(level = "debug", skip(self))]
    pub async fn scroll_down_and_tap(
        &self,
        selector: &Selector,
        screenshot: Option<&str>,
    ) -> Result<(), AutomationError> {
        self.scroll_down_until_found(selector, None).await?;
        self.engine().tap(selector).await?;
        if let Some(label) = screenshot {
            self.engine().screenshot(label).await?;
        }
        Ok(())
    }

    /// Scroll until the selector is visible, capture a screenshot of the
    /// pre-tap state, then tap.
    #[instrument(level = "debug", skip(self))]
    pub async fn scroll_down_screenshot_then_tap(
        &self,
        selector: &Selector,
        label: &str,
    ) -> Result<(), AutomationError> {
        self.scroll_down_until_found(selector, None).await?;
        self.engine().screenshot(label).await?;
        self.engine().tap(selector).await?;
        Ok(())
    }

    /// First element of an any-element query, used to anchor the drag.
    async fn reference_rect(&self) -> Result<Rect, AutomationError> {
        let any = self.engine().query(&Selector::Any).await?;
        any.first()
            .map(|root| root.rect)
            .ok_or(AutomationError::NoRootElement)
    }
}
