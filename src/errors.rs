use thiserror::Error;

/// Errors raised by the helpers or passed through from the engine.
///
/// Engine failures travel unmodified through every composing helper; the
/// only places that recover are `wait_then_tap_if_exists` (a non-find after
/// the poll budget is a normal outcome) and the device-log channel (always
/// swallowed).
#[derive(Debug, Error)]
pub enum AutomationError {
    /// Scroll search could not find any element to anchor the drag gesture.
    #[error("unable to locate a root element to anchor the scroll gesture")]
    NoRootElement,

    /// Scroll search spent its whole retry budget without a match.
    #[error("no element matched {selector} after {attempts} scroll attempts")]
    ScrollSearchExhausted { selector: String, attempts: u32 },

    /// The engine's wait primitive gave up before the element appeared.
    #[error("timed out: {0}")]
    Timeout(String),

    /// The engine could not resolve a selector to an element.
    #[error("element not found: {0}")]
    ElementNotFound(String),

    /// Engine-side failure (gesture injection, capture, channel, ...).
    #[error("platform error: {0}")]
    PlatformError(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
