use tracing::{debug, instrument};

use crate::element::describe_matches;
use crate::selector::Selector;
use crate::App;

/// Channel label under which helper diagnostics land in the device log.
const DEVICE_LOG_LABEL: &str = "tapflow-log";

impl App {
    /// Forward a line of text to the device log, mirroring it to local
    /// tracing output.
    ///
    /// Fire-and-forget: a broken device channel must never fail the test
    /// step being diagnosed, so engine errors are downgraded to a local
    /// `debug!` and dropped. Callers format with `format!` first.
    #[instrument(level = "debug", skip(self, text))]
    pub async fn log_to_device(&self, text: &str) {
        debug!(target: "device_log", "{text}");
        if let Err(e) = self.engine().log_to_device(DEVICE_LOG_LABEL, text).await {
            debug!("device log channel failed, dropping entry: {e}");
        }
    }

    /// Query the selector and forward a description of the match set to
    /// the device log. Query failures are dropped too; a diagnostic that
    /// can fail the step it documents is worse than a missing one.
    #[instrument(level = "debug", skip(self))]
    pub async fn log_matches(&self, selector: &Selector) {
        match self.engine().query(selector).await {
            Ok(matches) => self.log_to_device(&describe_matches(&matches)).await,
            Err(e) => debug!("query for device log failed, dropping entry: {e}"),
        }
    }
}
