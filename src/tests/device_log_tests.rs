//! Tests for the fire-and-forget device-log helpers.

use super::mock_engine::{button, EngineCall, MockEngine};
use crate::selector::Selector;

#[tokio::test]
async fn log_to_device_forwards_text_under_fixed_label() {
    let engine = MockEngine::new();

    engine.app().log_to_device("step 3: submitting form").await;

    assert_eq!(
        engine.calls(),
        vec![EngineCall::DeviceLog {
            label: "tapflow-log".to_string(),
            text: "step 3: submitting form".to_string(),
        }]
    );
}

#[tokio::test]
async fn log_to_device_swallows_channel_failures() {
    let engine = MockEngine::new();
    engine.fail_device_log();

    // Must not panic or surface the engine error.
    engine.app().log_to_device("lost entry").await;

    assert_eq!(
        engine.calls_where(|c| matches!(c, EngineCall::DeviceLog { .. })).len(),
        1
    );
}

#[tokio::test]
async fn log_matches_forwards_match_description() {
    let engine = MockEngine::new();
    let selector = Selector::ClassName("android.widget.Button".to_string());
    engine.script_queries([vec![button("Retry")]]);

    engine.app().log_matches(&selector).await;

    let logs = engine.calls_where(|c| matches!(c, EngineCall::DeviceLog { .. }));
    assert_eq!(logs.len(), 1);
    let EngineCall::DeviceLog { text, .. } = &logs[0] else {
        unreachable!();
    };
    assert!(text.contains("Index         - 0"));
    assert!(text.contains("android.widget.Button"));
    assert!(text.contains("Retry"));
}

#[tokio::test]
async fn log_matches_swallows_query_failures() {
    let engine = MockEngine::new();
    engine.fail_queries();

    engine.app().log_matches(&Selector::Any).await;

    // The query was attempted, nothing was forwarded, nothing surfaced.
    assert!(engine
        .calls_where(|c| matches!(c, EngineCall::DeviceLog { .. }))
        .is_empty());
}
