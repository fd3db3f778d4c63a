// Pipeline wiring tests with stubbed stages.
//
// These validate the fixed stage order and the message payloads handed to
// the broadcaster, without a browser or network.

mod test_utils;

use hokusai::Pipeline;
use hokusai_core::{
    BroadcastMessage, CaptureSettings, HeatmapTarget, RunProfile, SUMMARY_HEADER,
};
use std::path::Path;
use test_utils::{MockAnalyst, MockCapture, MockHost, RecordingBroadcaster};

const PNG_STUB: &[u8] = &[0x89, 0x50, 0x4E, 0x47];
const HOSTED_URL: &str = "https://img.example/x.png";

fn settings() -> CaptureSettings {
    CaptureSettings::new(RunProfile::Standard.viewport(), 15, 500)
}

#[tokio::test]
async fn standard_run_broadcasts_one_image_message() -> anyhow::Result<()> {
    let (capture, _) = MockCapture::new(PNG_STUB.to_vec());
    let (host, _) = MockHost::new_success(HOSTED_URL);
    let (broadcaster, sent) = RecordingBroadcaster::new();

    let pipeline = Pipeline::new(
        Box::new(capture),
        Box::new(host),
        None,
        Box::new(broadcaster),
    );
    let report = pipeline
        .run(
            &HeatmapTarget::default(),
            &settings(),
            Path::new("nikkei_heatmap_2025-01-15.png"),
        )
        .await?;

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0], vec![BroadcastMessage::image(HOSTED_URL)]);
    assert!(!report.analyzed());
    assert_eq!(*report.messages(), 1);
    Ok(())
}

#[tokio::test]
async fn image_message_urls_are_identical_and_match_publish() -> anyhow::Result<()> {
    let (capture, _) = MockCapture::new(PNG_STUB.to_vec());
    let (host, _) = MockHost::new_success(HOSTED_URL);
    let (broadcaster, sent) = RecordingBroadcaster::new();

    let pipeline = Pipeline::new(
        Box::new(capture),
        Box::new(host),
        None,
        Box::new(broadcaster),
    );
    pipeline
        .run(
            &HeatmapTarget::default(),
            &settings(),
            Path::new("nikkei_heatmap_2025-01-15.png"),
        )
        .await?;

    let sent = sent.lock().unwrap();
    match &sent[0][0] {
        BroadcastMessage::Image {
            original_url,
            preview_url,
        } => {
            assert_eq!(original_url, HOSTED_URL);
            assert_eq!(original_url, preview_url);
        }
        other => panic!("expected image message, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn annotated_run_broadcasts_image_then_headed_text() -> anyhow::Result<()> {
    let (capture, _) = MockCapture::new(PNG_STUB.to_vec());
    let (host, _) = MockHost::new_success(HOSTED_URL);
    let (analyst, analyst_calls) = MockAnalyst::new_success("summary text");
    let (broadcaster, sent) = RecordingBroadcaster::new();

    let pipeline = Pipeline::new(
        Box::new(capture),
        Box::new(host),
        Some(Box::new(analyst)),
        Box::new(broadcaster),
    );
    let report = pipeline
        .run(
            &HeatmapTarget::default(),
            &settings(),
            Path::new("nikkei_heatmap_20250115.png"),
        )
        .await?;

    let sent = sent.lock().unwrap();
    assert_eq!(
        sent[0],
        vec![
            BroadcastMessage::image(HOSTED_URL),
            BroadcastMessage::text(format!("{SUMMARY_HEADER}\n\nsummary text")),
        ]
    );
    assert_eq!(analyst_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    assert!(report.analyzed());
    assert_eq!(*report.messages(), 2);
    Ok(())
}

#[tokio::test]
async fn text_body_keeps_summary_verbatim() -> anyhow::Result<()> {
    let summary = "日経平均は続伸。\n\nトヨタ(7203),+2.1%:\n円安進行で輸出採算が改善";
    let (capture, _) = MockCapture::new(PNG_STUB.to_vec());
    let (host, _) = MockHost::new_success(HOSTED_URL);
    let (analyst, _) = MockAnalyst::new_success(summary);
    let (broadcaster, sent) = RecordingBroadcaster::new();

    let pipeline = Pipeline::new(
        Box::new(capture),
        Box::new(host),
        Some(Box::new(analyst)),
        Box::new(broadcaster),
    );
    pipeline
        .run(
            &HeatmapTarget::default(),
            &settings(),
            Path::new("nikkei_heatmap_20250115.png"),
        )
        .await?;

    let sent = sent.lock().unwrap();
    match &sent[0][1] {
        BroadcastMessage::Text { body } => {
            assert!(body.starts_with(SUMMARY_HEADER));
            assert!(body.ends_with(summary));
        }
        other => panic!("expected text message, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn malformed_upload_response_aborts_before_broadcast() {
    let (capture, capture_calls) = MockCapture::new(PNG_STUB.to_vec());
    let (host, host_calls) = MockHost::new_malformed();
    let (analyst, analyst_calls) = MockAnalyst::new_success("summary text");
    let (broadcaster, sent) = RecordingBroadcaster::new();

    let pipeline = Pipeline::new(
        Box::new(capture),
        Box::new(host),
        Some(Box::new(analyst)),
        Box::new(broadcaster),
    );
    let result = pipeline
        .run(
            &HeatmapTarget::default(),
            &settings(),
            Path::new("nikkei_heatmap_20250115.png"),
        )
        .await;

    assert!(result.is_err());
    assert_eq!(capture_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    assert_eq!(host_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    assert_eq!(analyst_calls.load(std::sync::atomic::Ordering::SeqCst), 0);
    assert!(sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn analysis_failure_has_no_partial_broadcast() {
    let (capture, _) = MockCapture::new(PNG_STUB.to_vec());
    let (host, _) = MockHost::new_success(HOSTED_URL);
    let (analyst, _) = MockAnalyst::new_failing();
    let (broadcaster, sent) = RecordingBroadcaster::new();

    let pipeline = Pipeline::new(
        Box::new(capture),
        Box::new(host),
        Some(Box::new(analyst)),
        Box::new(broadcaster),
    );
    let result = pipeline
        .run(
            &HeatmapTarget::default(),
            &settings(),
            Path::new("nikkei_heatmap_20250115.png"),
        )
        .await;

    assert!(result.is_err());
    assert!(sent.lock().unwrap().is_empty());
}
