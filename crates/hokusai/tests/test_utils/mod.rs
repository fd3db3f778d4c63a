//! Mock stage implementations for pipeline tests.
//!
//! Each mock counts its calls through a shared handle so tests can assert
//! which stages ran; the broadcaster records every payload it receives.

use async_trait::async_trait;
use hokusai_core::{
    BroadcastMessage, CaptureSettings, HeatmapTarget, HostedImage, MarketSummary, Snapshot,
};
use hokusai_error::{
    AnalysisError, AnalysisErrorKind, HokusaiResult, UploadError, UploadErrorKind,
};
use hokusai_interface::{Broadcaster, HeatmapCapture, ImageHost, MarketAnalyst};
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

/// Shared call counter handle.
pub type Calls = Arc<AtomicU32>;

fn new_calls() -> Calls {
    Arc::new(AtomicU32::new(0))
}

/// Capture stub returning fixed bytes without touching a browser or disk.
pub struct MockCapture {
    bytes: Vec<u8>,
    calls: Calls,
}

impl MockCapture {
    pub fn new(bytes: Vec<u8>) -> (Self, Calls) {
        let calls = new_calls();
        (
            Self {
                bytes,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl HeatmapCapture for MockCapture {
    async fn capture(
        &self,
        _target: &HeatmapTarget,
        _settings: &CaptureSettings,
        path: &Path,
    ) -> HokusaiResult<Snapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Snapshot::new(self.bytes.clone(), path.to_path_buf()))
    }
}

/// Image host stub: either a fixed URL or a malformed-response failure.
pub struct MockHost {
    url: Option<String>,
    calls: Calls,
}

impl MockHost {
    pub fn new_success(url: &str) -> (Self, Calls) {
        let calls = new_calls();
        (
            Self {
                url: Some(url.to_string()),
                calls: calls.clone(),
            },
            calls,
        )
    }

    pub fn new_malformed() -> (Self, Calls) {
        let calls = new_calls();
        (
            Self {
                url: None,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl ImageHost for MockHost {
    async fn publish(&self, _snapshot: &Snapshot) -> HokusaiResult<HostedImage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.url {
            Some(url) => Ok(HostedImage::new(url.clone())),
            None => Err(UploadError::new(UploadErrorKind::MalformedResponse(
                "missing field `url`".to_string(),
            ))
            .into()),
        }
    }
}

/// Analyst stub: fixed summary text or a fixed failure.
pub struct MockAnalyst {
    text: Option<String>,
    calls: Calls,
}

impl MockAnalyst {
    pub fn new_success(text: &str) -> (Self, Calls) {
        let calls = new_calls();
        (
            Self {
                text: Some(text.to_string()),
                calls: calls.clone(),
            },
            calls,
        )
    }

    pub fn new_failing() -> (Self, Calls) {
        let calls = new_calls();
        (
            Self {
                text: None,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl MarketAnalyst for MockAnalyst {
    async fn analyze(&self, _snapshot: &Snapshot) -> HokusaiResult<MarketSummary> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.text {
            Some(text) => Ok(MarketSummary::new(text.clone())),
            None => Err(AnalysisError::new(AnalysisErrorKind::EmptyResponse).into()),
        }
    }
}

/// Broadcaster that records every payload it receives.
pub struct RecordingBroadcaster {
    sent: Arc<Mutex<Vec<Vec<BroadcastMessage>>>>,
}

impl RecordingBroadcaster {
    pub fn new() -> (Self, Arc<Mutex<Vec<Vec<BroadcastMessage>>>>) {
        let sent = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                sent: sent.clone(),
            },
            sent,
        )
    }
}

#[async_trait]
impl Broadcaster for RecordingBroadcaster {
    async fn broadcast(&self, messages: &[BroadcastMessage]) -> HokusaiResult<()> {
        self.sent.lock().unwrap().push(messages.to_vec());
        Ok(())
    }
}
