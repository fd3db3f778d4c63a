//! Render-readiness polling.
//!
//! The heatmap page keeps rendering after its load event fires, so the
//! capture stage polls a readiness probe instead of sleeping a fixed delay.
//! The deadline is a fallback: when it passes, the capture proceeds with
//! whatever the page shows.

use hokusai_error::HokusaiResult;
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Outcome of the readiness wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settle {
    /// The probe reported ready.
    Ready {
        /// Number of probes performed
        polls: u32,
        /// Total time slept before the probe succeeded
        waited: Duration,
    },
    /// The deadline passed without a ready probe; capture proceeds anyway.
    TimedOut {
        /// Number of probes performed
        polls: u32,
        /// Total time slept
        waited: Duration,
    },
}

impl Settle {
    /// Whether the page reported ready before the deadline.
    pub fn is_ready(&self) -> bool {
        matches!(self, Settle::Ready { .. })
    }
}

/// Poll `probe` every `interval` until it reports ready or `max_wait` has
/// elapsed.
///
/// The first probe runs after one interval (the page never renders
/// instantly). Probe errors propagate; a timed-out wait does not.
///
/// # Examples
///
/// ```
/// use hokusai_capture::wait_until_settled;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> hokusai_error::HokusaiResult<()> {
/// let settle = wait_until_settled(
///     || async { Ok(true) },
///     Duration::from_secs(1),
///     Duration::from_millis(10),
/// )
/// .await?;
/// assert!(settle.is_ready());
/// # Ok(())
/// # }
/// ```
pub async fn wait_until_settled<F, Fut>(
    mut probe: F,
    max_wait: Duration,
    interval: Duration,
) -> HokusaiResult<Settle>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = HokusaiResult<bool>>,
{
    let mut polls = 0u32;
    let mut waited = Duration::ZERO;
    loop {
        tokio::time::sleep(interval).await;
        waited += interval;
        polls += 1;
        if probe().await? {
            return Ok(Settle::Ready { polls, waited });
        }
        if waited >= max_wait {
            warn!(
                waited_ms = waited.as_millis() as u64,
                polls, "render wait deadline passed, capturing current state"
            );
            return Ok(Settle::TimedOut { polls, waited });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hokusai_error::{CaptureError, CaptureErrorKind};
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test(start_paused = true)]
    async fn ready_probe_exits_early() -> anyhow::Result<()> {
        let calls = AtomicU32::new(0);
        let settle = wait_until_settled(
            || {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                async move { Ok(n >= 3) }
            },
            Duration::from_secs(15),
            Duration::from_millis(500),
        )
        .await?;

        assert_eq!(
            settle,
            Settle::Ready {
                polls: 3,
                waited: Duration::from_millis(1500),
            }
        );
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_is_a_fallback_not_an_error() -> anyhow::Result<()> {
        let settle = wait_until_settled(
            || async { Ok(false) },
            Duration::from_secs(2),
            Duration::from_millis(500),
        )
        .await?;

        assert_eq!(
            settle,
            Settle::TimedOut {
                polls: 4,
                waited: Duration::from_secs(2),
            }
        );
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn probe_error_propagates() {
        let result = wait_until_settled(
            || async {
                Err(CaptureError::new(CaptureErrorKind::Probe("page crashed".into())).into())
            },
            Duration::from_secs(2),
            Duration::from_millis(500),
        )
        .await;

        assert!(result.is_err());
    }
}
