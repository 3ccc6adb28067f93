use crate::{
    device::CounterSnapshot,
    error::{DlnotifyError, Result},
};

/// Speeds shown in the UI are capped here; detection and history always
/// see the unclamped value.
pub const DISPLAY_CEILING_KB: f64 = 99999.0;

/// One computed throughput value, in KB/s, for a single tick interval.
/// Never negative: a decreasing counter (interface reset) clamps to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSample(f64);

impl RateSample {
    pub fn kb_per_sec(self) -> f64 {
        self.0
    }

    /// The value handed to the renderer, capped at the display ceiling.
    pub fn display_kb_per_sec(self) -> f64 {
        self.0.min(DISPLAY_CEILING_KB)
    }
}

/// Computes the receive rate between two counter snapshots.
///
/// `interval_secs` is the configured refresh interval. A non-positive
/// interval is a caller contract violation and fails as a configuration
/// error; it never occurs once startup validation has passed.
pub fn sample(
    previous: &CounterSnapshot,
    current: &CounterSnapshot,
    interval_secs: f64,
) -> Result<RateSample> {
    if interval_secs <= 0.0 {
        return Err(DlnotifyError::Config(format!(
            "refresh interval must be positive, got {interval_secs}"
        )));
    }

    let delta = current.bytes_received.saturating_sub(previous.bytes_received);
    let kb_per_sec = (delta as f64 / 1024.0) / interval_secs;

    Ok(RateSample(kb_per_sec))
}
