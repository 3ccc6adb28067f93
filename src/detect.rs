use crate::rate::RateSample;

/// Reported download status for one tick.
///
/// `Finished` is transient: it is reported on the single tick where an
/// active download drops below the threshold, then the machine reports
/// `Idle` until a new download starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Active,
    Finished,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Active => "ACTIVE",
            Self::Finished => "FINISHED",
        }
    }
}

/// Outcome of one detector step. `notify` is true exactly once per
/// completed download cycle, on the Active -> Finished edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub status: Status,
    pub notify: bool,
}

/// Thresholded download detector with hysteresis.
///
/// A download starts when the rate rises strictly above the threshold and
/// ends when it falls back to or below it. The internal flags outlive any
/// single tick so a completion is notified at most once, no matter how
/// long the rate stays low afterwards.
pub struct DownloadDetector {
    threshold_kb: f64,
    download_in_progress: bool,
    notified_this_download: bool,
}

impl DownloadDetector {
    /// `threshold_bytes` is the per-second byte rate separating idle from
    /// active traffic; it is compared in KB to match the sampled rate.
    pub fn new(threshold_bytes: u64) -> Self {
        Self {
            threshold_kb: threshold_bytes as f64 / 1024.0,
            download_in_progress: false,
            notified_this_download: false,
        }
    }

    /// Feeds one rate sample through the state machine.
    ///
    /// With auto-detect off the detector reports `Idle` without touching
    /// its internal flags: detection is suspended, not reset, so toggling
    /// it back on continues the same download cycle.
    pub fn observe(&mut self, rate: RateSample, auto_detect: bool) -> Transition {
        if !auto_detect {
            return Transition {
                status: Status::Idle,
                notify: false,
            };
        }

        let rate = rate.kb_per_sec();

        // Strictly greater-than: a rate exactly at the threshold does not
        // count as a download.
        if rate > self.threshold_kb {
            if !self.download_in_progress {
                // Idle -> Active edge starts a fresh notification cycle.
                self.notified_this_download = false;
            }
            self.download_in_progress = true;
            return Transition {
                status: Status::Active,
                notify: false,
            };
        }

        if self.download_in_progress {
            self.download_in_progress = false;
            if !self.notified_this_download {
                self.notified_this_download = true;
                return Transition {
                    status: Status::Finished,
                    notify: true,
                };
            }
            return Transition {
                status: Status::Idle,
                notify: false,
            };
        }

        self.notified_this_download = false;
        Transition {
            status: Status::Idle,
            notify: false,
        }
    }
}
