use crate::error::Result;
use std::time::SystemTime;

/// A point-in-time reading of the cumulative receive counter.
///
/// Immutable once captured; the monitor loop only ever holds the latest
/// and the previous snapshot.
#[derive(Debug, Clone, Copy)]
pub struct CounterSnapshot {
    /// Capture time of the reading. Not the rate denominator: rate math
    /// divides by the configured refresh interval, so this field serves
    /// Debug output only.
    pub timestamp: SystemTime,
    pub bytes_received: u64,
}

impl CounterSnapshot {
    pub fn new(bytes_received: u64) -> Self {
        Self {
            timestamp: SystemTime::now(),
            bytes_received,
        }
    }
}

/// Source of cumulative received-byte counters.
///
/// `device` selects a single interface, or "all" for the aggregate
/// across every physical interface.
pub trait CounterReader: Send + Sync {
    fn list_devices(&self) -> Result<Vec<String>>;
    fn read_total(&self, device: &str) -> Result<CounterSnapshot>;
    fn is_available(&self) -> bool;
}
