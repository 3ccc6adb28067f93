use crate::rate::RateSample;
use std::collections::VecDeque;

/// Rolling window of recent rate samples, used only for the speed graph.
///
/// Capacity is fixed at construction (display width minus UI chrome).
/// Eviction is strictly FIFO, so iteration order is temporal order.
/// Missed ticks simply produce no entry; there is no gap filling.
pub struct HistoryBuffer {
    samples: VecDeque<RateSample>,
    capacity: usize,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, sample: RateSample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn samples(&self) -> impl Iterator<Item = &RateSample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{device::CounterSnapshot, rate};

    fn kb(value: u64) -> RateSample {
        rate::sample(
            &CounterSnapshot::new(0),
            &CounterSnapshot::new(value * 1024),
            1.0,
        )
        .unwrap()
    }

    #[test]
    fn fills_up_to_capacity() {
        let mut history = HistoryBuffer::new(4);
        for i in 0..3 {
            history.push(kb(i));
        }
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn evicts_oldest_first_beyond_capacity() {
        let mut history = HistoryBuffer::new(4);
        for i in 0..10 {
            history.push(kb(i));
        }

        // Length pinned at capacity, containing exactly the most recent
        // samples in chronological order.
        assert_eq!(history.len(), 4);
        let values: Vec<f64> = history.samples().map(|s| s.kb_per_sec()).collect();
        assert_eq!(values, vec![6.0, 7.0, 8.0, 9.0]);
    }
}
