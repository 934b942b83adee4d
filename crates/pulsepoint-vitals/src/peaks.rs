//! Bounded log of detected pulse peak timestamps.

use std::collections::VecDeque;

/// Fixed-capacity FIFO of the most recent peak timestamps, in monotonic
/// seconds.
///
/// Invariant: timestamps are strictly increasing. The detector only records
/// a peak after checking its spacing against the newest entry, so a
/// violation here means the caller fed a non-monotonic clock.
#[derive(Debug)]
pub struct PeakLog {
    timestamps: VecDeque<f64>,
    capacity: usize,
}

impl PeakLog {
    /// Creates an empty log with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            timestamps: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records a peak timestamp, evicting the oldest past capacity.
    pub fn record(&mut self, timestamp: f64) {
        debug_assert!(
            self.timestamps.back().map_or(true, |&last| timestamp > last),
            "peak timestamps must be strictly increasing"
        );
        self.timestamps.push_back(timestamp);
        while self.timestamps.len() > self.capacity {
            self.timestamps.pop_front();
        }
    }

    /// Number of retained peaks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Returns `true` if no peaks have been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Timestamp of the most recent peak, if any.
    #[must_use]
    pub fn latest(&self) -> Option<f64> {
        self.timestamps.back().copied()
    }

    /// Mean of the most recent `count` consecutive inter-peak intervals.
    ///
    /// Needs `count + 1` logged peaks; returns `None` with fewer.
    #[must_use]
    pub fn mean_recent_intervals(&self, count: usize) -> Option<f64> {
        if count == 0 || self.timestamps.len() < count + 1 {
            return None;
        }
        let newest: Vec<f64> = self
            .timestamps
            .iter()
            .skip(self.timestamps.len() - (count + 1))
            .copied()
            .collect();
        let total: f64 = newest.windows(2).map(|pair| pair[1] - pair[0]).sum();
        Some(total / count as f64)
    }

    /// Drops all logged peaks.
    pub fn clear(&mut self) {
        self.timestamps.clear();
    }
}
