//! Stateful heart-rate monitor: signal ingest, peak detection, and rate
//! estimation over one PPG intensity stream.

use pulsepoint_core::Sample;

use crate::history::RollingHistory;
use crate::peaks::PeakLog;
use crate::HeartRateConfig;

/// Per-sample detector state.
///
/// The peak gate is a two-state machine: `peak_open` flips to `true` when a
/// rising sample with plausible spacing is logged as a peak, and back to
/// `false` once the signal has fallen at least the hysteresis amount below
/// the value recorded at that peak. Initial state is closed; there is no
/// terminal state.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetectorState {
    /// Value of the previously processed sample.
    pub previous_value: u32,
    /// Whether a peak is currently open.
    pub peak_open: bool,
    /// Intensity recorded when the open peak was logged.
    pub last_peak_value: u32,
    /// Most recently derived rate, before plausibility validation.
    pub current_bpm: f64,
}

/// Online heart-rate estimator fed one raw PPG sample per acquisition tick.
///
/// Owns all pipeline state (rolling history, peak log, detector state);
/// create it once at startup and thread it through the loop. Single-writer
/// by construction -- nothing here needs a lock.
///
/// ```rust
/// use pulsepoint_vitals::{HeartRateConfig, HeartRateMonitor};
///
/// let mut monitor = HeartRateMonitor::new(HeartRateConfig::default());
/// // One tick: 8 200 intensity counts at t = 12.5 s.
/// let reading = monitor.process_reading(8_200, 12.5);
/// assert!(reading.is_none()); // far too little history yet
/// ```
pub struct HeartRateMonitor {
    config: HeartRateConfig,
    history: RollingHistory,
    peaks: PeakLog,
    state: DetectorState,
}

impl HeartRateMonitor {
    /// Creates a monitor with empty history and the peak gate closed.
    #[must_use]
    pub fn new(config: HeartRateConfig) -> Self {
        let history = RollingHistory::new(config.history_capacity, config.rolling_window);
        let peaks = PeakLog::new(config.peak_log_capacity);
        Self {
            config,
            history,
            peaks,
            state: DetectorState::default(),
        }
    }

    /// Creates a monitor with the default sensor calibration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(HeartRateConfig::default())
    }

    /// Ingests one raw intensity reading at the given monotonic time.
    ///
    /// Readings below the no-contact floor are rejected with `None` and
    /// leave all state untouched. Accepted readings are stamped, appended
    /// to the rolling history (evicting the oldest past capacity), and
    /// returned for detection. Mutates the history only.
    pub fn ingest(&mut self, raw_intensity: u32, now_secs: f64) -> Option<Sample> {
        if raw_intensity < self.config.contact_floor {
            return None;
        }
        let sample = Sample::new(raw_intensity, now_secs);
        self.history.push(sample.value);
        Some(sample)
    }

    /// Runs peak detection on one accepted sample.
    ///
    /// Call once per sample returned by [`ingest`](Self::ingest).
    pub fn process_sample(&mut self, sample: Sample) {
        let value = sample.value;

        // The trailing average is computed but consulted only for
        // availability: no peak decision until the window has filled.
        if self.history.trailing_mean().is_none() {
            self.state.previous_value = value;
            return;
        }

        // Close an open peak once the signal has dropped at least the
        // hysteresis amount below it; stops re-triggering on the
        // descending edge of the same pulse.
        if self.state.peak_open
            && self.state.last_peak_value.saturating_sub(value) >= self.config.close_hysteresis
        {
            self.state.peak_open = false;
        }

        // Rising edge with the gate closed: candidate peak.
        if value > self.state.previous_value && !self.state.peak_open {
            match self.peaks.latest() {
                Some(last_peak) => {
                    let gap = sample.timestamp - last_peak;
                    if gap < self.config.min_peak_gap_s {
                        // Faster than any plausible pulse: noise spike.
                        self.state.previous_value = value;
                        return;
                    }
                    if gap <= self.config.max_peak_gap_s {
                        self.open_peak(sample);
                    }
                    // gap > max: candidate silently not logged, state kept.
                }
                None => self.open_peak(sample),
            }
        }

        self.state.previous_value = value;
    }

    /// Logs a peak, opens the gate, and refreshes the derived rate.
    fn open_peak(&mut self, sample: Sample) {
        self.peaks.record(sample.timestamp);
        self.state.peak_open = true;
        self.state.last_peak_value = sample.value;

        if self.peaks.len() >= self.config.min_peaks_for_rate {
            if let Some(mean_interval) =
                self.peaks.mean_recent_intervals(self.config.rate_intervals)
            {
                self.state.current_bpm = 60.0 / mean_interval;
            }
        }
    }

    /// Returns the current rate, rounded to one decimal place, if it lies
    /// inside the plausible band; `None` otherwise ("no reliable reading").
    ///
    /// A suppressed estimate is not discarded: the peak history stays put
    /// and the next derivation may validate.
    #[must_use]
    pub fn current_reading(&self) -> Option<f64> {
        self.config.validate_bpm(self.state.current_bpm)
    }

    /// Convenience for the acquisition loop: ingest, detect, and report in
    /// one call.
    pub fn process_reading(&mut self, raw_intensity: u32, now_secs: f64) -> Option<f64> {
        if let Some(sample) = self.ingest(raw_intensity, now_secs) {
            self.process_sample(sample);
        }
        self.current_reading()
    }

    /// The unvalidated internal rate estimate.
    #[must_use]
    pub fn raw_bpm(&self) -> f64 {
        self.state.current_bpm
    }

    /// Detector state snapshot.
    #[must_use]
    pub fn state(&self) -> &DetectorState {
        &self.state
    }

    /// Number of samples currently in the rolling history.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Number of logged peaks.
    #[must_use]
    pub fn peak_count(&self) -> usize {
        self.peaks.len()
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &HeartRateConfig {
        &self.config
    }

    /// Clears history, peak log, and detector state.
    pub fn reset(&mut self) {
        self.history.clear();
        self.peaks.clear();
        self.state = DetectorState::default();
    }
}
