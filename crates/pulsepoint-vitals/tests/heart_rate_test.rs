//! Integration tests for the heart-rate estimation pipeline.
//!
//! These tests exercise the public `HeartRateMonitor` API by feeding
//! synthetic PPG intensity streams and verifying the reported BPM,
//! the no-contact floor, the peak-gap debouncing, and the open/close
//! hysteresis.
//!
//! Test matrix:
//! - Insufficient-data gate (fewer than 20 accepted samples)
//! - Convergence on a 1.0 s pulse wave to 60.0 BPM
//! - Known peak-spacing sequence (0.8 / 0.9 / 0.8 s) -> 72.0 BPM
//! - No-contact readings never enter the pipeline
//! - Sub-0.6 s candidates are debounced
//! - Hysteresis holds across shallow dips
//! - Gap beyond the detection window leaves the prior rate in place

use pulsepoint_vitals::{HeartRateConfig, HeartRateMonitor};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const SAMPLE_RATE: f64 = 50.0;

/// Intensity of a pulse waveform with crests spaced `period_s` apart,
/// centred well above the no-contact floor.
fn pulse_wave(t: f64, period_s: f64) -> u32 {
    let phase = 2.0 * std::f64::consts::PI * t / period_s;
    (10_000.0 + 2_000.0 * phase.sin()) as u32
}

/// Feeds `seconds` of the pulse waveform and returns the final reading.
fn feed_wave(monitor: &mut HeartRateMonitor, period_s: f64, seconds: f64) -> Option<f64> {
    let n = (seconds * SAMPLE_RATE) as usize;
    let mut reading = None;
    for i in 0..n {
        let t = i as f64 / SAMPLE_RATE;
        reading = monitor.process_reading(pulse_wave(t, period_s), t);
    }
    reading
}

/// Fills the rolling-average window with flat samples so peak decisions
/// become possible, returning the next free timestamp.
fn warm_up(monitor: &mut HeartRateMonitor) -> f64 {
    let window = monitor.config().rolling_window;
    for i in 0..window {
        let t = i as f64 / SAMPLE_RATE;
        monitor.process_reading(8_000, t);
    }
    window as f64 / SAMPLE_RATE
}

/// One rise-then-fall pulse at `peak_time`.
fn beat(monitor: &mut HeartRateMonitor, peak_time: f64) {
    monitor.process_reading(8_200, peak_time);
    monitor.process_reading(8_100, peak_time + 1.0 / SAMPLE_RATE);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn test_insufficient_history_reports_nothing() {
    let mut monitor = HeartRateMonitor::with_defaults();

    // 19 accepted samples: one short of the rolling-average window.
    for i in 0..19 {
        let t = i as f64 / SAMPLE_RATE;
        let reading = monitor.process_reading(8_000 + i, t);
        assert!(reading.is_none(), "no reading with {} samples", i + 1);
    }
    assert_eq!(monitor.peak_count(), 0, "no peaks before the window fills");
}

#[test]
fn test_one_second_pulse_wave_converges_to_sixty() {
    let mut monitor = HeartRateMonitor::with_defaults();

    let reading = feed_wave(&mut monitor, 1.0, 8.0);

    assert!(
        monitor.peak_count() >= 4,
        "expected at least 4 logged peaks, got {}",
        monitor.peak_count()
    );
    let bpm = reading.expect("steady 1.0 s pulse wave should report a rate");
    assert!(
        (bpm - 60.0).abs() < 0.1,
        "reported {bpm} BPM, expected 60.0"
    );
}

#[test]
fn test_known_peak_spacing_reports_seventy_two() {
    let mut monitor = HeartRateMonitor::with_defaults();
    let t = warm_up(&mut monitor);

    // Peak-to-peak gaps of 0.8, 0.9, 0.8 seconds.
    beat(&mut monitor, t);
    beat(&mut monitor, t + 0.8);
    beat(&mut monitor, t + 1.7);
    beat(&mut monitor, t + 2.5);

    assert_eq!(monitor.peak_count(), 4);
    assert_eq!(monitor.current_reading(), Some(72.0));
}

#[test]
fn test_no_contact_stream_never_reaches_detector() {
    let mut monitor = HeartRateMonitor::with_defaults();

    // A whole minute of finger-off readings, some of them "rising".
    for i in 0..60 {
        let t = i as f64;
        let reading = monitor.process_reading(1_000 + (i % 7) * 500, t);
        assert!(reading.is_none());
    }
    assert_eq!(monitor.history_len(), 0);
    assert_eq!(monitor.peak_count(), 0);
}

#[test]
fn test_finger_off_interruption_keeps_prior_state() {
    let mut monitor = HeartRateMonitor::with_defaults();
    let reading_before = feed_wave(&mut monitor, 1.0, 8.0);
    assert!(reading_before.is_some());
    let history_before = monitor.history_len();
    let peaks_before = monitor.peak_count();

    // Finger lifts off: rejected readings leave everything untouched.
    for i in 0..10 {
        let reading = monitor.process_reading(400, 8.0 + i as f64 * 0.02);
        assert_eq!(reading, reading_before);
    }
    assert_eq!(monitor.history_len(), history_before);
    assert_eq!(monitor.peak_count(), peaks_before);
}

#[test]
fn test_noise_spike_inside_min_gap_is_debounced() {
    let mut monitor = HeartRateMonitor::with_defaults();
    let t = warm_up(&mut monitor);

    beat(&mut monitor, t);
    let peaks_before = monitor.peak_count();

    // A spike 0.2 s after the logged peak: physiologically impossible.
    monitor.process_reading(9_000, t + 0.2);
    assert_eq!(monitor.peak_count(), peaks_before);
    assert!(!monitor.state().peak_open);
}

#[test]
fn test_hysteresis_holds_across_shallow_dips() {
    let mut monitor = HeartRateMonitor::with_defaults();
    let t = warm_up(&mut monitor);

    monitor.process_reading(8_200, t);
    assert!(monitor.state().peak_open);

    // Shallow oscillation around the peak: dips of at most 5 counts.
    for i in 1..=10 {
        let value = if i % 2 == 0 { 8_197 } else { 8_202 };
        monitor.process_reading(value, t + i as f64 * 0.1);
    }
    assert!(
        monitor.state().peak_open,
        "gate must stay open until a 6-count drop"
    );
    assert_eq!(monitor.peak_count(), 1, "shallow rises must not re-trigger");
}

#[test]
fn test_gap_beyond_window_keeps_prior_rate() {
    let mut monitor = HeartRateMonitor::with_defaults();
    let t = warm_up(&mut monitor);
    for i in 0..4 {
        beat(&mut monitor, t + i as f64);
    }
    let reading_before = monitor.current_reading();
    assert_eq!(reading_before, Some(60.0));

    // Sensor stays quiet for 10 seconds, then pulses resume. Candidates
    // now arrive more than 1.5 s after the newest logged peak, so none
    // is accepted and the previously derived rate remains the reading.
    for i in 0..5 {
        beat(&mut monitor, t + 13.0 + i as f64);
    }
    assert_eq!(monitor.peak_count(), 4);
    assert_eq!(monitor.current_reading(), reading_before);
}

#[test]
fn test_custom_band_rejects_default_accepts() {
    // Same pulse train, stricter plausibility band: the reading disappears
    // without disturbing the peak history.
    let strict = HeartRateConfig {
        min_plausible_bpm: 90.0,
        ..HeartRateConfig::default()
    };
    let mut monitor = HeartRateMonitor::new(strict);
    let reading = feed_wave(&mut monitor, 1.0, 8.0);
    assert!(reading.is_none());
    assert!(monitor.peak_count() >= 4);
    assert!((monitor.raw_bpm() - 60.0).abs() < 1.0);
}
