//! Debounce timing tests for the press detector

use rust_approval_button::button::{ButtonMonitor, DEBOUNCE_US};

#[test]
fn test_first_press_accepted() {
    let mut monitor = ButtonMonitor::new();

    // No press on record yet, so the very first sample can fire
    assert!(monitor.tick(0, true));
}

#[test]
fn test_presses_100ms_apart_fire_once() {
    let mut monitor = ButtonMonitor::new();

    // First press at t=0
    assert!(monitor.tick(0, true));
    monitor.tick(50_000, false);

    // Second press 0.1s after the first: inside the window
    assert!(!monitor.tick(100_000, true));
    monitor.tick(150_000, false);

    // Third press 0.3s after the first: outside the window
    assert!(monitor.tick(300_000, true));
}

#[test]
fn test_mechanical_bounce_collapsed() {
    let mut monitor = ButtonMonitor::new();
    let mut events = 0;

    // One physical press with 2ms contact bounce around it
    for &(t, pressed) in &[
        (0, true),
        (2_000, false),
        (4_000, true),
        (6_000, false),
        (8_000, true),
        (20_000, true),
    ] {
        if monitor.tick(t, pressed) {
            events += 1;
        }
    }

    assert_eq!(events, 1);
}

#[test]
fn test_hold_refires_every_window() {
    let mut monitor = ButtonMonitor::new();
    let mut fired_at = Vec::new();

    // Button held down for 600ms, sampled on the 10ms loop grid
    let mut t = 0;
    while t <= 600_000 {
        if monitor.tick(t, true) {
            fired_at.push(t);
        }
        t += 10_000;
    }

    // Re-fires once per window: 0, 260ms, 520ms on this grid
    assert_eq!(fired_at, vec![0, 260_000, 520_000]);
}

#[test]
fn test_inter_event_spacing_invariant() {
    let mut monitor = ButtonMonitor::new();
    let mut fired_at = Vec::new();

    // Mixed traffic: holds, taps, bounces, all on a 10ms grid
    let mut t = 0;
    while t <= 2_000_000 {
        let pressed = match t {
            0..=400_000 => true,             // long hold
            500_000..=510_000 => true,       // quick tap
            520_000..=540_000 => true,       // bounce after the tap
            1_000_000..=1_800_000 => true,   // second long hold
            _ => false,
        };
        if monitor.tick(t, pressed) {
            fired_at.push(t);
        }
        t += 10_000;
    }

    assert!(!fired_at.is_empty());
    for pair in fired_at.windows(2) {
        assert!(
            pair[1] - pair[0] > DEBOUNCE_US,
            "events at {} and {} are too close",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_release_does_not_shorten_window() {
    let mut monitor = ButtonMonitor::new();

    assert!(monitor.tick(0, true));
    monitor.tick(10_000, false);

    // Window is press-to-press regardless of releases in between
    assert!(!monitor.tick(200_000, true));
    assert!(monitor.tick(260_000, true));
}
