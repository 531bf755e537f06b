//! Button press detection with time-based debouncing.
//!
//! Pure logic, no hardware dependencies. Consumes sampled pin levels,
//! produces discrete press events. Fully testable on host.

/// Minimum spacing between accepted press events, in microseconds.
pub const DEBOUNCE_US: i64 = 250_000;

/// Debounced press detector.
///
/// Feed it one sample per loop iteration via [`tick`](Self::tick). A press is
/// accepted when the button reads pressed and more than [`DEBOUNCE_US`] has
/// elapsed since the previous accepted press. Debounce is time-based, not
/// edge-based: a button held down re-fires once per debounce window.
///
/// # Example
///
/// ```
/// use rust_approval_button::button::ButtonMonitor;
///
/// let mut monitor = ButtonMonitor::new();
///
/// assert!(monitor.tick(0, true)); // first press always fires
/// assert!(!monitor.tick(100_000, true)); // 0.1s later: suppressed
/// assert!(monitor.tick(300_000, true)); // 0.3s later: fires again
/// ```
pub struct ButtonMonitor {
    last_press_us: Option<i64>,
}

impl ButtonMonitor {
    /// Create a monitor with no press on record.
    pub const fn new() -> Self {
        Self { last_press_us: None }
    }

    /// Sample the button and decide whether a press event fires.
    ///
    /// # Arguments
    ///
    /// * `now_us` - Current timestamp in microseconds
    /// * `pressed` - Current button level, `true` = pressed
    ///
    /// # Returns
    ///
    /// `true` exactly when a new press event is accepted.
    #[inline]
    pub fn tick(&mut self, now_us: i64, pressed: bool) -> bool {
        if !pressed {
            return false;
        }
        if let Some(last) = self.last_press_us {
            if now_us - last <= DEBOUNCE_US {
                return false;
            }
        }
        self.last_press_us = Some(now_us);
        true
    }

    /// Timestamp of the last accepted press, if any.
    #[inline]
    pub fn last_press_us(&self) -> Option<i64> {
        self.last_press_us
    }
}

impl Default for ButtonMonitor {
    fn default() -> Self {
        Self::new()
    }
}
