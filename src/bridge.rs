//! The device-loop context: button in, LED and press events out.
//!
//! [`Bridge`] owns both pins, the serial port, and all loop state. One call
//! to [`poll`](Bridge::poll) is one loop iteration: sample the button, then
//! drain and apply host commands. Hardware enters only through `embedded-hal`
//! pin traits and the [`SerialPort`] seam, so the whole loop body runs on the
//! host against the doubles in [`crate::mock`].

use core::fmt::Debug;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, PinState, StatefulOutputPin};

use crate::button::ButtonMonitor;
use crate::line_buffer::LineBuffer;
use crate::protocol::{Command, PRESS_EVENT};

/// Startup double-blink on/off duration in milliseconds.
pub const STARTUP_BLINK_MS: u32 = 150;

/// Tactile feedback flash duration on an accepted press, in milliseconds.
pub const FEEDBACK_FLASH_MS: u32 = 50;

/// Per-call read size while draining the serial port.
const READ_CHUNK: usize = 64;

/// Byte stream connecting the device to the host.
///
/// Reads must not block: return however many bytes are available right now,
/// zero included. Writes are best-effort single attempts; implementations
/// decide what happens to bytes that do not fit.
pub trait SerialPort {
    /// Error type for port operations.
    type Error: Debug;

    /// Read available bytes into `buf`, returning the count.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Write bytes, single attempt.
    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
}

/// Errors escaping the device loop.
///
/// Generic over the serial port and pin error types. Protocol-level problems
/// (bad UTF-8, unknown commands) never surface here; those lines are dropped
/// inside the loop and nothing is reported to the host.
#[derive(Debug)]
pub enum BridgeError<PortErr, PinErr> {
    /// Serial port operation failed.
    Port(PortErr),
    /// GPIO pin error.
    Pin(PinErr),
}

impl<PortErr: Debug, PinErr: Debug> core::fmt::Display for BridgeError<PortErr, PinErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BridgeError::Port(e) => write!(f, "serial port error: {e:?}"),
            BridgeError::Pin(e) => write!(f, "pin error: {e:?}"),
        }
    }
}

impl<PortErr: Debug, PinErr: Debug> core::error::Error for BridgeError<PortErr, PinErr> {}

/// The approval-button device loop.
///
/// Constructed once at startup with the wired pins and the opened serial
/// port; the caller then ticks it forever. There is exactly one thread of
/// execution and every resource is owned here, so no locking is involved
/// anywhere.
///
/// ## Type Parameters
///
/// * `BTN` - Button pin, pull-up wiring, pressed = low
/// * `LED` - LED pin, on = high; stateful so the feedback flash can restore it
/// * `PORT` - Serial data channel to the host
pub struct Bridge<BTN, LED, PORT> {
    button: BTN,
    led: LED,
    port: PORT,
    monitor: ButtonMonitor,
    rx: LineBuffer,
}

impl<BTN, LED, PORT, PinErr> Bridge<BTN, LED, PORT>
where
    BTN: InputPin<Error = PinErr>,
    LED: StatefulOutputPin<Error = PinErr>,
    PORT: SerialPort,
    PinErr: Debug,
{
    /// Take ownership of the wired pins and the serial port.
    pub fn new(button: BTN, led: LED, port: PORT) -> Self {
        Self {
            button,
            led,
            port,
            monitor: ButtonMonitor::new(),
            rx: LineBuffer::new(),
        }
    }

    /// Boot confirmation blink: LED on 150ms, off 150ms, twice.
    ///
    /// Purely an observable side effect; run it once before the first
    /// [`poll`](Self::poll).
    pub fn startup_blink<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), BridgeError<PORT::Error, PinErr>> {
        for _ in 0..2 {
            self.led.set_high().map_err(BridgeError::Pin)?;
            delay.delay_ms(STARTUP_BLINK_MS);
            self.led.set_low().map_err(BridgeError::Pin)?;
            delay.delay_ms(STARTUP_BLINK_MS);
        }
        Ok(())
    }

    /// Run one loop iteration: press detection, then command processing.
    ///
    /// # Arguments
    ///
    /// * `now_us` - Current monotonic timestamp in microseconds
    /// * `delay` - Delay provider for the feedback flash
    pub fn poll<D: DelayNs>(
        &mut self,
        now_us: i64,
        delay: &mut D,
    ) -> Result<(), BridgeError<PORT::Error, PinErr>> {
        self.check_button(now_us, delay)?;
        self.drain_serial()
    }

    /// Current LED level as last driven.
    pub fn led_is_on(&mut self) -> Result<bool, BridgeError<PORT::Error, PinErr>> {
        self.led.is_set_high().map_err(BridgeError::Pin)
    }

    /// Direct access to the button pin, mainly for host tests.
    pub fn button_mut(&mut self) -> &mut BTN {
        &mut self.button
    }

    /// Direct access to the serial port, mainly for host tests.
    pub fn port_mut(&mut self) -> &mut PORT {
        &mut self.port
    }

    // --- Private methods ---

    fn check_button<D: DelayNs>(
        &mut self,
        now_us: i64,
        delay: &mut D,
    ) -> Result<(), BridgeError<PORT::Error, PinErr>> {
        // Pull-up wiring: pressed reads low
        let pressed = self.button.is_low().map_err(BridgeError::Pin)?;
        if self.monitor.tick(now_us, pressed) {
            log::debug!("press accepted at {}us", now_us);
            self.port.write(PRESS_EVENT).map_err(BridgeError::Port)?;
            self.flash(delay)?;
        }
        Ok(())
    }

    // Tactile feedback: force the LED on briefly, then put back whatever
    // level the host last commanded.
    fn flash<D: DelayNs>(
        &mut self,
        delay: &mut D,
    ) -> Result<(), BridgeError<PORT::Error, PinErr>> {
        let restore = self.led.is_set_high().map_err(BridgeError::Pin)?;
        self.led.set_high().map_err(BridgeError::Pin)?;
        delay.delay_ms(FEEDBACK_FLASH_MS);
        self.led
            .set_state(PinState::from(restore))
            .map_err(BridgeError::Pin)?;
        Ok(())
    }

    fn drain_serial(&mut self) -> Result<(), BridgeError<PORT::Error, PinErr>> {
        let mut chunk = [0u8; READ_CHUNK];
        loop {
            let n = self.port.read(&mut chunk).map_err(BridgeError::Port)?;
            if n == 0 {
                break;
            }
            self.rx.push_bytes(&chunk[..n]);
        }

        while let Some(line) = self.rx.take_line() {
            match Command::from_line(&line) {
                Some(cmd) => {
                    log::debug!("led {}", if cmd.led_on() { "on" } else { "off" });
                    self.led
                        .set_state(PinState::from(cmd.led_on()))
                        .map_err(BridgeError::Pin)?;
                }
                // Unrecognized input: dropped, nothing reported to the host
                None => log::debug!("ignored line ({} bytes)", line.len()),
            }
        }
        Ok(())
    }
}
