//! Test doubles for the hardware seams.
//!
//! The bridge only touches hardware through `embedded-hal` pin traits and
//! [`SerialPort`], so these doubles are enough to run every loop scenario on
//! the host: a level-backed pin, a serial port with scripted reads, and a
//! delay that records instead of sleeping. [`FaultyPin`] and [`FaultyPort`]
//! stand in when a test needs a hardware operation to fail.

use core::convert::Infallible;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error, ErrorKind, ErrorType, InputPin, OutputPin, StatefulOutputPin};

use crate::bridge::SerialPort;

/// Pin backed by a plain level. Input reads and output writes share the
/// same `bool`, so one instance serves either role.
#[derive(Debug)]
pub struct MockPin {
    level: bool,
}

impl MockPin {
    /// Create a pin at the given level.
    pub const fn new(level: bool) -> Self {
        Self { level }
    }

    /// Force the level, as the electrical world would.
    pub fn set_level(&mut self, level: bool) {
        self.level = level;
    }

    /// Current level.
    pub fn level(&self) -> bool {
        self.level
    }

    /// Button helper: drive the line low (pull-up wiring).
    pub fn press(&mut self) {
        self.level = false;
    }

    /// Button helper: release the line back high.
    pub fn release(&mut self) {
        self.level = true;
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level)
    }
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level = true;
        Ok(())
    }
}

impl StatefulOutputPin for MockPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.level)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.level)
    }
}

/// Serial port fed from scripted chunks, capturing everything written.
///
/// Each queued chunk is handed out by exactly one `read` call, so tests
/// control chunk boundaries precisely.
#[derive(Debug, Default)]
pub struct ScriptedPort {
    rx: VecDeque<Vec<u8>>,
    tx: Vec<u8>,
}

impl ScriptedPort {
    /// Create a port with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one chunk for a single future read call.
    pub fn feed(&mut self, bytes: &[u8]) {
        self.rx.push_back(bytes.to_vec());
    }

    /// Everything the device has written so far.
    pub fn written(&self) -> &[u8] {
        &self.tx
    }
}

impl SerialPort for ScriptedPort {
    type Error = Infallible;

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        match self.rx.pop_front() {
            Some(mut chunk) => {
                let n = chunk.len().min(buf.len());
                buf[..n].copy_from_slice(&chunk[..n]);
                if n < chunk.len() {
                    // Oversized chunk: hand out the rest on the next read
                    chunk.drain(..n);
                    self.rx.push_front(chunk);
                }
                Ok(n)
            }
            None => Ok(0),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.tx.extend_from_slice(bytes);
        Ok(())
    }
}

/// Delay that records each requested millisecond pause instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingDelay {
    pauses_ms: Vec<u32>,
}

impl RecordingDelay {
    /// Create a delay with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `delay_ms` request so far, in order.
    pub fn pauses_ms(&self) -> &[u32] {
        &self.pauses_ms
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.pauses_ms.push(ms);
    }
}

/// Error returned by the failing doubles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockFault;

impl Error for MockFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Pin double that can simulate a failed GPIO operation.
///
/// A healthy instance behaves like [`MockPin`]; a broken one returns
/// [`MockFault`] from every operation. [`crate::Bridge`] binds both of its
/// pins to one error type, so error-path tests use this double for button
/// and LED alike.
#[derive(Debug)]
pub struct FaultyPin {
    level: bool,
    broken: bool,
}

impl FaultyPin {
    /// Create a working pin at the given level.
    pub const fn healthy(level: bool) -> Self {
        Self { level, broken: false }
    }

    /// Create a pin that fails every operation.
    pub const fn broken() -> Self {
        Self { level: false, broken: true }
    }

    fn fail_if_broken(&self) -> Result<(), MockFault> {
        if self.broken {
            Err(MockFault)
        } else {
            Ok(())
        }
    }
}

impl ErrorType for FaultyPin {
    type Error = MockFault;
}

impl InputPin for FaultyPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.fail_if_broken()?;
        Ok(self.level)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.fail_if_broken()?;
        Ok(!self.level)
    }
}

impl OutputPin for FaultyPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.fail_if_broken()?;
        self.level = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.fail_if_broken()?;
        self.level = true;
        Ok(())
    }
}

impl StatefulOutputPin for FaultyPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        self.fail_if_broken()?;
        Ok(self.level)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        self.fail_if_broken()?;
        Ok(!self.level)
    }
}

/// Serial port whose reads and writes always fail.
#[derive(Debug, Default)]
pub struct FaultyPort;

impl FaultyPort {
    /// Create the failing port.
    pub const fn new() -> Self {
        Self
    }
}

impl SerialPort for FaultyPort {
    type Error = MockFault;

    fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> {
        Err(MockFault)
    }

    fn write(&mut self, _bytes: &[u8]) -> Result<(), Self::Error> {
        Err(MockFault)
    }
}
