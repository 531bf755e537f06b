//! USB Serial/JTAG data channel.
//!
//! Thin wrapper over the IDF driver, exposed through the bridge's
//! [`SerialPort`] seam. The VFS console is never routed onto this port; log
//! output stays on UART0.

use esp_idf_svc::sys::{self, EspError};

use rust_approval_button::SerialPort;

/// RX/TX ring sizes handed to the driver.
const RX_BUFFER_SIZE: u32 = 1024;
const TX_BUFFER_SIZE: u32 = 1024;

/// Installed USB Serial/JTAG driver.
pub struct UsbSerialPort(());

impl UsbSerialPort {
    /// Install the driver.
    ///
    /// Fails if the port is already claimed, e.g. by a console configured
    /// onto USB Serial/JTAG instead of UART0.
    pub fn install() -> Result<Self, EspError> {
        let mut config = sys::usb_serial_jtag_driver_config_t {
            tx_buffer_size: TX_BUFFER_SIZE,
            rx_buffer_size: RX_BUFFER_SIZE,
        };
        let err = unsafe { sys::usb_serial_jtag_driver_install(&mut config as *mut _) };
        if let Some(e) = EspError::from(err) {
            return Err(e);
        }
        Ok(Self(()))
    }
}

impl SerialPort for UsbSerialPort {
    type Error = EspError;

    /// Non-blocking: a zero tick timeout returns whatever the RX ring holds.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let read = unsafe {
            sys::usb_serial_jtag_read_bytes(buf.as_mut_ptr().cast(), buf.len() as u32, 0)
        };
        if read <= 0 {
            return Ok(0);
        }
        Ok(read as usize)
    }

    /// Single attempt; bytes that do not fit the TX ring are dropped.
    fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        unsafe {
            sys::usb_serial_jtag_write_bytes(bytes.as_ptr().cast(), bytes.len(), 0);
        }
        Ok(())
    }
}
