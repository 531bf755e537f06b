//! Device entry point: pin wiring, USB serial bring-up, 10ms poll loop.
//!
//! Everything interesting happens in [`rust_approval_button::Bridge`]; this
//! file only wires hardware to it and ticks it forever.

#[cfg(target_os = "espidf")]
mod usb_serial;

#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::delay::FreeRtos;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::gpio::{PinDriver, Pull};
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::peripherals::Peripherals;
#[cfg(target_os = "espidf")]
use log::info;
#[cfg(target_os = "espidf")]
use rust_approval_button::Bridge;
#[cfg(target_os = "espidf")]
use usb_serial::UsbSerialPort;

/// Loop period; bounds press-detection and command latency.
#[cfg(target_os = "espidf")]
const LOOP_TICK_MS: u32 = 10;

#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    esp_idf_svc::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    info!("{} booting", env!("VERSION_STRING"));

    let peripherals = Peripherals::take()?;

    let led = PinDriver::output(peripherals.pins.gpio4)?;
    let mut button = PinDriver::input(peripherals.pins.gpio9)?;
    button.set_pull(Pull::Up)?;

    // The console stays on UART0; install fails if something else owns
    // the USB Serial/JTAG port
    let port = UsbSerialPort::install()?;

    let mut delay = FreeRtos;
    let mut bridge = Bridge::new(button, led, port);

    bridge.startup_blink(&mut delay)?;
    info!("ready: button=gpio9 led=gpio4 tick={}ms", LOOP_TICK_MS);

    loop {
        bridge.poll(timestamp_us(), &mut delay)?;
        FreeRtos::delay_ms(LOOP_TICK_MS);
    }
}

/// Monotonic microseconds since boot.
#[cfg(target_os = "espidf")]
fn timestamp_us() -> i64 {
    unsafe { esp_idf_svc::sys::esp_timer_get_time() }
}

// The bin target also builds on the host so `cargo test` can link; there is
// no device to run there.
#[cfg(not(target_os = "espidf"))]
fn main() {}
