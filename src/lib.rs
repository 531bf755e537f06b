//! # ApprovalButton
//!
//! Firmware logic for a one-button approval device: it emits `PRESS\n` to a
//! host over USB serial and obeys `ON`/`OFF` LED commands in return.
//!
//! ## Architecture
//!
//! Everything runs in one polling loop with no concurrency. [`Bridge`] is
//! the explicit loop context owning pins, port, and state:
//! - [`button`]: time-based press debouncing
//! - [`line_buffer`] + [`protocol`]: newline-delimited command reassembly
//! - [`bridge`]: composition, startup blink, one-iteration `poll`
//!
//! Hardware enters only through `embedded-hal` pins and the [`SerialPort`]
//! seam, so the library builds and tests on the host; device wiring lives in
//! `src/main.rs`.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod button;
pub mod line_buffer;
pub mod protocol;
pub mod bridge;
pub mod mock;

pub use bridge::{Bridge, BridgeError, SerialPort};
pub use button::ButtonMonitor;
pub use line_buffer::LineBuffer;
pub use protocol::Command;
