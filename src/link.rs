//! Device side of the PS/2 bus.
//!
//! Bit-level clock/data signaling, host ACK/resend handling and host
//! commands belong to the bus driver behind `Ps2Link`. This module only
//! decides which bytes go out and in which order.

pub mod loopback;

use crate::scancode::{raw::Prefix, ScancodeEntry};

/// GPIO pin number.
pub type Pin = u8;

/// The link could not accept a byte, for example because the host is
/// inhibiting the bus or the driver's transmit queue is full.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TransmitError;

pub trait Ps2Link {
    /// Queue one byte.
    fn send_make(&mut self, data: u8) -> Result<(), TransmitError>;

    /// Queue `Prefix::BREAK` followed by `data`.
    fn send_break(&mut self, data: u8) -> Result<(), TransmitError>;

    /// (Re)initialize the bus driver on the given pins.
    ///
    /// Must be idempotent.
    fn init(&mut self, clock_pin: Pin, data_pin: Pin);

    /// Service the bus driver. Called once per housekeeping tick while in
    /// PS/2 mode.
    fn task(&mut self) {}
}

/// Send `[E0] <scancode>`.
///
/// Stops at the first failed byte so a scancode is never sent without
/// its prefix.
pub fn send_make_sequence<L: Ps2Link>(link: &mut L, entry: &ScancodeEntry) -> Result<(), TransmitError> {
    if entry.needs_e0_prefix {
        link.send_make(Prefix::EXTENDED)?;
    }

    link.send_make(entry.scancode)
}

/// Send `[E0] F0 <scancode>`.
pub fn send_break_sequence<L: Ps2Link>(link: &mut L, entry: &ScancodeEntry) -> Result<(), TransmitError> {
    if entry.needs_e0_prefix {
        link.send_make(Prefix::EXTENDED)?;
    }

    link.send_break(entry.scancode)
}
