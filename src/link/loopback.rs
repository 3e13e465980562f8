
use super::{Pin, Ps2Link, TransmitError};
use crate::scancode::raw::Prefix;

use core::fmt;

use arraydeque::{Array, ArrayDeque, Saturating};

use pc_keyboard::{layouts, Error, HandleControl, KeyEvent, Keyboard as ScancodeDecoder, ScancodeSet2};

/// `Ps2Link` which keeps the sent bytes instead of clocking them out.
///
/// Useful for running the emulator on a host. Sent bytes can be read back
/// raw with `drain` or as key events with `next_event`.
pub struct Loopback<A: Array<Item = u8>> {
    sent: ArrayDeque<A, Saturating>,
    ready: bool,
    init_count: u32,
    task_count: u32,
    pins: Option<(Pin, Pin)>,
    decoder: ScancodeDecoder<layouts::Us104Key, ScancodeSet2>,
}

impl<A: Array<Item = u8>> fmt::Debug for Loopback<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Loopback {{ queued: {}, ready: {} }}", self.sent.len(), self.ready)
    }
}

impl<A: Array<Item = u8>> Loopback<A> {
    pub fn new() -> Self {
        Self {
            sent: ArrayDeque::new(),
            ready: true,
            init_count: 0,
            task_count: 0,
            pins: None,
            decoder: new_decoder(),
        }
    }

    /// When `false`, every send fails.
    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    pub fn init_count(&self) -> u32 {
        self.init_count
    }

    pub fn task_count(&self) -> u32 {
        self.task_count
    }

    /// Pins from the latest `init`.
    pub fn pins(&self) -> Option<(Pin, Pin)> {
        self.pins
    }

    pub fn pop(&mut self) -> Option<u8> {
        self.sent.pop_front()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = u8> + '_ {
        core::iter::from_fn(move || self.sent.pop_front())
    }

    /// Decode queued bytes until one complete key event is found.
    pub fn next_event(&mut self) -> Result<Option<KeyEvent>, Error> {
        while let Some(data) = self.sent.pop_front() {
            if let Some(event) = self.decoder.add_byte(data)? {
                return Ok(Some(event));
            }
        }

        Ok(None)
    }

    fn space_available(&self, count: usize) -> bool {
        (self.sent.capacity() - self.sent.len()) >= count
    }

    fn push(&mut self, data: &[u8]) -> Result<(), TransmitError> {
        if !self.ready || !self.space_available(data.len()) {
            return Err(TransmitError);
        }

        for byte in data {
            self.sent.push_back(*byte).map_err(|_| TransmitError)?;
        }

        Ok(())
    }
}

impl<A: Array<Item = u8>> Ps2Link for Loopback<A> {
    fn send_make(&mut self, data: u8) -> Result<(), TransmitError> {
        self.push(&[data])
    }

    fn send_break(&mut self, data: u8) -> Result<(), TransmitError> {
        self.push(&[Prefix::BREAK, data])
    }

    fn init(&mut self, clock_pin: Pin, data_pin: Pin) {
        self.sent.clear();
        self.decoder = new_decoder();
        self.pins = Some((clock_pin, data_pin));
        self.init_count += 1;
    }

    fn task(&mut self) {
        self.task_count += 1;
    }
}

fn new_decoder() -> ScancodeDecoder<layouts::Us104Key, ScancodeSet2> {
    ScancodeDecoder::new(layouts::Us104Key, ScancodeSet2, HandleControl::Ignore)
}
