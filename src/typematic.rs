//! Typematic (key repeat) engine.
//!
//! One key at a time: arming a new key replaces the previous one.

use crate::link::{send_make_sequence, Ps2Link, TransmitError};
use crate::scancode::ScancodeEntry;

use log::debug;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TypematicConfig {
    /// Hold time before the first repeat.
    pub delay_ms: u16,
    /// Time between repeats.
    pub rate_ms: u16,
}

impl TypematicConfig {
    /// 500 ms, about 30 repeats per second.
    pub const DEFAULT: TypematicConfig = TypematicConfig {
        delay_ms: 500,
        rate_ms: 33,
    };

    /// Decode the parameter byte of the host's Set Typematic Rate/Delay
    /// (0xF3) command.
    ///
    /// Bits 5-6 select the delay, 250 ms to 1000 ms. Bits 0-4 select the
    /// period `(8 + A) * 2^B * 4.17 ms` where `A` is bits 0-2 and `B`
    /// is bits 3-4, from 33 ms (30 Hz) to 500 ms (2 Hz). Bit 7 is ignored.
    pub fn from_host_command(parameter: u8) -> Self {
        let delay_ms = (u16::from((parameter >> 5) & 0b11) + 1) * 250;

        let a = u32::from(parameter & 0b111);
        let b = u32::from((parameter >> 3) & 0b11);
        let hundredths = ((8 + a) << b) * 417;

        TypematicConfig {
            delay_ms,
            rate_ms: ((hundredths + 50) / 100) as u16,
        }
    }
}

impl Default for TypematicConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Result of one `Typematic::tick`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Repeat {
    /// No key armed.
    Idle,
    /// Delay or rate interval not elapsed yet.
    NotDue,
    Sent,
    /// Retried on a later tick.
    Failed(TransmitError),
}

#[derive(Debug)]
struct Armed {
    key: ScancodeEntry,
    press_time: u32,
    last_repeat: u32,
    delay_elapsed: bool,
}

#[derive(Debug)]
enum State {
    Idle,
    Armed(Armed),
}

#[derive(Debug)]
pub struct Typematic {
    config: TypematicConfig,
    state: State,
}

impl Typematic {
    pub const fn new(config: TypematicConfig) -> Self {
        Self {
            config,
            state: State::Idle,
        }
    }

    pub fn config(&self) -> TypematicConfig {
        self.config
    }

    /// Takes effect on the next `tick`. A delay which has already elapsed
    /// for the armed key is not restarted.
    pub fn configure(&mut self, config: TypematicConfig) {
        self.config = config;
    }

    /// Start repeating `key`. `now` is used as both the press time and the
    /// last repeat time so the first repeat waits for the full delay.
    pub fn arm(&mut self, key: ScancodeEntry, now: u32) {
        if !key.is_mapped() {
            return;
        }

        self.state = State::Armed(Armed {
            key,
            press_time: now,
            last_repeat: now,
            delay_elapsed: false,
        });
    }

    pub fn disarm(&mut self) {
        self.state = State::Idle;
    }

    pub fn is_active(&self) -> bool {
        match self.state {
            State::Armed(_) => true,
            State::Idle => false,
        }
    }

    pub fn armed_key(&self) -> Option<&ScancodeEntry> {
        match &self.state {
            State::Armed(armed) => Some(&armed.key),
            State::Idle => None,
        }
    }

    /// Send a repeat of the armed key if it is due.
    ///
    /// Timestamps are compared with wrapping subtraction, so one wrap of
    /// the millisecond counter is harmless.
    pub fn tick<L: Ps2Link>(&mut self, now: u32, link: &mut L) -> Repeat {
        let config = self.config;

        let armed = match &mut self.state {
            State::Armed(armed) => armed,
            State::Idle => return Repeat::Idle,
        };

        if !armed.delay_elapsed {
            if now.wrapping_sub(armed.press_time) < u32::from(config.delay_ms) {
                return Repeat::NotDue;
            }
            armed.delay_elapsed = true;
        }

        if now.wrapping_sub(armed.last_repeat) < u32::from(config.rate_ms) {
            return Repeat::NotDue;
        }

        match send_make_sequence(link, &armed.key) {
            Ok(()) => {
                armed.last_repeat = now;
                debug!("typematic repeat: {}{:#04x}", if armed.key.needs_e0_prefix { "E0 " } else { "" }, armed.key.scancode);
                Repeat::Sent
            }
            Err(e) => Repeat::Failed(e),
        }
    }
}
