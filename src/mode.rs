//! USB/PS/2 output mode selection.

use core::fmt;

/// Level of the mode-select switch input.
pub trait ModeSelect {
    /// `true` when the switch is in the USB position (pin pulled high).
    fn usb_selected(&mut self) -> bool;
}

/// Monotonic millisecond clock.
pub trait Clock {
    fn millis(&mut self) -> u32;

    /// Blocking wait. Only used during startup.
    fn delay_ms(&mut self, ms: u32);
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    Usb,
    Ps2,
}

impl Mode {
    fn from_select_level(usb_selected: bool) -> Self {
        if usb_selected {
            Mode::Usb
        } else {
            Mode::Ps2
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mode::Usb => write!(f, "USB"),
            Mode::Ps2 => write!(f, "PS/2"),
        }
    }
}

/// Tracks the active mode and detects switch edges.
#[derive(Debug)]
pub struct ModeController {
    current: Mode,
}

impl ModeController {
    /// Read the switch, wait `settle_delay_ms` and trust only the second
    /// read.
    pub fn detect<S: ModeSelect, C: Clock>(select: &mut S, clock: &mut C, settle_delay_ms: u32) -> Self {
        let _ = select.usb_selected();
        clock.delay_ms(settle_delay_ms);

        Self {
            current: Mode::from_select_level(select.usb_selected()),
        }
    }

    pub fn current_mode(&self) -> Mode {
        self.current
    }

    /// Re-read the switch. Returns the new mode only when it differs from
    /// the current one.
    ///
    /// Not debounced: any level change is taken as a mode change.
    pub fn poll_for_change<S: ModeSelect>(&mut self, select: &mut S) -> Option<Mode> {
        let mode = Mode::from_select_level(select.usb_selected());

        if mode == self.current {
            None
        } else {
            self.current = mode;
            Some(mode)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use std::collections::VecDeque;

    /// Switch which replays scripted levels, repeating the last one.
    #[derive(Debug)]
    pub struct ScriptedSwitch {
        levels: VecDeque<bool>,
        last: bool,
        pub reads: u32,
    }

    impl ScriptedSwitch {
        pub fn new(levels: &[bool]) -> Self {
            Self {
                levels: levels.iter().copied().collect(),
                last: levels.last().copied().unwrap_or(true),
                reads: 0,
            }
        }

        pub fn set(&mut self, usb_selected: bool) {
            self.levels.clear();
            self.last = usb_selected;
        }
    }

    impl ModeSelect for ScriptedSwitch {
        fn usb_selected(&mut self) -> bool {
            self.reads += 1;
            self.levels.pop_front().unwrap_or(self.last)
        }
    }

    #[derive(Debug, Default)]
    pub struct ManualClock {
        pub now: u32,
        pub delays: Vec<u32>,
    }

    impl Clock for ManualClock {
        fn millis(&mut self) -> u32 {
            self.now
        }

        fn delay_ms(&mut self, ms: u32) {
            self.delays.push(ms);
            self.now = self.now.wrapping_add(ms);
        }
    }

    #[test]
    fn startup_trusts_second_read() {
        let mut clock = ManualClock::default();

        let mut switch = ScriptedSwitch::new(&[true, false]);
        let controller = ModeController::detect(&mut switch, &mut clock, 10);
        assert_eq!(controller.current_mode(), Mode::Ps2);
        assert_eq!(switch.reads, 2);
        assert_eq!(clock.delays, vec![10]);

        let mut switch = ScriptedSwitch::new(&[false, true]);
        let controller = ModeController::detect(&mut switch, &mut clock, 10);
        assert_eq!(controller.current_mode(), Mode::Usb);
    }

    #[test]
    fn reports_edges_only() {
        let mut clock = ManualClock::default();
        let mut switch = ScriptedSwitch::new(&[true]);
        let mut controller = ModeController::detect(&mut switch, &mut clock, 10);

        assert_eq!(controller.poll_for_change(&mut switch), None);
        assert_eq!(controller.poll_for_change(&mut switch), None);

        switch.set(false);
        assert_eq!(controller.poll_for_change(&mut switch), Some(Mode::Ps2));
        assert_eq!(controller.poll_for_change(&mut switch), None);
        assert_eq!(controller.current_mode(), Mode::Ps2);

        switch.set(true);
        assert_eq!(controller.poll_for_change(&mut switch), Some(Mode::Usb));
        assert_eq!(controller.current_mode(), Mode::Usb);
    }

    #[test]
    fn steady_state_change_is_not_debounced() {
        let mut clock = ManualClock::default();
        let mut switch = ScriptedSwitch::new(&[true, true, false, true]);
        let mut controller = ModeController::detect(&mut switch, &mut clock, 10);

        // A single-sample glitch is seen as two mode changes.
        assert_eq!(controller.poll_for_change(&mut switch), Some(Mode::Ps2));
        assert_eq!(controller.poll_for_change(&mut switch), Some(Mode::Usb));
        assert_eq!(clock.delays.len(), 1);
    }

    #[test]
    fn display() {
        assert_eq!(Mode::Usb.to_string(), "USB");
        assert_eq!(Mode::Ps2.to_string(), "PS/2");
    }
}
