
use crate::config::Config;
use crate::keycode::Keycode;
use crate::link::{send_break_sequence, send_make_sequence, Ps2Link};
use crate::mode::{Clock, Mode, ModeController, ModeSelect};
use crate::scancode::lookup;
use crate::typematic::{Repeat, Typematic, TypematicConfig};

use bitflags::bitflags;
use log::{debug, info, warn};

bitflags! {
    /// What happened during one housekeeping tick.
    pub struct TickStatus: u8 {
        const MODE_CHANGED = 0b0000_0001;
        const LINK_INITIALIZED = 0b0000_0010;
        const REPEAT_SENT = 0b0000_0100;
        const REPEAT_FAILED = 0b0000_1000;
    }
}

/// Owns the emulator state and its collaborators.
///
/// Both entry points, `handle` for key events and `tick` for housekeeping,
/// run to completion on the same polling loop.
#[derive(Debug)]
pub struct KeyboardDriver<L: Ps2Link, S: ModeSelect, C: Clock> {
    link: L,
    select: S,
    clock: C,
    config: Config,
    mode: ModeController,
    typematic: Typematic,
}

impl<L: Ps2Link, S: ModeSelect, C: Clock> KeyboardDriver<L, S, C> {
    /// Detect the startup mode and initialize the PS/2 link if it is
    /// selected.
    pub fn start(config: Config, mut link: L, mut select: S, mut clock: C) -> Self {
        let mode = ModeController::detect(&mut select, &mut clock, config.settle_delay_ms);

        info!("mode: {}", mode.current_mode());

        match mode.current_mode() {
            Mode::Ps2 => {
                link.init(config.clock_pin, config.data_pin);
                info!("PS/2 device initialized (clock={}, data={})", config.clock_pin, config.data_pin);
                info!("typematic: delay={}ms, rate={}ms", config.typematic.delay_ms, config.typematic.rate_ms);
            }
            Mode::Usb => info!("USB mode selected"),
        }

        Self {
            link,
            select,
            clock,
            config,
            mode,
            typematic: Typematic::new(config.typematic),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode.current_mode()
    }

    pub fn is_usb_mode(&self) -> bool {
        self.mode() == Mode::Usb
    }

    pub fn is_ps2_mode(&self) -> bool {
        self.mode() == Mode::Ps2
    }

    /// Process a key event from the scanner.
    ///
    /// Returns `true` when the event should also go through the USB stack,
    /// which happens only in USB mode.
    pub fn handle(&mut self, keycode: Keycode, pressed: bool) -> bool {
        debug!("key: keycode={:#06x}, pressed={}, mode={}", keycode, pressed, self.mode());

        if self.is_usb_mode() {
            return true;
        }

        let entry = lookup(keycode);

        if !entry.is_mapped() {
            debug!("no PS/2 mapping for keycode {:#06x}", keycode);
            return false;
        }

        let prefix = if entry.needs_e0_prefix { "E0 " } else { "" };

        if pressed {
            if let Err(e) = send_make_sequence(&mut self.link, &entry) {
                warn!("make {}{:#04x} not sent: {:?}", prefix, entry.scancode, e);
            }

            let now = self.clock.millis();
            self.typematic.arm(entry, now);
        } else {
            if let Err(e) = send_break_sequence(&mut self.link, &entry) {
                warn!("break {}F0 {:#04x} not sent: {:?}", prefix, entry.scancode, e);
            }

            self.typematic.disarm();
        }

        false
    }

    /// Housekeeping at time `now`.
    ///
    /// Checks the mode switch first. In PS/2 mode the link is then serviced
    /// and a due typematic repeat is sent.
    pub fn tick(&mut self, now: u32) -> TickStatus {
        let mut status = TickStatus::empty();

        if let Some(mode) = self.mode.poll_for_change(&mut self.select) {
            info!("mode switched to {}", mode);
            status.insert(TickStatus::MODE_CHANGED);

            match mode {
                Mode::Ps2 => {
                    self.link.init(self.config.clock_pin, self.config.data_pin);
                    status.insert(TickStatus::LINK_INITIALIZED);
                }
                Mode::Usb => self.typematic.disarm(),
            }
        }

        if self.is_ps2_mode() {
            self.link.task();

            match self.typematic.tick(now, &mut self.link) {
                Repeat::Sent => status.insert(TickStatus::REPEAT_SENT),
                Repeat::Failed(_) => status.insert(TickStatus::REPEAT_FAILED),
                Repeat::Idle | Repeat::NotDue => (),
            }
        }

        status
    }

    /// `tick` with the current clock time.
    pub fn housekeeping(&mut self) -> TickStatus {
        let now = self.clock.millis();
        self.tick(now)
    }

    /// Change typematic delay and rate.
    pub fn configure_typematic(&mut self, delay_ms: u16, rate_ms: u16) {
        self.set_typematic(TypematicConfig { delay_ms, rate_ms });
    }

    /// Apply the parameter byte of a host Set Typematic Rate/Delay command.
    pub fn set_typematic_from_host(&mut self, parameter: u8) {
        self.set_typematic(TypematicConfig::from_host_command(parameter));
    }

    fn set_typematic(&mut self, typematic: TypematicConfig) {
        self.config.typematic = typematic;
        self.typematic.configure(typematic);
        info!("typematic updated: delay={}ms, rate={}ms", typematic.delay_ms, typematic.rate_ms);
    }

    pub fn typematic(&self) -> &Typematic {
        &self.typematic
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    pub fn select_mut(&mut self) -> &mut S {
        &mut self.select
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn exit(self) -> (L, S, C) {
        (self.link, self.select, self.clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycode::KeyCode;
    use crate::link::loopback::Loopback;
    use crate::mode::tests::{ManualClock, ScriptedSwitch};

    type Driver = KeyboardDriver<Loopback<[u8; 32]>, ScriptedSwitch, ManualClock>;

    fn driver(usb_selected: bool) -> Driver {
        KeyboardDriver::start(
            Config::DEFAULT,
            Loopback::new(),
            ScriptedSwitch::new(&[usb_selected]),
            ManualClock::default(),
        )
    }

    fn ps2() -> Driver {
        let mut driver = driver(false);
        driver.clock_mut().now = 0;
        driver
    }

    fn sent(driver: &mut Driver) -> Vec<u8> {
        driver.link_mut().drain().collect()
    }

    #[test]
    fn start_in_ps2_initializes_link() {
        let driver = driver(false);
        assert!(driver.is_ps2_mode());
        assert_eq!(driver.link().init_count(), 1);
        assert_eq!(driver.link().pins(), Some((16, 17)));
    }

    #[test]
    fn start_in_usb_leaves_link_alone() {
        let driver = driver(true);
        assert!(driver.is_usb_mode());
        assert_eq!(driver.link().init_count(), 0);
    }

    #[test]
    fn usb_mode_passes_events_through() {
        let mut driver = driver(true);

        assert!(driver.handle(KeyCode::A, true));
        assert!(driver.handle(KeyCode::A, false));
        assert!(sent(&mut driver).is_empty());
        assert!(!driver.typematic().is_active());
    }

    #[test]
    fn plain_key_make_and_break() {
        let mut driver = ps2();

        assert!(!driver.handle(KeyCode::A, true));
        assert_eq!(sent(&mut driver), vec![0x1C]);

        assert!(!driver.handle(KeyCode::A, false));
        assert_eq!(sent(&mut driver), vec![0xF0, 0x1C]);
    }

    #[test]
    fn extended_key_make_and_break() {
        let mut driver = ps2();

        assert!(!driver.handle(KeyCode::RIGHT_ALT, true));
        assert_eq!(sent(&mut driver), vec![0xE0, 0x11]);

        assert!(!driver.handle(KeyCode::RIGHT_ALT, false));
        assert_eq!(sent(&mut driver), vec![0xE0, 0xF0, 0x11]);
    }

    #[test]
    fn unmapped_key_is_consumed_silently() {
        let mut driver = ps2();

        assert!(!driver.handle(KeyCode::PAUSE, true));
        assert!(!driver.handle(0x7FFF, true));
        assert!(sent(&mut driver).is_empty());
        assert!(!driver.typematic().is_active());
    }

    #[test]
    fn press_arms_and_release_disarms() {
        let mut driver = ps2();

        driver.handle(KeyCode::A, true);
        assert_eq!(driver.typematic().armed_key(), Some(&lookup(KeyCode::A)));

        driver.handle(KeyCode::A, false);
        assert!(!driver.typematic().is_active());
    }

    #[test]
    fn release_of_other_key_disarms() {
        let mut driver = ps2();

        driver.handle(KeyCode::A, true);
        driver.handle(KeyCode::B, false);
        assert!(!driver.typematic().is_active());
        assert_eq!(sent(&mut driver), vec![0x1C, 0xF0, 0x32]);
    }

    #[test]
    fn held_key_repeats_through_tick() {
        let mut driver = ps2();

        driver.handle(KeyCode::A, true);
        sent(&mut driver);

        assert_eq!(driver.tick(499), TickStatus::empty());
        assert!(sent(&mut driver).is_empty());

        assert_eq!(driver.tick(500), TickStatus::REPEAT_SENT);
        assert_eq!(sent(&mut driver), vec![0x1C]);

        assert_eq!(driver.tick(532), TickStatus::empty());
        assert_eq!(driver.tick(533), TickStatus::REPEAT_SENT);

        driver.handle(KeyCode::A, false);
        sent(&mut driver);
        assert_eq!(driver.tick(5000), TickStatus::empty());
        assert!(sent(&mut driver).is_empty());
    }

    #[test]
    fn housekeeping_reads_clock() {
        let mut driver = ps2();

        driver.handle(KeyCode::UP, true);
        sent(&mut driver);

        driver.clock_mut().now = 500;
        assert_eq!(driver.housekeeping(), TickStatus::REPEAT_SENT);
        assert_eq!(sent(&mut driver), vec![0xE0, 0x75]);
    }

    #[test]
    fn link_task_runs_only_in_ps2_mode() {
        let mut ps2 = ps2();
        ps2.tick(0);
        ps2.tick(1);
        assert_eq!(ps2.link().task_count(), 2);

        let mut usb = driver(true);
        usb.tick(0);
        assert_eq!(usb.link().task_count(), 0);
    }

    #[test]
    fn switch_to_usb_disarms_repeat() {
        let mut driver = ps2();

        driver.handle(KeyCode::A, true);
        sent(&mut driver);

        driver.select_mut().set(true);
        assert_eq!(driver.tick(100), TickStatus::MODE_CHANGED);
        assert!(driver.is_usb_mode());
        assert!(!driver.typematic().is_active());

        assert_eq!(driver.tick(1000), TickStatus::empty());
        assert!(sent(&mut driver).is_empty());
        assert!(driver.handle(KeyCode::A, false));
    }

    #[test]
    fn switch_to_ps2_reinitializes_link() {
        let mut driver = driver(true);

        driver.select_mut().set(false);
        assert_eq!(driver.tick(0), TickStatus::MODE_CHANGED | TickStatus::LINK_INITIALIZED);
        assert!(driver.is_ps2_mode());
        assert_eq!(driver.link().init_count(), 1);

        assert_eq!(driver.tick(1), TickStatus::empty());
        assert_eq!(driver.link().init_count(), 1);

        assert!(!driver.handle(KeyCode::A, true));
        assert_eq!(sent(&mut driver), vec![0x1C]);
    }

    #[test]
    fn repeated_reinit_is_harmless() {
        let mut driver = ps2();

        driver.select_mut().set(true);
        driver.tick(0);
        driver.select_mut().set(false);
        driver.tick(1);
        driver.link_mut().init(16, 17);
        assert_eq!(driver.link().init_count(), 3);

        driver.handle(KeyCode::A, true);
        driver.handle(KeyCode::A, false);
        assert_eq!(sent(&mut driver), vec![0x1C, 0xF0, 0x1C]);
    }

    #[test]
    fn failed_make_still_arms() {
        let mut driver = ps2();
        driver.link_mut().set_ready(false);

        assert!(!driver.handle(KeyCode::A, true));
        assert!(driver.typematic().is_active());

        assert_eq!(driver.tick(500), TickStatus::REPEAT_FAILED);

        driver.link_mut().set_ready(true);
        assert_eq!(driver.tick(501), TickStatus::REPEAT_SENT);
        assert_eq!(sent(&mut driver), vec![0x1C]);
    }

    #[test]
    fn press_and_release_are_not_interleaved() {
        let mut driver = ps2();

        driver.handle(KeyCode::LEFT_SHIFT, true);
        driver.handle(KeyCode::KP_ENTER, true);
        driver.handle(KeyCode::KP_ENTER, false);
        driver.handle(KeyCode::LEFT_SHIFT, false);

        assert_eq!(
            sent(&mut driver),
            vec![0x12, 0xE0, 0x5A, 0xE0, 0xF0, 0x5A, 0xF0, 0x12]
        );
    }

    #[test]
    fn emitted_bytes_decode_as_key_events() {
        use pc_keyboard::{KeyCode as Decoded, KeyState};

        let mut driver = ps2();
        driver.handle(KeyCode::ENTER, true);
        driver.handle(KeyCode::ENTER, false);

        let link = driver.link_mut();
        let make = link.next_event().unwrap().unwrap();
        let release = link.next_event().unwrap().unwrap();
        assert_eq!((make.code, make.state), (Decoded::Enter, KeyState::Down));
        assert_eq!((release.code, release.state), (Decoded::Enter, KeyState::Up));
    }

    #[test]
    fn typematic_reconfiguration() {
        let mut driver = ps2();
        assert_eq!(driver.typematic().config(), TypematicConfig::DEFAULT);

        driver.configure_typematic(250, 50);
        driver.handle(KeyCode::A, true);
        sent(&mut driver);

        assert_eq!(driver.tick(249), TickStatus::empty());
        assert_eq!(driver.tick(250), TickStatus::REPEAT_SENT);
        assert_eq!(driver.tick(300), TickStatus::REPEAT_SENT);

        driver.set_typematic_from_host(0x7F);
        assert_eq!(driver.typematic().config(), TypematicConfig { delay_ms: 1000, rate_ms: 500 });
        assert_eq!(driver.tick(350), TickStatus::empty());
        assert_eq!(driver.tick(800), TickStatus::REPEAT_SENT);
    }
}
