//! Canonical keycode to Scan Code Set 2 translation.

pub mod raw;

use crate::keycode::{KeyCode, Keycode};

use raw::Scancode;

/// Scancode value reserved for "no PS/2 equivalent". Scan Code Set 2 has
/// no key with make code zero.
pub const UNMAPPED: u8 = 0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScancodeEntry {
    pub keycode: Keycode,
    pub scancode: u8,
    pub needs_e0_prefix: bool,
}

impl ScancodeEntry {
    pub const fn unmapped(keycode: Keycode) -> Self {
        Self {
            keycode,
            scancode: UNMAPPED,
            needs_e0_prefix: false,
        }
    }

    const fn plain(keycode: Keycode, scancode: u8) -> Self {
        Self {
            keycode,
            scancode,
            needs_e0_prefix: false,
        }
    }

    const fn extended(keycode: Keycode, scancode: u8) -> Self {
        Self {
            keycode,
            scancode,
            needs_e0_prefix: true,
        }
    }

    pub fn is_mapped(&self) -> bool {
        self.scancode != UNMAPPED
    }
}

/// Look up the make code of `keycode`.
///
/// Total: keycodes without a PS/2 equivalent return an entry with
/// scancode `UNMAPPED`.
pub fn lookup(keycode: Keycode) -> ScancodeEntry {
    match TABLE.get(keycode as usize) {
        Some(entry) if entry.is_mapped() => *entry,
        _ => ScancodeEntry::unmapped(keycode),
    }
}

const TABLE_SIZE: usize = 256;

static TABLE: [ScancodeEntry; TABLE_SIZE] = build_table(MAPPINGS);

const fn build_table(mappings: &[ScancodeEntry]) -> [ScancodeEntry; TABLE_SIZE] {
    let mut table = [ScancodeEntry::unmapped(KeyCode::NO); TABLE_SIZE];

    let mut i = 0;
    while i < mappings.len() {
        let entry = mappings[i];
        table[entry.keycode as usize] = entry;
        i += 1;
    }

    table
}

use ScancodeEntry as E;

const MAPPINGS: &[ScancodeEntry] = &[
    E::plain(KeyCode::A, Scancode::A),
    E::plain(KeyCode::B, Scancode::B),
    E::plain(KeyCode::C, Scancode::C),
    E::plain(KeyCode::D, Scancode::D),
    E::plain(KeyCode::E, Scancode::E),
    E::plain(KeyCode::F, Scancode::F),
    E::plain(KeyCode::G, Scancode::G),
    E::plain(KeyCode::H, Scancode::H),
    E::plain(KeyCode::I, Scancode::I),
    E::plain(KeyCode::J, Scancode::J),
    E::plain(KeyCode::K, Scancode::K),
    E::plain(KeyCode::L, Scancode::L),
    E::plain(KeyCode::M, Scancode::M),
    E::plain(KeyCode::N, Scancode::N),
    E::plain(KeyCode::O, Scancode::O),
    E::plain(KeyCode::P, Scancode::P),
    E::plain(KeyCode::Q, Scancode::Q),
    E::plain(KeyCode::R, Scancode::R),
    E::plain(KeyCode::S, Scancode::S),
    E::plain(KeyCode::T, Scancode::T),
    E::plain(KeyCode::U, Scancode::U),
    E::plain(KeyCode::V, Scancode::V),
    E::plain(KeyCode::W, Scancode::W),
    E::plain(KeyCode::X, Scancode::X),
    E::plain(KeyCode::Y, Scancode::Y),
    E::plain(KeyCode::Z, Scancode::Z),

    E::plain(KeyCode::KEY_1, Scancode::KEY_1),
    E::plain(KeyCode::KEY_2, Scancode::KEY_2),
    E::plain(KeyCode::KEY_3, Scancode::KEY_3),
    E::plain(KeyCode::KEY_4, Scancode::KEY_4),
    E::plain(KeyCode::KEY_5, Scancode::KEY_5),
    E::plain(KeyCode::KEY_6, Scancode::KEY_6),
    E::plain(KeyCode::KEY_7, Scancode::KEY_7),
    E::plain(KeyCode::KEY_8, Scancode::KEY_8),
    E::plain(KeyCode::KEY_9, Scancode::KEY_9),
    E::plain(KeyCode::KEY_0, Scancode::KEY_0),

    E::plain(KeyCode::F1, Scancode::F1),
    E::plain(KeyCode::F2, Scancode::F2),
    E::plain(KeyCode::F3, Scancode::F3),
    E::plain(KeyCode::F4, Scancode::F4),
    E::plain(KeyCode::F5, Scancode::F5),
    E::plain(KeyCode::F6, Scancode::F6),
    E::plain(KeyCode::F7, Scancode::F7),
    E::plain(KeyCode::F8, Scancode::F8),
    E::plain(KeyCode::F9, Scancode::F9),
    E::plain(KeyCode::F10, Scancode::F10),
    E::plain(KeyCode::F11, Scancode::F11),
    E::plain(KeyCode::F12, Scancode::F12),
    E::plain(KeyCode::F13, Scancode::F13),
    E::plain(KeyCode::F14, Scancode::F14),
    E::plain(KeyCode::F15, Scancode::F15),
    E::plain(KeyCode::F16, Scancode::F16),
    E::plain(KeyCode::F17, Scancode::F17),
    E::plain(KeyCode::F18, Scancode::F18),
    E::plain(KeyCode::F19, Scancode::F19),
    E::plain(KeyCode::F20, Scancode::F20),
    E::plain(KeyCode::F21, Scancode::F21),
    E::plain(KeyCode::F22, Scancode::F22),
    E::plain(KeyCode::F23, Scancode::F23),
    E::plain(KeyCode::F24, Scancode::F24),

    E::plain(KeyCode::GRAVE, Scancode::GRAVE),
    E::plain(KeyCode::MINUS, Scancode::MINUS),
    E::plain(KeyCode::EQUAL, Scancode::EQUAL),
    E::plain(KeyCode::BACKSLASH, Scancode::BACKSLASH),
    E::plain(KeyCode::LEFT_BRACKET, Scancode::LEFT_BRACKET),
    E::plain(KeyCode::RIGHT_BRACKET, Scancode::RIGHT_BRACKET),
    E::plain(KeyCode::SEMICOLON, Scancode::SEMICOLON),
    E::plain(KeyCode::QUOTE, Scancode::QUOTE),
    E::plain(KeyCode::COMMA, Scancode::COMMA),
    E::plain(KeyCode::DOT, Scancode::DOT),
    E::plain(KeyCode::SLASH, Scancode::SLASH),

    E::plain(KeyCode::ESCAPE, Scancode::ESCAPE),
    E::plain(KeyCode::BACKSPACE, Scancode::BACKSPACE),
    E::plain(KeyCode::TAB, Scancode::TAB),
    E::plain(KeyCode::CAPS_LOCK, Scancode::CAPS_LOCK),
    E::plain(KeyCode::LEFT_SHIFT, Scancode::LEFT_SHIFT),
    E::plain(KeyCode::LEFT_CTRL, Scancode::LEFT_CTRL),
    E::plain(KeyCode::LEFT_ALT, Scancode::LEFT_ALT),
    E::plain(KeyCode::SPACE, Scancode::SPACE),
    E::extended(KeyCode::RIGHT_ALT, Scancode::RIGHT_ALT),
    E::extended(KeyCode::RIGHT_CTRL, Scancode::RIGHT_CTRL),
    E::plain(KeyCode::RIGHT_SHIFT, Scancode::RIGHT_SHIFT),
    E::plain(KeyCode::ENTER, Scancode::ENTER),
    E::extended(KeyCode::APPLICATION, Scancode::MENU),

    E::extended(KeyCode::INSERT, Scancode::INSERT),
    E::extended(KeyCode::HOME, Scancode::HOME),
    E::extended(KeyCode::PAGE_UP, Scancode::PAGE_UP),
    E::extended(KeyCode::DELETE, Scancode::DELETE),
    E::extended(KeyCode::END, Scancode::END),
    E::extended(KeyCode::PAGE_DOWN, Scancode::PAGE_DOWN),

    E::extended(KeyCode::UP, Scancode::UP),
    E::extended(KeyCode::DOWN, Scancode::DOWN),
    E::extended(KeyCode::LEFT, Scancode::LEFT),
    E::extended(KeyCode::RIGHT, Scancode::RIGHT),

    E::plain(KeyCode::NUM_LOCK, Scancode::NUM_LOCK),
    E::extended(KeyCode::KP_SLASH, Scancode::KP_SLASH),
    E::plain(KeyCode::KP_ASTERISK, Scancode::KP_ASTERISK),
    E::plain(KeyCode::KP_MINUS, Scancode::KP_MINUS),
    E::plain(KeyCode::KP_PLUS, Scancode::KP_PLUS),
    E::extended(KeyCode::KP_ENTER, Scancode::KP_ENTER),
    E::plain(KeyCode::KP_DOT, Scancode::KP_DOT),
    E::plain(KeyCode::KP_0, Scancode::KP_0),
    E::plain(KeyCode::KP_1, Scancode::KP_1),
    E::plain(KeyCode::KP_2, Scancode::KP_2),
    E::plain(KeyCode::KP_3, Scancode::KP_3),
    E::plain(KeyCode::KP_4, Scancode::KP_4),
    E::plain(KeyCode::KP_5, Scancode::KP_5),
    E::plain(KeyCode::KP_6, Scancode::KP_6),
    E::plain(KeyCode::KP_7, Scancode::KP_7),
    E::plain(KeyCode::KP_8, Scancode::KP_8),
    E::plain(KeyCode::KP_9, Scancode::KP_9),

    E::plain(KeyCode::SCROLL_LOCK, Scancode::SCROLL_LOCK),
    E::extended(KeyCode::PRINT_SCREEN, Scancode::PRINT_SCREEN),

    E::extended(KeyCode::LEFT_GUI, Scancode::LEFT_GUI),
    E::extended(KeyCode::RIGHT_GUI, Scancode::RIGHT_GUI),

    E::extended(KeyCode::AUDIO_MUTE, Scancode::MUTE),
    E::extended(KeyCode::AUDIO_VOL_DOWN, Scancode::VOLUME_DOWN),
    E::extended(KeyCode::AUDIO_VOL_UP, Scancode::VOLUME_UP),
    E::extended(KeyCode::MEDIA_NEXT_TRACK, Scancode::MEDIA_NEXT),
    E::extended(KeyCode::MEDIA_PREV_TRACK, Scancode::MEDIA_PREV),
    E::extended(KeyCode::MEDIA_STOP, Scancode::MEDIA_STOP),
    E::extended(KeyCode::MEDIA_PLAY_PAUSE, Scancode::MEDIA_PLAY),
    E::extended(KeyCode::MEDIA_SELECT, Scancode::MEDIA_SELECT),

    E::extended(KeyCode::WWW_SEARCH, Scancode::WWW_SEARCH),
    E::extended(KeyCode::WWW_HOME, Scancode::WWW_HOME),
    E::extended(KeyCode::WWW_BACK, Scancode::WWW_BACK),
    E::extended(KeyCode::WWW_FORWARD, Scancode::WWW_FORWARD),
    E::extended(KeyCode::WWW_STOP, Scancode::WWW_STOP),
    E::extended(KeyCode::WWW_REFRESH, Scancode::WWW_REFRESH),
    E::extended(KeyCode::WWW_FAVORITES, Scancode::WWW_FAVORITES),

    E::extended(KeyCode::MAIL, Scancode::APP_MAIL),
    E::extended(KeyCode::CALCULATOR, Scancode::APP_CALCULATOR),
    E::extended(KeyCode::MY_COMPUTER, Scancode::APP_MY_COMPUTER),

    E::extended(KeyCode::SYSTEM_POWER, Scancode::POWER),
    E::extended(KeyCode::SYSTEM_SLEEP, Scancode::SLEEP),
    E::extended(KeyCode::SYSTEM_WAKE, Scancode::WAKE),

    E::plain(KeyCode::INTERNATIONAL_1, Scancode::INTERNATIONAL_1),
    E::plain(KeyCode::INTERNATIONAL_2, Scancode::INTERNATIONAL_2),
    E::plain(KeyCode::INTERNATIONAL_3, Scancode::INTERNATIONAL_3),
    E::plain(KeyCode::INTERNATIONAL_4, Scancode::INTERNATIONAL_4),
    E::plain(KeyCode::INTERNATIONAL_5, Scancode::INTERNATIONAL_5),
    E::plain(KeyCode::LANGUAGE_1, Scancode::LANGUAGE_1),
    E::plain(KeyCode::LANGUAGE_2, Scancode::LANGUAGE_2),
];
