//! Canonical keycodes produced by the key matrix scanner.
//!
//! Values follow the USB HID keyboard/keypad usage page for the basic keys,
//! with the system, consumer and browser keys placed in the `0xA5..=0xBA`
//! range used by QMK. Every keycode the emulator can translate fits in a
//! `u8`, so anything larger is treated as having no PS/2 equivalent.

/// Raw keycode as delivered by the scanner.
pub type Keycode = u16;

#[derive(Debug)]
pub struct KeyCode;

impl KeyCode {
    pub const NO: Keycode = 0x00;

    pub const A: Keycode = 0x04;
    pub const B: Keycode = 0x05;
    pub const C: Keycode = 0x06;
    pub const D: Keycode = 0x07;
    pub const E: Keycode = 0x08;
    pub const F: Keycode = 0x09;
    pub const G: Keycode = 0x0A;
    pub const H: Keycode = 0x0B;
    pub const I: Keycode = 0x0C;
    pub const J: Keycode = 0x0D;
    pub const K: Keycode = 0x0E;
    pub const L: Keycode = 0x0F;
    pub const M: Keycode = 0x10;
    pub const N: Keycode = 0x11;
    pub const O: Keycode = 0x12;
    pub const P: Keycode = 0x13;
    pub const Q: Keycode = 0x14;
    pub const R: Keycode = 0x15;
    pub const S: Keycode = 0x16;
    pub const T: Keycode = 0x17;
    pub const U: Keycode = 0x18;
    pub const V: Keycode = 0x19;
    pub const W: Keycode = 0x1A;
    pub const X: Keycode = 0x1B;
    pub const Y: Keycode = 0x1C;
    pub const Z: Keycode = 0x1D;

    pub const KEY_1: Keycode = 0x1E;
    pub const KEY_2: Keycode = 0x1F;
    pub const KEY_3: Keycode = 0x20;
    pub const KEY_4: Keycode = 0x21;
    pub const KEY_5: Keycode = 0x22;
    pub const KEY_6: Keycode = 0x23;
    pub const KEY_7: Keycode = 0x24;
    pub const KEY_8: Keycode = 0x25;
    pub const KEY_9: Keycode = 0x26;
    pub const KEY_0: Keycode = 0x27;

    pub const ENTER: Keycode = 0x28;
    pub const ESCAPE: Keycode = 0x29;
    pub const BACKSPACE: Keycode = 0x2A;
    pub const TAB: Keycode = 0x2B;
    pub const SPACE: Keycode = 0x2C;
    pub const MINUS: Keycode = 0x2D;
    pub const EQUAL: Keycode = 0x2E;
    pub const LEFT_BRACKET: Keycode = 0x2F;
    pub const RIGHT_BRACKET: Keycode = 0x30;
    pub const BACKSLASH: Keycode = 0x31;
    /// Non-US `#`. Not translated.
    pub const NONUS_HASH: Keycode = 0x32;
    pub const SEMICOLON: Keycode = 0x33;
    pub const QUOTE: Keycode = 0x34;
    pub const GRAVE: Keycode = 0x35;
    pub const COMMA: Keycode = 0x36;
    pub const DOT: Keycode = 0x37;
    pub const SLASH: Keycode = 0x38;
    pub const CAPS_LOCK: Keycode = 0x39;

    pub const F1: Keycode = 0x3A;
    pub const F2: Keycode = 0x3B;
    pub const F3: Keycode = 0x3C;
    pub const F4: Keycode = 0x3D;
    pub const F5: Keycode = 0x3E;
    pub const F6: Keycode = 0x3F;
    pub const F7: Keycode = 0x40;
    pub const F8: Keycode = 0x41;
    pub const F9: Keycode = 0x42;
    pub const F10: Keycode = 0x43;
    pub const F11: Keycode = 0x44;
    pub const F12: Keycode = 0x45;

    pub const PRINT_SCREEN: Keycode = 0x46;
    pub const SCROLL_LOCK: Keycode = 0x47;
    /// Needs an `E1` sequence. Not translated.
    pub const PAUSE: Keycode = 0x48;
    pub const INSERT: Keycode = 0x49;
    pub const HOME: Keycode = 0x4A;
    pub const PAGE_UP: Keycode = 0x4B;
    pub const DELETE: Keycode = 0x4C;
    pub const END: Keycode = 0x4D;
    pub const PAGE_DOWN: Keycode = 0x4E;
    pub const RIGHT: Keycode = 0x4F;
    pub const LEFT: Keycode = 0x50;
    pub const DOWN: Keycode = 0x51;
    pub const UP: Keycode = 0x52;

    pub const NUM_LOCK: Keycode = 0x53;
    pub const KP_SLASH: Keycode = 0x54;
    pub const KP_ASTERISK: Keycode = 0x55;
    pub const KP_MINUS: Keycode = 0x56;
    pub const KP_PLUS: Keycode = 0x57;
    pub const KP_ENTER: Keycode = 0x58;
    pub const KP_1: Keycode = 0x59;
    pub const KP_2: Keycode = 0x5A;
    pub const KP_3: Keycode = 0x5B;
    pub const KP_4: Keycode = 0x5C;
    pub const KP_5: Keycode = 0x5D;
    pub const KP_6: Keycode = 0x5E;
    pub const KP_7: Keycode = 0x5F;
    pub const KP_8: Keycode = 0x60;
    pub const KP_9: Keycode = 0x61;
    pub const KP_0: Keycode = 0x62;
    pub const KP_DOT: Keycode = 0x63;

    /// Non-US `\`. Not translated.
    pub const NONUS_BACKSLASH: Keycode = 0x64;
    pub const APPLICATION: Keycode = 0x65;

    pub const F13: Keycode = 0x68;
    pub const F14: Keycode = 0x69;
    pub const F15: Keycode = 0x6A;
    pub const F16: Keycode = 0x6B;
    pub const F17: Keycode = 0x6C;
    pub const F18: Keycode = 0x6D;
    pub const F19: Keycode = 0x6E;
    pub const F20: Keycode = 0x6F;
    pub const F21: Keycode = 0x70;
    pub const F22: Keycode = 0x71;
    pub const F23: Keycode = 0x72;
    pub const F24: Keycode = 0x73;

    pub const INTERNATIONAL_1: Keycode = 0x87;
    pub const INTERNATIONAL_2: Keycode = 0x88;
    pub const INTERNATIONAL_3: Keycode = 0x89;
    pub const INTERNATIONAL_4: Keycode = 0x8A;
    pub const INTERNATIONAL_5: Keycode = 0x8B;
    pub const LANGUAGE_1: Keycode = 0x90;
    pub const LANGUAGE_2: Keycode = 0x91;

    pub const SYSTEM_POWER: Keycode = 0xA5;
    pub const SYSTEM_SLEEP: Keycode = 0xA6;
    pub const SYSTEM_WAKE: Keycode = 0xA7;
    pub const AUDIO_MUTE: Keycode = 0xA8;
    pub const AUDIO_VOL_UP: Keycode = 0xA9;
    pub const AUDIO_VOL_DOWN: Keycode = 0xAA;
    pub const MEDIA_NEXT_TRACK: Keycode = 0xAB;
    pub const MEDIA_PREV_TRACK: Keycode = 0xAC;
    pub const MEDIA_STOP: Keycode = 0xAD;
    pub const MEDIA_PLAY_PAUSE: Keycode = 0xAE;
    pub const MEDIA_SELECT: Keycode = 0xAF;
    /// No Scan Code Set 2 equivalent.
    pub const MEDIA_EJECT: Keycode = 0xB0;
    pub const MAIL: Keycode = 0xB1;
    pub const CALCULATOR: Keycode = 0xB2;
    pub const MY_COMPUTER: Keycode = 0xB3;
    pub const WWW_SEARCH: Keycode = 0xB4;
    pub const WWW_HOME: Keycode = 0xB5;
    pub const WWW_BACK: Keycode = 0xB6;
    pub const WWW_FORWARD: Keycode = 0xB7;
    pub const WWW_STOP: Keycode = 0xB8;
    pub const WWW_REFRESH: Keycode = 0xB9;
    pub const WWW_FAVORITES: Keycode = 0xBA;

    pub const LEFT_CTRL: Keycode = 0xE0;
    pub const LEFT_SHIFT: Keycode = 0xE1;
    pub const LEFT_ALT: Keycode = 0xE2;
    pub const LEFT_GUI: Keycode = 0xE3;
    pub const RIGHT_CTRL: Keycode = 0xE4;
    pub const RIGHT_SHIFT: Keycode = 0xE5;
    pub const RIGHT_ALT: Keycode = 0xE6;
    pub const RIGHT_GUI: Keycode = 0xE7;
}
