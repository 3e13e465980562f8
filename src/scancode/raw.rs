
/// Bytes which are not scancodes.
#[derive(Debug)]
pub struct Prefix;

impl Prefix {
    pub const EXTENDED: u8 = 0xE0;
    /// Starts Pause/Break. Not generated by the table.
    pub const EXTENDED_2: u8 = 0xE1;
    pub const BREAK: u8 = 0xF0;
}

/// Scan Code Set 2 make codes.
///
/// Break code is `Prefix::BREAK` followed by the make code. Codes sharing
/// a value are told apart on the wire only by `Prefix::EXTENDED`.
#[derive(Debug)]
pub struct Scancode;

impl Scancode {
    pub const A: u8 = 0x1C;
    pub const B: u8 = 0x32;
    pub const C: u8 = 0x21;
    pub const D: u8 = 0x23;
    pub const E: u8 = 0x24;
    pub const F: u8 = 0x2B;
    pub const G: u8 = 0x34;
    pub const H: u8 = 0x33;
    pub const I: u8 = 0x43;
    pub const J: u8 = 0x3B;
    pub const K: u8 = 0x42;
    pub const L: u8 = 0x4B;
    pub const M: u8 = 0x3A;
    pub const N: u8 = 0x31;
    pub const O: u8 = 0x44;
    pub const P: u8 = 0x4D;
    pub const Q: u8 = 0x15;
    pub const R: u8 = 0x2D;
    pub const S: u8 = 0x1B;
    pub const T: u8 = 0x2C;
    pub const U: u8 = 0x3C;
    pub const V: u8 = 0x2A;
    pub const W: u8 = 0x1D;
    pub const X: u8 = 0x22;
    pub const Y: u8 = 0x35;
    pub const Z: u8 = 0x1A;

    pub const KEY_1: u8 = 0x16;
    pub const KEY_2: u8 = 0x1E;
    pub const KEY_3: u8 = 0x26;
    pub const KEY_4: u8 = 0x25;
    pub const KEY_5: u8 = 0x2E;
    pub const KEY_6: u8 = 0x36;
    pub const KEY_7: u8 = 0x3D;
    pub const KEY_8: u8 = 0x3E;
    pub const KEY_9: u8 = 0x46;
    pub const KEY_0: u8 = 0x45;

    pub const F1: u8 = 0x05;
    pub const F2: u8 = 0x06;
    pub const F3: u8 = 0x04;
    pub const F4: u8 = 0x0C;
    pub const F5: u8 = 0x03;
    pub const F6: u8 = 0x0B;
    pub const F7: u8 = 0x83;
    pub const F8: u8 = 0x0A;
    pub const F9: u8 = 0x01;
    pub const F10: u8 = 0x09;
    pub const F11: u8 = 0x78;
    pub const F12: u8 = 0x07;

    // F13-F24 reuse the codes some keyboards send for Shift+F1-F12.
    pub const F13: u8 = 0x08;
    pub const F14: u8 = 0x10;
    pub const F15: u8 = 0x18;
    pub const F16: u8 = 0x20;
    pub const F17: u8 = 0x28;
    pub const F18: u8 = 0x30;
    pub const F19: u8 = 0x38;
    pub const F20: u8 = 0x40;
    pub const F21: u8 = 0x48;
    pub const F22: u8 = 0x50;
    pub const F23: u8 = 0x57;
    pub const F24: u8 = 0x5F;

    pub const GRAVE: u8 = 0x0E;
    pub const MINUS: u8 = 0x4E;
    pub const EQUAL: u8 = 0x55;
    pub const BACKSLASH: u8 = 0x5D;
    pub const LEFT_BRACKET: u8 = 0x54;
    pub const RIGHT_BRACKET: u8 = 0x5B;
    pub const SEMICOLON: u8 = 0x4C;
    pub const QUOTE: u8 = 0x52;
    pub const COMMA: u8 = 0x41;
    pub const DOT: u8 = 0x49;
    pub const SLASH: u8 = 0x4A;

    pub const ESCAPE: u8 = 0x76;
    pub const BACKSPACE: u8 = 0x66;
    pub const TAB: u8 = 0x0D;
    pub const CAPS_LOCK: u8 = 0x58;
    pub const LEFT_SHIFT: u8 = 0x12;
    pub const LEFT_CTRL: u8 = 0x14;
    pub const LEFT_ALT: u8 = 0x11;
    pub const SPACE: u8 = 0x29;
    /// Extended.
    pub const RIGHT_ALT: u8 = 0x11;
    /// Extended.
    pub const RIGHT_CTRL: u8 = 0x14;
    pub const RIGHT_SHIFT: u8 = 0x59;
    pub const ENTER: u8 = 0x5A;
    /// Extended.
    pub const MENU: u8 = 0x2F;

    // Navigation cluster and arrows are extended.
    pub const INSERT: u8 = 0x70;
    pub const HOME: u8 = 0x6C;
    pub const PAGE_UP: u8 = 0x7D;
    pub const DELETE: u8 = 0x71;
    pub const END: u8 = 0x69;
    pub const PAGE_DOWN: u8 = 0x7A;
    pub const UP: u8 = 0x75;
    pub const DOWN: u8 = 0x72;
    pub const LEFT: u8 = 0x6B;
    pub const RIGHT: u8 = 0x74;

    pub const NUM_LOCK: u8 = 0x77;
    /// Extended.
    pub const KP_SLASH: u8 = 0x4A;
    pub const KP_ASTERISK: u8 = 0x7C;
    pub const KP_MINUS: u8 = 0x7B;
    pub const KP_PLUS: u8 = 0x79;
    /// Extended.
    pub const KP_ENTER: u8 = 0x5A;
    pub const KP_DOT: u8 = 0x71;
    pub const KP_0: u8 = 0x70;
    pub const KP_1: u8 = 0x69;
    pub const KP_2: u8 = 0x72;
    pub const KP_3: u8 = 0x7A;
    pub const KP_4: u8 = 0x6B;
    pub const KP_5: u8 = 0x73;
    pub const KP_6: u8 = 0x74;
    pub const KP_7: u8 = 0x6C;
    pub const KP_8: u8 = 0x75;
    pub const KP_9: u8 = 0x7D;

    pub const SCROLL_LOCK: u8 = 0x7E;
    /// Extended. Real keyboards send `E0 12 E0 7C`, only the second half is used.
    pub const PRINT_SCREEN: u8 = 0x7C;

    // Everything below is extended.
    pub const LEFT_GUI: u8 = 0x1F;
    pub const RIGHT_GUI: u8 = 0x27;

    pub const MUTE: u8 = 0x23;
    pub const VOLUME_DOWN: u8 = 0x21;
    pub const VOLUME_UP: u8 = 0x32;
    pub const MEDIA_NEXT: u8 = 0x4D;
    pub const MEDIA_PREV: u8 = 0x15;
    pub const MEDIA_STOP: u8 = 0x3B;
    pub const MEDIA_PLAY: u8 = 0x34;
    pub const MEDIA_SELECT: u8 = 0x50;

    pub const WWW_SEARCH: u8 = 0x10;
    pub const WWW_HOME: u8 = 0x3A;
    pub const WWW_BACK: u8 = 0x38;
    pub const WWW_FORWARD: u8 = 0x30;
    pub const WWW_STOP: u8 = 0x28;
    pub const WWW_REFRESH: u8 = 0x20;
    pub const WWW_FAVORITES: u8 = 0x18;

    pub const APP_MAIL: u8 = 0x48;
    pub const APP_CALCULATOR: u8 = 0x2B;
    pub const APP_MY_COMPUTER: u8 = 0x40;

    pub const POWER: u8 = 0x37;
    pub const SLEEP: u8 = 0x3F;
    pub const WAKE: u8 = 0x5E;

    /// Ro.
    pub const INTERNATIONAL_1: u8 = 0x51;
    /// Katakana/Hiragana.
    pub const INTERNATIONAL_2: u8 = 0x13;
    /// Yen.
    pub const INTERNATIONAL_3: u8 = 0x6A;
    /// Henkan.
    pub const INTERNATIONAL_4: u8 = 0x64;
    /// Muhenkan.
    pub const INTERNATIONAL_5: u8 = 0x67;
    /// Hangul/English.
    pub const LANGUAGE_1: u8 = 0xF2;
    /// Hanja.
    pub const LANGUAGE_2: u8 = 0xF1;
}
