
//! PS/2 keyboard emulation for a USB/PS/2 dual-mode keyboard.
//!
//! Key events from the matrix scanner are translated to Scan Code Set 2
//! make/break sequences and handed to a PS/2 device link. A mode-select
//! input chooses between the PS/2 path and the normal USB path, and a
//! typematic engine re-sends the make code of a held key.
//!
//! # Reference material
//! * <https://wiki.osdev.org/PS/2_Keyboard>
//! * <http://www.quadibloc.com/comp/scan.htm>

#![cfg_attr(not(test), no_std)]
#![forbid(missing_debug_implementations)]

pub mod config;
pub mod keyboard;
pub mod keycode;
pub mod link;
pub mod mode;
pub mod scancode;
pub mod typematic;

pub use pc_keyboard;

pub use config::Config;
pub use keyboard::{KeyboardDriver, TickStatus};
pub use mode::Mode;
