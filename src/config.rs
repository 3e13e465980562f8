
use crate::link::Pin;
use crate::typematic::TypematicConfig;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    pub clock_pin: Pin,
    pub data_pin: Pin,
    /// Wait between the two startup reads of the mode switch.
    pub settle_delay_ms: u32,
    pub typematic: TypematicConfig,
}

impl Config {
    /// Clock on GP16, data on GP17.
    pub const DEFAULT: Config = Config {
        clock_pin: 16,
        data_pin: 17,
        settle_delay_ms: 10,
        typematic: TypematicConfig::DEFAULT,
    };
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
