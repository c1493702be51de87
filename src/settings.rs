//! Transfer settings cached by the [`Spi`](crate::Spi) wrapper.

pub use embedded_hal::spi::{MODE_0, MODE_1, MODE_2, MODE_3, Mode, Phase, Polarity};

use crate::fugit::HertzU32;

/// Clock speed used by [`SpiSettings::default`].
pub const SPEED_CLOCK_DEFAULT: HertzU32 = HertzU32::from_raw(4_000_000);

/// Which end of a word goes on the wire first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    LsbFirst,
    #[default]
    MsbFirst,
}

/// Clock polarity and phase, by mode number.
///
/// | Mode | CPOL | CPHA |
/// |------|------|------|
/// | 0    | 0    | 0    |
/// | 1    | 0    | 1    |
/// | 2    | 1    | 0    |
/// | 3    | 1    | 1    |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataMode {
    #[default]
    Mode0,
    Mode1,
    Mode2,
    Mode3,
}

impl From<DataMode> for Mode {
    fn from(mode: DataMode) -> Self {
        match mode {
            DataMode::Mode0 => MODE_0,
            DataMode::Mode1 => MODE_1,
            DataMode::Mode2 => MODE_2,
            DataMode::Mode3 => MODE_3,
        }
    }
}

impl From<Mode> for DataMode {
    fn from(mode: Mode) -> Self {
        match (mode.polarity, mode.phase) {
            (Polarity::IdleLow, Phase::CaptureOnFirstTransition) => Self::Mode0,
            (Polarity::IdleLow, Phase::CaptureOnSecondTransition) => Self::Mode1,
            (Polarity::IdleHigh, Phase::CaptureOnFirstTransition) => Self::Mode2,
            (Polarity::IdleHigh, Phase::CaptureOnSecondTransition) => Self::Mode3,
        }
    }
}

/// Clock speed, bit order and data mode for one transaction.
///
/// Equality only looks at the fields that require reprogramming the
/// peripheral, so a transaction that merely toggles `skip_receive` reuses
/// the current hardware configuration.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiSettings {
    clock: HertzU32,
    bit_order: BitOrder,
    data_mode: DataMode,
    skip_receive: bool,
}

impl SpiSettings {
    pub const fn new(clock: HertzU32, bit_order: BitOrder, data_mode: DataMode) -> Self {
        Self {
            clock,
            bit_order,
            data_mode,
            skip_receive: false,
        }
    }

    #[inline]
    pub const fn clock_freq(&self) -> HertzU32 {
        self.clock
    }

    #[inline]
    pub const fn bit_order(&self) -> BitOrder {
        self.bit_order
    }

    #[inline]
    pub const fn data_mode(&self) -> DataMode {
        self.data_mode
    }

    /// Discard received words instead of waiting for them. Useful with
    /// write-only peripherals that keep MISO unconnected.
    #[inline]
    pub const fn skip_receive(&self) -> bool {
        self.skip_receive
    }

    pub fn set_clock_freq(&mut self, clock: HertzU32) {
        self.clock = clock;
    }

    pub fn set_bit_order(&mut self, bit_order: BitOrder) {
        self.bit_order = bit_order;
    }

    pub fn set_data_mode(&mut self, data_mode: DataMode) {
        self.data_mode = data_mode;
    }

    pub fn set_skip_receive(&mut self, skip: bool) {
        self.skip_receive = skip;
    }

    #[must_use]
    pub const fn with_skip_receive(mut self, skip: bool) -> Self {
        self.skip_receive = skip;
        self
    }
}

impl Default for SpiSettings {
    fn default() -> Self {
        Self::new(SPEED_CLOCK_DEFAULT, BitOrder::MsbFirst, DataMode::Mode0)
    }
}

impl PartialEq for SpiSettings {
    fn eq(&self, other: &Self) -> bool {
        self.clock == other.clock
            && self.bit_order == other.bit_order
            && self.data_mode == other.data_mode
    }
}

impl Eq for SpiSettings {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_mode_round_trip() {
        for mode in [
            DataMode::Mode0,
            DataMode::Mode1,
            DataMode::Mode2,
            DataMode::Mode3,
        ] {
            let hal_mode: Mode = mode.into();
            assert_eq!(mode, DataMode::from(hal_mode));
        }
    }

    #[test]
    fn default_settings() {
        let settings = SpiSettings::default();
        assert_eq!(settings.clock_freq(), SPEED_CLOCK_DEFAULT);
        assert_eq!(settings.bit_order(), BitOrder::MsbFirst);
        assert_eq!(settings.data_mode(), DataMode::Mode0);
        assert!(!settings.skip_receive());
    }

    #[test]
    fn skip_receive_does_not_affect_equality() {
        let a = SpiSettings::default();
        let b = a.with_skip_receive(true);
        assert_eq!(a, b);

        let mut c = a;
        c.set_data_mode(DataMode::Mode3);
        assert_ne!(a, c);
    }
}
