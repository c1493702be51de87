//! Board-level pin identities handed to the HAL on init.

/// Identity of one board pin.
///
/// The wrapper never interprets the value; it only carries it down to
/// [`SpiHal::init`](crate::SpiHal::init), where the vendor layer maps it
/// onto a port/pin pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinName(u16);

impl PinName {
    pub const fn new(pin: u16) -> Self {
        Self(pin)
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl From<u16> for PinName {
    fn from(pin: u16) -> Self {
        Self::new(pin)
    }
}

/// Pin map of one SPI peripheral.
///
/// All pins must belong to the same peripheral instance; see the device
/// datasheet. `ssel` is `None` unless hardware chip select is wanted, in
/// which case no other CS pin may be driven for this bus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiPins {
    pub mosi: PinName,
    pub miso: PinName,
    pub sclk: PinName,
    pub ssel: Option<PinName>,
}

impl SpiPins {
    /// Pin map with software-managed chip select.
    pub const fn new(mosi: PinName, miso: PinName, sclk: PinName) -> Self {
        Self {
            mosi,
            miso,
            sclk,
            ssel: None,
        }
    }

    /// The conventional Arduino pin map: MOSI on 11, MISO on 12, SCLK on
    /// 13, software chip select.
    pub const fn arduino() -> Self {
        Self::new(PinName::new(11), PinName::new(12), PinName::new(13))
    }

    /// Hand the NSS pin to the peripheral for hardware chip select.
    #[must_use]
    pub const fn with_ssel(mut self, ssel: PinName) -> Self {
        self.ssel = Some(ssel);
        self
    }
}

impl Default for SpiPins {
    fn default() -> Self {
        Self::arduino()
    }
}
