//! Contract of the vendor layer the wrapper forwards to.

use crate::fugit::MillisDurationU32;
use crate::pins::SpiPins;
use crate::settings::{BitOrder, Mode};
use crate::time::HertzU32;
use embedded_hal::spi::ErrorKind;

/// Timeout applied to every blocking transfer.
pub const TRANSFER_TIMEOUT: MillisDurationU32 = MillisDurationU32::from_ticks(1000);

/// SPI error
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum Error {
    /// Overrun occurred
    Overrun,
    /// Mode fault occurred
    ModeFault,
    /// CRC error
    Crc,
    ChipSelectFault,
    Busy,
    Timeout,
    Other,
}

impl embedded_hal::spi::Error for Error {
    fn kind(&self) -> ErrorKind {
        match *self {
            Self::Overrun => ErrorKind::Overrun,
            Self::ModeFault => ErrorKind::ModeFault,
            Self::Crc => ErrorKind::FrameFormat,
            Self::ChipSelectFault => ErrorKind::ChipSelectFault,
            Self::Busy | Self::Timeout | Self::Other => ErrorKind::Other,
        }
    }
}

/// The four primitives a vendor SPI layer must provide.
///
/// The wrapper owns no peripheral state of its own; everything it does is
/// a forward into one of these calls. Implementations are expected to be
/// synchronous and blocking.
pub trait SpiHal {
    /// Program the peripheral for master mode with the given pin map,
    /// clock speed, clock mode and bit order. Called again whenever the
    /// cached settings change.
    fn init(&mut self, pins: &SpiPins, clock: HertzU32, mode: Mode, bit_order: BitOrder);

    /// Full-duplex transfer: shift `buf` out and overwrite it with the
    /// words read back. With `skip_receive` the read side is discarded
    /// and `buf` is left untouched.
    fn transfer(
        &mut self,
        buf: &mut [u8],
        timeout: MillisDurationU32,
        skip_receive: bool,
    ) -> Result<(), Error>;

    /// Release the peripheral and its pins.
    fn deinit(&mut self);

    /// Input clock of the peripheral instance serving this pin map.
    fn clk_freq(&self, pins: &SpiPins) -> HertzU32;
}
