//! Arduino-style transfer API on top of a [`SpiHal`].
//!
//! The wrapper caches one [`SpiSettings`] value and forwards every call to
//! the vendor layer. `begin_transaction` only reprograms the peripheral
//! when the requested settings differ from the cached ones.

use crate::hal::{Error, SpiHal, TRANSFER_TIMEOUT};
use crate::pins::SpiPins;
use crate::settings::{BitOrder, DataMode, SpiSettings};
use crate::time::HertzU32;
use embedded_hal::spi::{ErrorType, SpiBus};

// Stack buffer for SpiBus::write, which has to copy because the HAL
// transfer primitive works on a single in/out buffer.
const WRITE_CHUNK: usize = 32;

pub struct Spi<H: SpiHal> {
    hal: H,
    pins: SpiPins,
    settings: SpiSettings,
}

impl<H: SpiHal> Spi<H> {
    /// Wrap a vendor layer with the default pin map
    /// ([`SpiPins::default`]). No hardware is touched until
    /// [`begin`](Self::begin) or
    /// [`begin_transaction`](Self::begin_transaction) runs.
    pub fn new(hal: H) -> Self {
        Self::with_pins(hal, SpiPins::default())
    }

    /// Wrap a vendor layer with an explicit pin map. All pins must belong
    /// to the same peripheral instance.
    pub fn with_pins(hal: H, pins: SpiPins) -> Self {
        Self {
            hal,
            pins,
            settings: SpiSettings::default(),
        }
    }

    /// Initialize the peripheral with the default settings.
    pub fn begin(&mut self) {
        self.settings = SpiSettings::default();
        self.reinit();
    }

    /// Configure the peripheral for a transaction, reinitializing only
    /// when `settings` differ from the cached ones.
    pub fn begin_transaction(&mut self, settings: SpiSettings) {
        if self.settings != settings {
            self.settings = settings;
            self.reinit();
        } else {
            // equal settings still update the fields equality ignores
            self.settings = settings;
        }
    }

    /// End the transaction started by
    /// [`begin_transaction`](Self::begin_transaction). Nothing to undo on
    /// a settings-cache shim; kept for API symmetry.
    pub fn end_transaction(&mut self) {}

    /// Deinitialize the peripheral and stop it.
    pub fn end(&mut self) {
        self.hal.deinit();
    }

    /// Configure the bit order: MSB first or LSB first.
    #[deprecated(note = "pass the bit order through begin_transaction")]
    pub fn set_bit_order(&mut self, bit_order: BitOrder) {
        self.settings.set_bit_order(bit_order);
        self.reinit();
    }

    /// Configure the clock polarity and phase.
    #[deprecated(note = "pass the data mode through begin_transaction")]
    pub fn set_data_mode(&mut self, data_mode: DataMode) {
        self.settings.set_data_mode(data_mode);
        self.reinit();
    }

    /// Derive the clock speed from the peripheral input clock.
    ///
    /// `divider` may be 1..=255; 0 restores the default speed.
    #[deprecated(note = "pass the clock speed through begin_transaction")]
    pub fn set_clock_divider(&mut self, divider: u8) {
        if divider == 0 {
            self.settings
                .set_clock_freq(crate::settings::SPEED_CLOCK_DEFAULT);
        } else {
            let clock = self.hal.clk_freq(&self.pins) / divider as u32;
            self.settings.set_clock_freq(clock);
        }
        self.reinit();
    }

    /// Transfer one byte. `begin` or `begin_transaction` must have been
    /// called at least once before.
    pub fn transfer(&mut self, data: u8) -> Result<u8, Error> {
        let mut buf = [data];
        self.hal
            .transfer(&mut buf, TRANSFER_TIMEOUT, self.settings.skip_receive())?;
        Ok(buf[0])
    }

    /// Transfer one 16-bit word. With MSB-first order the high byte goes
    /// on the wire first, so the word is byte-swapped around the transfer.
    pub fn transfer16(&mut self, data: u16) -> Result<u16, Error> {
        let mut buf = match self.settings.bit_order() {
            BitOrder::MsbFirst => data.to_be_bytes(),
            BitOrder::LsbFirst => data.to_le_bytes(),
        };
        self.hal
            .transfer(&mut buf, TRANSFER_TIMEOUT, self.settings.skip_receive())?;
        Ok(match self.settings.bit_order() {
            BitOrder::MsbFirst => u16::from_be_bytes(buf),
            BitOrder::LsbFirst => u16::from_le_bytes(buf),
        })
    }

    /// Transfer several bytes through one buffer, which is overwritten
    /// with the bytes read back. An empty buffer is a no-op.
    pub fn transfer_in_place(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        if buf.is_empty() {
            return Ok(());
        }
        self.hal
            .transfer(buf, TRANSFER_TIMEOUT, self.settings.skip_receive())
    }

    /// Settings currently programmed into the peripheral.
    #[inline]
    pub fn settings(&self) -> &SpiSettings {
        &self.settings
    }

    #[inline]
    pub fn pins(&self) -> &SpiPins {
        &self.pins
    }

    /// Give the vendor layer back.
    pub fn release(self) -> H {
        self.hal
    }

    /// Not implemented.
    pub fn using_interrupt(&mut self, _interrupt_number: i32) {}

    /// Not implemented.
    pub fn not_using_interrupt(&mut self, _interrupt_number: i32) {}

    /// Not implemented.
    pub fn attach_interrupt(&mut self) {}

    /// Not implemented.
    pub fn detach_interrupt(&mut self) {}

    fn reinit(&mut self) {
        self.hal.init(
            &self.pins,
            self.settings.clock_freq(),
            self.settings.data_mode().into(),
            self.settings.bit_order(),
        );
    }

    /// Input clock of the peripheral instance, as reported by the vendor
    /// layer.
    pub fn clk_freq(&self) -> HertzU32 {
        self.hal.clk_freq(&self.pins)
    }
}

impl<H: SpiHal> ErrorType for Spi<H> {
    type Error = Error;
}

// Blocking bus access for embedded-hal drivers, all through the same
// single-buffer HAL transfer primitive.
impl<H: SpiHal> SpiBus for Spi<H> {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        if words.is_empty() {
            return Ok(());
        }
        words.fill(0);
        self.hal.transfer(words, TRANSFER_TIMEOUT, false)
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        let mut chunk = [0u8; WRITE_CHUNK];
        for part in words.chunks(WRITE_CHUNK) {
            let buf = &mut chunk[..part.len()];
            buf.copy_from_slice(part);
            self.hal.transfer(buf, TRANSFER_TIMEOUT, true)?;
        }
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        let common = read.len().min(write.len());
        if common > 0 {
            read[..common].copy_from_slice(&write[..common]);
            self.hal
                .transfer(&mut read[..common], TRANSFER_TIMEOUT, false)?;
        }
        if write.len() > common {
            SpiBus::write(self, &write[common..])?;
        }
        if read.len() > common {
            SpiBus::read(self, &mut read[common..])?;
        }
        Ok(())
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        Spi::transfer_in_place(self, words)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        // transfers are synchronous, nothing is left in flight
        Ok(())
    }
}
