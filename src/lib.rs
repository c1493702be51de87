//! Arduino-style SPI transfer API over a pluggable vendor HAL.
//!
//! The crate is a thin shim: it maps pins, caches transfer settings and
//! forwards every operation to the four primitives of [`SpiHal`]. Clock
//! programming, DMA and register timing live in the vendor layer behind
//! that trait.
//!
//! ```rust
//! use duino_spi::{PinName, Spi, SpiPins, SpiSettings, BitOrder, DataMode};
//! use duino_spi::time::MHz;
//!
//! # struct VendorSpi;
//! # impl duino_spi::SpiHal for VendorSpi {
//! #     fn init(&mut self, _: &SpiPins, _: duino_spi::time::HertzU32,
//! #             _: duino_spi::settings::Mode, _: BitOrder) {}
//! #     fn transfer(&mut self, _: &mut [u8], _: duino_spi::time::MillisDurationU32,
//! #                 _: bool) -> Result<(), duino_spi::Error> { Ok(()) }
//! #     fn deinit(&mut self) {}
//! #     fn clk_freq(&self, _: &SpiPins) -> duino_spi::time::HertzU32 {
//! #         duino_spi::time::MHz(72).convert()
//! #     }
//! # }
//! let pins = SpiPins::new(PinName::new(11), PinName::new(12), PinName::new(13));
//! let mut spi = Spi::with_pins(VendorSpi, pins);
//!
//! spi.begin();
//! spi.begin_transaction(SpiSettings::new(
//!     MHz(1).convert(),
//!     BitOrder::MsbFirst,
//!     DataMode::Mode0,
//! ));
//! let id = spi.transfer(0x9F)?;
//! spi.end_transaction();
//! # let _ = id;
//! # Ok::<(), duino_spi::Error>(())
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod hal;
pub mod pins;
pub mod settings;
pub mod spi;
pub mod time;

pub use hal::{Error, SpiHal, TRANSFER_TIMEOUT};
pub use pins::{PinName, SpiPins};
pub use settings::{BitOrder, DataMode, SpiSettings};
pub use spi::Spi;

pub use embedded_hal;
pub use fugit;
