//! Time units
//!
//! Frequencies come from [`fugit`]; the `.Hz()`, `.kHz()` and `.MHz()`
//! suffix methods are available through [`RateExtU32`].
//!
//! ```rust
//! use duino_spi::time::{self, HertzU32, RateExtU32};
//!
//! let freq_hz: HertzU32 = 2_000_000u32.Hz();
//! let freq_mhz = time::MHz(2);
//!
//! assert_eq!(freq_hz, freq_mhz);
//! ```

#![allow(non_snake_case)]

pub use fugit::{HertzU32, KilohertzU32, MegahertzU32, MillisDurationU32, RateExtU32};

pub const fn Hz(val: u32) -> HertzU32 {
    HertzU32::from_raw(val)
}

pub const fn kHz(val: u32) -> KilohertzU32 {
    KilohertzU32::from_raw(val)
}

pub const fn MHz(val: u32) -> MegahertzU32 {
    MegahertzU32::from_raw(val)
}

pub const fn ms(val: u32) -> MillisDurationU32 {
    MillisDurationU32::from_ticks(val)
}
