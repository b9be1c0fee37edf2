//! I2C address definitions for the LIS3 family.

/// LIS3 I2C addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lis3Address {
    /// Primary address: 0x1C (SDO = low).
    Primary,
    /// Secondary address: 0x1D (SDO = high, LIS3LV02DL default).
    Secondary,
}

impl Lis3Address {
    /// Returns the 7-bit I2C address.
    pub const fn addr(self) -> u8 {
        match self {
            Self::Primary => 0x1C,
            Self::Secondary => 0x1D,
        }
    }
}
