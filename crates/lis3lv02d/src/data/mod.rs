//! Sensor data readout helpers.

pub(crate) mod axis;
pub(crate) mod decode;

pub use axis::{AxisMap, map_axis};
pub use decode::{decode_double_byte, decode_single_byte};
pub(crate) use decode::{read_axis, read_raw};

use crate::error::Error;
use crate::register::{Register, who_am_i};

/// Physical sensor axis, in hardware register order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Physical X axis (raw index 1).
    X,
    /// Physical Y axis (raw index 2).
    Y,
    /// Physical Z axis (raw index 3).
    Z,
}

impl Axis {
    /// All physical axes in register order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Low output byte register.
    pub const fn low_register(self) -> Register {
        match self {
            Self::X => Register::OutXL,
            Self::Y => Register::OutYL,
            Self::Z => Register::OutZL,
        }
    }

    /// High output byte register. 8-bit parts only populate this one.
    pub const fn high_register(self) -> Register {
        match self {
            Self::X => Register::OutXH,
            Self::Y => Register::OutYH,
            Self::Z => Register::OutZH,
        }
    }
}

/// Output sample format, fixed by the WHO_AM_I signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// One signed byte per axis (LIS302DL).
    SingleByte,
    /// Two bytes per axis, little-endian (LIS3LV02DL).
    DoubleByte,
}

impl Resolution {
    /// Maps a WHO_AM_I value to a resolution.
    pub const fn from_who_am_i(who: u8) -> Result<Self, Error> {
        match who {
            who_am_i::SINGLE_BYTE => Ok(Self::SingleByte),
            who_am_i::DOUBLE_BYTE => Ok(Self::DoubleByte),
            _ => Err(Error::UnknownDevice),
        }
    }

    /// Returns the WHO_AM_I signature for this resolution.
    pub const fn who_am_i(self) -> u8 {
        match self {
            Self::SingleByte => who_am_i::SINGLE_BYTE,
            Self::DoubleByte => who_am_i::DOUBLE_BYTE,
        }
    }

    /// Largest magnitude an axis can report.
    pub const fn max_deviation(self) -> i32 {
        match self {
            Self::SingleByte => 128,
            Self::DoubleByte => 2048,
        }
    }
}

/// Three logical axis values (raw position, calibration or delta).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    /// Logical X axis.
    pub x: i32,
    /// Logical Y axis.
    pub y: i32,
    /// Logical Z axis.
    pub z: i32,
}

impl Position {
    /// Creates a position from its three components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Subtracts a calibration baseline component-wise.
    #[must_use]
    pub const fn offset_by(self, baseline: Self) -> Self {
        Self {
            x: self.x.saturating_sub(baseline.x),
            y: self.y.saturating_sub(baseline.y),
            z: self.z.saturating_sub(baseline.z),
        }
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}
