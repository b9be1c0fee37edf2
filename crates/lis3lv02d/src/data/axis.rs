//! Axis remapping with sign inversion.

use crate::error::Error;

use super::Position;

/// Returns the raw sample selected by a signed permutation entry.
///
/// `entry` is 1, 2 or 3 (physical X, Y, Z), negated to invert the axis.
/// Entries are validated by [`AxisMap::new`]; any other value yields 0.
pub const fn map_axis(entry: i8, raw: [i32; 3]) -> i32 {
    let index = entry.unsigned_abs();
    if index == 0 || index > 3 {
        return 0;
    }
    let value = raw[(index - 1) as usize];
    if entry < 0 { value.saturating_neg() } else { value }
}

/// Mapping from logical X/Y/Z to a physical axis index and sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisMap {
    x: i8,
    y: i8,
    z: i8,
}

impl AxisMap {
    /// Logical axes equal to physical axes.
    pub const IDENTITY: Self = Self { x: 1, y: 2, z: 3 };

    /// Creates a validated map.
    ///
    /// Every entry must be one of ±1, ±2, ±3 and the three magnitudes must
    /// be distinct.
    pub const fn new(x: i8, y: i8, z: i8) -> Result<Self, Error> {
        let (ax, ay, az) = (x.unsigned_abs(), y.unsigned_abs(), z.unsigned_abs());
        if ax == 0 || ax > 3 || ay == 0 || ay > 3 || az == 0 || az > 3 {
            return Err(Error::InvalidArgument);
        }
        if ax == ay || ay == az || ax == az {
            return Err(Error::InvalidArgument);
        }
        Ok(Self { x, y, z })
    }

    /// Returns the (x, y, z) permutation entries.
    pub const fn entries(self) -> (i8, i8, i8) {
        (self.x, self.y, self.z)
    }

    /// Applies the map to raw samples in physical X, Y, Z order.
    pub const fn apply(self, raw: [i32; 3]) -> Position {
        Position {
            x: map_axis(self.x, raw),
            y: map_axis(self.y, raw),
            z: map_axis(self.z, raw),
        }
    }
}

impl Default for AxisMap {
    fn default() -> Self {
        Self::IDENTITY
    }
}
