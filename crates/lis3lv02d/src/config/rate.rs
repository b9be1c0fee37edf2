use crate::register::ctrl1;

/// Output data rate selected by the CTRL_REG1 decimation bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataRate {
    /// 40 Hz.
    Hz40,
    /// 160 Hz.
    Hz160,
    /// 640 Hz.
    Hz640,
    /// 2560 Hz.
    Hz2560,
}

impl DataRate {
    /// Decodes the rate from a CTRL_REG1 value.
    pub const fn from_ctrl1(ctrl1: u8) -> Self {
        match (ctrl1 & (ctrl1::DF1 | ctrl1::DF0)) >> ctrl1::DF_SHIFT {
            0 => Self::Hz40,
            1 => Self::Hz160,
            2 => Self::Hz640,
            _ => Self::Hz2560,
        }
    }

    /// Returns the rate in Hz.
    pub const fn hz(self) -> u16 {
        match self {
            Self::Hz40 => 40,
            Self::Hz160 => 160,
            Self::Hz640 => 640,
            Self::Hz2560 => 2560,
        }
    }
}
