use crate::register::click_ths_yx;

/// Click (tap) engine settings for the 8-bit LIS302DL.
///
/// The engine is only programmed when `flags` is nonzero; see
/// [`click_cfg`](crate::click_cfg) for the flag bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClickConfig {
    /// CLICK_CFG value (per-axis single/double click enables, latch).
    pub flags: u8,
    /// CLICK_TIMELIMIT value.
    pub time_limit: u8,
    /// CLICK_LATENCY value.
    pub latency: u8,
    /// CLICK_WINDOW value.
    pub window: u8,
    /// X threshold, low nibble used.
    pub thresh_x: u8,
    /// Y threshold, shifted into the high nibble.
    pub thresh_y: u8,
    /// Z threshold, low nibble used.
    pub thresh_z: u8,
}

impl ClickConfig {
    /// Click engine disabled.
    pub const DEFAULT: Self = Self {
        flags: 0,
        time_limit: 0,
        latency: 0,
        window: 0,
        thresh_x: 0,
        thresh_y: 0,
        thresh_z: 0,
    };

    /// Creates a configuration with the given CLICK_CFG flags.
    pub const fn new(flags: u8) -> Self {
        Self {
            flags,
            ..Self::DEFAULT
        }
    }

    /// Sets time limit, latency and window.
    #[must_use]
    pub const fn with_timing(mut self, time_limit: u8, latency: u8, window: u8) -> Self {
        self.time_limit = time_limit;
        self.latency = latency;
        self.window = window;
        self
    }

    /// Sets the per-axis thresholds.
    #[must_use]
    pub const fn with_thresholds(mut self, x: u8, y: u8, z: u8) -> Self {
        self.thresh_x = x;
        self.thresh_y = y;
        self.thresh_z = z;
        self
    }

    /// Returns true when the configuration should be programmed.
    pub const fn is_enabled(self) -> bool {
        self.flags != 0
    }

    pub(crate) const fn ths_yx_value(self) -> u8 {
        (self.thresh_x & click_ths_yx::NIBBLE_MASK) | (self.thresh_y << click_ths_yx::Y_SHIFT)
    }

    pub(crate) const fn ths_z_value(self) -> u8 {
        self.thresh_z & click_ths_yx::NIBBLE_MASK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_pack_into_nibbles() {
        let click = ClickConfig::new(0x15).with_thresholds(0x1A, 0x03, 0xF7);
        assert_eq!(click.ths_yx_value(), 0x3A);
        assert_eq!(click.ths_z_value(), 0x07);
    }

    #[test]
    fn y_threshold_high_bits_are_shifted_out() {
        let click = ClickConfig::new(1).with_thresholds(0, 0x1F, 0);
        assert_eq!(click.ths_yx_value(), 0xF0);
    }

    #[test]
    fn zero_flags_disable_engine() {
        assert!(!ClickConfig::DEFAULT.is_enabled());
        assert!(ClickConfig::new(0x01).is_enabled());
    }
}
