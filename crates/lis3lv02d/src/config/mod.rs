//! Configuration helpers for the LIS3.

pub(crate) mod click;
pub(crate) mod rate;

pub use click::ClickConfig;
pub use rate::DataRate;

use crate::data::AxisMap;

/// Platform configuration applied at initialization.
///
/// Click and interrupt settings are write-once; when absent the registers
/// keep their hardware defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Logical to physical axis mapping.
    pub axes: AxisMap,
    /// Click engine settings (LIS302DL only).
    pub click: Option<ClickConfig>,
    /// Raw CTRL_REG3 value. Zero is treated as absent.
    pub irq_cfg: Option<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Identity axes, no click or interrupt configuration.
    pub const DEFAULT: Self = Self {
        axes: AxisMap::IDENTITY,
        click: None,
        irq_cfg: None,
    };

    /// Creates a default configuration.
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the axis mapping.
    #[must_use]
    pub const fn with_axes(mut self, axes: AxisMap) -> Self {
        self.axes = axes;
        self
    }

    /// Sets the click engine configuration.
    #[must_use]
    pub const fn with_click(mut self, click: ClickConfig) -> Self {
        self.click = Some(click);
        self
    }

    /// Sets the raw CTRL_REG3 value.
    #[must_use]
    pub const fn with_irq_cfg(mut self, irq_cfg: u8) -> Self {
        self.irq_cfg = Some(irq_cfg);
        self
    }

    pub(crate) const fn enabled_click(self) -> Option<ClickConfig> {
        match self.click {
            Some(click) if click.is_enabled() => Some(click),
            _ => None,
        }
    }

    pub(crate) const fn enabled_irq_cfg(self) -> Option<u8> {
        match self.irq_cfg {
            Some(value) if value != 0 => Some(value),
            _ => None,
        }
    }
}

/// Periodic sampler settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SamplerConfig {
    /// Poll interval in milliseconds.
    pub interval_ms: u32,
    /// Noise band declared to the input collaborator.
    pub fuzz: i32,
    /// Dead zone declared to the input collaborator.
    pub flat: i32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl SamplerConfig {
    /// 50 ms interval, fuzz and flat of 3.
    pub const DEFAULT: Self = Self {
        interval_ms: 50,
        fuzz: 3,
        flat: 3,
    };

    /// Sets the poll interval.
    #[must_use]
    pub const fn with_interval_ms(mut self, interval_ms: u32) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Sets fuzz and flat.
    #[must_use]
    pub const fn with_noise(mut self, fuzz: i32, flat: i32) -> Self {
        self.fuzz = fuzz;
        self.flat = flat;
        self
    }
}
