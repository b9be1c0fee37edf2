//! LIS3 driver implementation.
//!
//! This module provides the owned driver handle. Every operation goes
//! through one explicitly owned [`Lis3lv02d`] value; there is no global
//! device instance.

use embedded_hal_async::i2c::I2c;
use embedded_hal_async::spi::SpiDevice;

use crate::config::{Config, DataRate};
use crate::data::{Axis, AxisMap, Position, Resolution};
use crate::device::{Calibration, DeviceCore, DeviceState};
use crate::error::Error;
use crate::event::FreefallEvents;
use crate::interface::Interface;
use crate::interface::{I2cConfig, I2cInterface, SpiInterface};

/// LIS3LV02DL / LIS302DL accelerometer driver.
pub struct Lis3lv02d<I> {
    core: DeviceCore<I>,
}

/// I2C type alias for the LIS3 driver.
pub type Lis3lv02dI2c<I2C> = Lis3lv02d<I2cInterface<I2C>>;
/// SPI type alias for the LIS3 driver.
pub type Lis3lv02dSpi<SPI> = Lis3lv02d<SpiInterface<SPI>>;

impl<I2C> Lis3lv02d<I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Creates a new I2C-based driver at the default address.
    pub fn new_i2c(i2c: I2C) -> Self {
        Self::with_i2c_config(i2c, I2cConfig::default())
    }

    /// Creates a new I2C-based driver with a custom bus configuration.
    pub fn with_i2c_config(i2c: I2C, i2c_config: I2cConfig) -> Self {
        Self::new(I2cInterface::new(i2c, i2c_config.address))
    }

    /// Releases the I2C bus, consuming the driver.
    pub fn release_i2c(self) -> I2C {
        self.core.release().release()
    }
}

impl<SPI> Lis3lv02d<SpiInterface<SPI>>
where
    SPI: SpiDevice,
{
    /// Creates a new SPI-based driver.
    pub fn new_spi(spi: SPI) -> Self {
        Self::new(SpiInterface::new(spi))
    }

    /// Releases the SPI bus, consuming the driver.
    pub fn release_spi(self) -> SPI {
        self.core.release().release()
    }
}

impl<I> Lis3lv02d<I>
where
    I: Interface,
{
    /// Creates a driver over any register interface.
    pub const fn new(interface: I) -> Self {
        Self {
            core: DeviceCore::new(interface),
        }
    }

    /// Identifies the sensor, powers it on and applies `config`.
    ///
    /// An unknown signature aborts initialization and leaves the driver
    /// unusable.
    pub async fn init(&mut self, config: &Config) -> Result<Resolution, Error> {
        let resolution = self.core.identify().await?;
        self.core.power_on().await?;
        self.core.apply_config(config).await?;
        Ok(resolution)
    }

    /// Reads WHO_AM_I and fixes the sample resolution.
    pub async fn identify(&mut self) -> Result<Resolution, Error> {
        self.core.identify().await
    }

    /// Powers the sensor on.
    pub async fn power_on(&mut self) -> Result<(), Error> {
        self.core.power_on().await
    }

    /// Powers the sensor off.
    pub async fn power_off(&mut self) -> Result<(), Error> {
        self.core.power_off().await
    }

    /// Applies axis mapping, click and interrupt configuration.
    pub async fn apply_config(&mut self, config: &Config) -> Result<(), Error> {
        self.core.apply_config(config).await
    }

    /// Withdraws the free-fall event device and powers the sensor down for
    /// good.
    ///
    /// Attached readers keep working until dropped; new attaches fail.
    pub async fn teardown(&mut self, events: &FreefallEvents) -> Result<(), Error> {
        events.set_registered(false);
        self.core.teardown().await
    }

    /// Returns the lifecycle state.
    pub const fn state(&self) -> DeviceState {
        self.core.state()
    }

    /// Returns the resolution once identified.
    pub const fn resolution(&self) -> Option<Resolution> {
        self.core.resolution()
    }

    /// Returns the resolution, or [`Error::NotIdentified`] before a
    /// successful identification and after teardown.
    pub fn ensure_identified(&self) -> Result<Resolution, Error> {
        self.core.require_identified()
    }

    /// Returns the largest magnitude an axis can report.
    pub fn max_deviation(&self) -> Result<i32, Error> {
        self.ensure_identified().map(Resolution::max_deviation)
    }

    /// Returns the active axis mapping.
    pub const fn axes(&self) -> AxisMap {
        self.core.axes()
    }

    /// Reads one physical axis. Bus failures read as 0.
    pub async fn read_raw_axis(&mut self, axis: Axis) -> Result<i32, Error> {
        self.core.read_raw_axis(axis).await
    }

    /// Reads the mapped (uncalibrated) position.
    pub async fn read_position(&mut self) -> Result<Position, Error> {
        self.core.read_position().await
    }

    /// Captures the current position as the calibration baseline.
    pub async fn calibrate(&mut self) -> Result<Position, Error> {
        self.core.calibrate().await
    }

    /// Returns the current calibration baseline.
    pub fn calibration(&self) -> Position {
        self.core.calibration().load()
    }

    /// Returns the shared calibration storage.
    pub const fn calibration_handle(&self) -> &Calibration {
        self.core.calibration()
    }

    /// Decodes the output data rate from CTRL_REG1.
    pub async fn data_rate(&mut self) -> Result<DataRate, Error> {
        self.core.data_rate().await
    }

    /// Makes the free-fall event device available to readers.
    pub fn enable_freefall(&self, events: &FreefallEvents) -> Result<(), Error> {
        self.ensure_identified()?;
        events.set_registered(true);
        Ok(())
    }

    /// Withdraws the free-fall event device. Attached readers keep working
    /// until dropped; new attaches fail.
    pub fn disable_freefall(&self, events: &FreefallEvents) {
        events.set_registered(false);
    }

    /// Releases the register interface, consuming the driver.
    pub fn release(self) -> I {
        self.core.release()
    }
}
