//! Periodic joystick-style sampling.

use core::convert::Infallible;

use embedded_hal_async::delay::DelayNs;

use crate::config::SamplerConfig;
use crate::data::{Axis, Position};
use crate::driver::Lis3lv02d;
use crate::error::Error;
use crate::interface::Interface;

/// Input-delivery collaborator fed by [`Joystick`].
pub trait InputSink {
    /// Declares the symmetric range of one axis.
    fn set_abs_params(&mut self, axis: Axis, min: i32, max: i32, fuzz: i32, flat: i32);

    /// Delivers one calibrated sample.
    fn report(&mut self, delta: Position);
}

/// Polls the sensor on a fixed interval and reports calibrated deltas.
pub struct Joystick<S> {
    sink: S,
    config: SamplerConfig,
    enabled: bool,
}

impl<S: InputSink> Joystick<S> {
    /// Creates a disabled sampler.
    pub const fn new(sink: S, config: SamplerConfig) -> Self {
        Self {
            sink,
            config,
            enabled: false,
        }
    }

    /// Returns the sampler configuration.
    pub const fn config(&self) -> SamplerConfig {
        self.config
    }

    /// Returns true after a successful [`enable`](Self::enable).
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Calibrates and declares the axis ranges to the sink.
    pub async fn enable<I: Interface>(&mut self, driver: &mut Lis3lv02d<I>) -> Result<(), Error> {
        let max = driver.max_deviation()?;
        driver.calibrate().await?;
        for axis in Axis::ALL {
            self.sink
                .set_abs_params(axis, -max, max, self.config.fuzz, self.config.flat);
        }
        self.enabled = true;
        Ok(())
    }

    /// Stops reporting.
    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Samples once and reports position minus calibration.
    pub async fn tick<I: Interface>(&mut self, driver: &mut Lis3lv02d<I>) -> Result<Position, Error> {
        if !self.enabled {
            return Err(Error::InvalidState);
        }
        let position = driver.read_position().await?;
        let delta = position.offset_by(driver.calibration());
        self.sink.report(delta);
        Ok(delta)
    }

    /// Ticks forever at the configured interval.
    ///
    /// Returns only when a tick fails.
    pub async fn run<I: Interface, D: DelayNs>(
        &mut self,
        driver: &mut Lis3lv02d<I>,
        delay: &mut D,
    ) -> Result<Infallible, Error> {
        loop {
            self.tick(driver).await?;
            delay.delay_ms(self.config.interval_ms).await;
        }
    }

    /// Returns the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the sampler and returns the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
