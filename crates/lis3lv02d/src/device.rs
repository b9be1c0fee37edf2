//! Device core operations for the LIS3.

use portable_atomic::{AtomicI32, Ordering};

use crate::config::{ClickConfig, Config, DataRate};
use crate::data::{Axis, AxisMap, Position, Resolution, read_axis, read_raw};
use crate::error::Error;
use crate::interface::Interface;
use crate::register::{Register, ctrl2};

/// Lifecycle state of the sensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceState {
    /// Not identified yet, or identification failed.
    Uninitialized,
    /// Signature read, resolution fixed.
    Identified,
    /// Powered on and sampling.
    Powered,
    /// Powered down after having been powered on.
    PoweredOff,
    /// Shut down for good.
    TornDown,
}

/// Calibration baseline shared between calibration capture and sampling.
///
/// Updates are per-axis; a reader racing a capture may see a mix of old
/// and new axes. The last capture wins.
#[derive(Debug, Default)]
pub struct Calibration {
    x: AtomicI32,
    y: AtomicI32,
    z: AtomicI32,
}

impl Calibration {
    /// Creates a zero baseline.
    pub const fn new() -> Self {
        Self {
            x: AtomicI32::new(0),
            y: AtomicI32::new(0),
            z: AtomicI32::new(0),
        }
    }

    /// Returns the current baseline.
    pub fn load(&self) -> Position {
        Position {
            x: self.x.load(Ordering::Relaxed),
            y: self.y.load(Ordering::Relaxed),
            z: self.z.load(Ordering::Relaxed),
        }
    }

    /// Replaces the baseline.
    pub fn store(&self, position: Position) {
        self.x.store(position.x, Ordering::Relaxed);
        self.y.store(position.y, Ordering::Relaxed);
        self.z.store(position.z, Ordering::Relaxed);
    }
}

pub(crate) struct DeviceCore<I> {
    interface: I,
    state: DeviceState,
    resolution: Option<Resolution>,
    axes: AxisMap,
    calibration: Calibration,
}

impl<I> DeviceCore<I>
where
    I: Interface,
{
    pub(crate) const fn new(interface: I) -> Self {
        Self {
            interface,
            state: DeviceState::Uninitialized,
            resolution: None,
            axes: AxisMap::IDENTITY,
            calibration: Calibration::new(),
        }
    }

    pub(crate) const fn state(&self) -> DeviceState {
        self.state
    }

    pub(crate) const fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }

    pub(crate) const fn axes(&self) -> AxisMap {
        self.axes
    }

    pub(crate) const fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Returns the resolution if the device may be driven.
    pub(crate) fn require_identified(&self) -> Result<Resolution, Error> {
        match (self.state, self.resolution) {
            (DeviceState::Uninitialized | DeviceState::TornDown, _) | (_, None) => {
                Err(Error::NotIdentified)
            }
            (_, Some(resolution)) => Ok(resolution),
        }
    }

    /// Reads WHO_AM_I and fixes the resolution.
    ///
    /// Once identified the resolution never changes; later calls return it
    /// without touching the bus.
    pub(crate) async fn identify(&mut self) -> Result<Resolution, Error> {
        match self.state {
            DeviceState::TornDown => return Err(Error::NotIdentified),
            DeviceState::Uninitialized => {}
            _ => return self.require_identified(),
        }
        let who = self.interface.read_reg(Register::WhoAmI.addr()).await?;
        let resolution = match Resolution::from_who_am_i(who) {
            Ok(resolution) => resolution,
            Err(err) => {
                error!("lis3: unknown sensor type {=u8:#x}", who);
                return Err(err);
            }
        };
        match resolution {
            Resolution::DoubleByte => info!("lis3: 2-byte sensor found"),
            Resolution::SingleByte => info!("lis3: 1-byte sensor found"),
        }
        self.resolution = Some(resolution);
        self.state = DeviceState::Identified;
        Ok(resolution)
    }

    /// Runs the transport power-up hook and latches both output bytes
    /// together (BDU).
    pub(crate) async fn power_on(&mut self) -> Result<(), Error> {
        self.require_identified()?;
        if self.interface.init().await.is_err() {
            warn!("lis3: transport init failed");
        }
        let reg = Register::CtrlReg2.addr();
        match self.interface.read_reg(reg).await {
            Ok(value) => self.write_best_effort(Register::CtrlReg2, value | ctrl2::BDU).await,
            Err(_) => warn!("lis3: read of {=u8:#x} failed", reg),
        }
        self.state = DeviceState::Powered;
        Ok(())
    }

    /// Disables all axes and powers the sensor down.
    pub(crate) async fn power_off(&mut self) -> Result<(), Error> {
        self.require_identified()?;
        if self.state == DeviceState::Identified {
            return Err(Error::InvalidState);
        }
        self.write_best_effort(Register::CtrlReg1, 0).await;
        self.state = DeviceState::PoweredOff;
        Ok(())
    }

    /// Applies axis mapping, click engine and interrupt configuration.
    pub(crate) async fn apply_config(&mut self, config: &Config) -> Result<(), Error> {
        let resolution = self.require_identified()?;
        self.axes = config.axes;
        if let Some(click) = config.enabled_click()
            && resolution == Resolution::SingleByte
        {
            self.apply_click(click).await;
        }
        if let Some(irq_cfg) = config.enabled_irq_cfg() {
            self.write_best_effort(Register::CtrlReg3, irq_cfg).await;
        }
        Ok(())
    }

    async fn apply_click(&mut self, click: ClickConfig) {
        self.write_best_effort(Register::ClickCfg, click.flags).await;
        self.write_best_effort(Register::ClickTimeLimit, click.time_limit)
            .await;
        self.write_best_effort(Register::ClickLatency, click.latency)
            .await;
        self.write_best_effort(Register::ClickWindow, click.window)
            .await;
        self.write_best_effort(Register::ClickThsZ, click.ths_z_value())
            .await;
        self.write_best_effort(Register::ClickThsYX, click.ths_yx_value())
            .await;
    }

    /// Powers down (when powered) and refuses every later operation.
    pub(crate) async fn teardown(&mut self) -> Result<(), Error> {
        self.require_identified()?;
        if self.state == DeviceState::Powered {
            self.write_best_effort(Register::CtrlReg1, 0).await;
        }
        self.state = DeviceState::TornDown;
        Ok(())
    }

    pub(crate) async fn read_raw_axis(&mut self, axis: Axis) -> Result<i32, Error> {
        let resolution = self.require_identified()?;
        Ok(read_axis(&mut self.interface, resolution, axis).await)
    }

    /// Reads all axes and applies the axis mapping.
    pub(crate) async fn read_position(&mut self) -> Result<Position, Error> {
        let resolution = self.require_identified()?;
        let raw = read_raw(&mut self.interface, resolution).await;
        Ok(self.axes.apply(raw))
    }

    /// Stores the current mapped position as the calibration baseline.
    pub(crate) async fn calibrate(&mut self) -> Result<Position, Error> {
        let position = self.read_position().await?;
        self.calibration.store(position);
        Ok(position)
    }

    pub(crate) async fn data_rate(&mut self) -> Result<DataRate, Error> {
        self.require_identified()?;
        let ctrl1 = self.interface.read_reg(Register::CtrlReg1.addr()).await?;
        Ok(DataRate::from_ctrl1(ctrl1))
    }

    async fn write_best_effort(&mut self, reg: Register, value: u8) {
        if self.interface.write_reg(reg.addr(), value).await.is_err() {
            warn!("lis3: write of {=u8:#x} failed", reg.addr());
        }
    }

    pub(crate) fn release(self) -> I {
        self.interface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::{ctrl1, who_am_i};
    use crate::testing::MockInterface;
    use futures::executor::block_on;

    fn single_byte() -> DeviceCore<MockInterface> {
        DeviceCore::new(MockInterface::default().with_reg(Register::WhoAmI.addr(), who_am_i::SINGLE_BYTE))
    }

    fn double_byte() -> DeviceCore<MockInterface> {
        DeviceCore::new(MockInterface::default().with_reg(Register::WhoAmI.addr(), who_am_i::DOUBLE_BYTE))
    }

    #[test]
    fn identify_fixes_resolution() {
        let mut core = double_byte();
        assert_eq!(block_on(core.identify()), Ok(Resolution::DoubleByte));
        assert_eq!(core.state(), DeviceState::Identified);
        assert_eq!(core.resolution().map(Resolution::max_deviation), Some(2048));

        core.interface.set_reg(Register::WhoAmI.addr(), who_am_i::SINGLE_BYTE);
        assert_eq!(block_on(core.identify()), Ok(Resolution::DoubleByte));
    }

    #[test]
    fn unknown_signature_blocks_everything() {
        let mut core = DeviceCore::new(MockInterface::default().with_reg(Register::WhoAmI.addr(), 0x33));
        assert_eq!(block_on(core.identify()), Err(Error::UnknownDevice));
        assert_eq!(core.state(), DeviceState::Uninitialized);
        assert_eq!(block_on(core.power_on()), Err(Error::NotIdentified));
        assert_eq!(block_on(core.power_off()), Err(Error::NotIdentified));
        assert_eq!(block_on(core.read_position()), Err(Error::NotIdentified));
        assert_eq!(block_on(core.calibrate()), Err(Error::NotIdentified));
        assert_eq!(block_on(core.teardown()), Err(Error::NotIdentified));
        assert!(core.interface.writes().is_empty());
    }

    #[test]
    fn identify_propagates_bus_error() {
        let mut core = DeviceCore::new(MockInterface::default().with_failing_read(Register::WhoAmI.addr()));
        assert_eq!(block_on(core.identify()), Err(Error::Bus));
        assert_eq!(core.state(), DeviceState::Uninitialized);
    }

    #[test]
    fn power_on_runs_init_then_sets_bdu() {
        let mut core = single_byte();
        core.interface.set_reg(Register::CtrlReg2.addr(), 0x01);
        block_on(core.identify()).expect("identify");
        core.interface.clear_log();
        block_on(core.power_on()).expect("power on");

        assert_eq!(
            core.interface.reads(),
            [Register::CtrlReg1.addr(), Register::CtrlReg2.addr()]
        );
        assert_eq!(
            core.interface.writes(),
            &[
                (Register::CtrlReg1.addr(), ctrl1::PD0 | ctrl1::AXES_MASK),
                (Register::CtrlReg2.addr(), 0x01 | ctrl2::BDU),
            ]
        );
        assert_eq!(core.state(), DeviceState::Powered);
    }

    #[test]
    fn power_on_tolerates_write_failure() {
        let mut core = DeviceCore::new(
            MockInterface::default()
                .with_reg(Register::WhoAmI.addr(), who_am_i::SINGLE_BYTE)
                .with_failing_write(Register::CtrlReg2.addr()),
        );
        block_on(core.identify()).expect("identify");
        assert_eq!(block_on(core.power_on()), Ok(()));
        assert_eq!(core.state(), DeviceState::Powered);
    }

    #[test]
    fn power_off_clears_ctrl1() {
        let mut core = single_byte();
        block_on(core.identify()).expect("identify");
        assert_eq!(block_on(core.power_off()), Err(Error::InvalidState));
        block_on(core.power_on()).expect("power on");
        block_on(core.power_off()).expect("power off");
        assert_eq!(core.interface.reg(Register::CtrlReg1.addr()), 0);
        assert_eq!(core.state(), DeviceState::PoweredOff);

        block_on(core.power_on()).expect("power on again");
        assert_eq!(core.state(), DeviceState::Powered);
    }

    #[test]
    fn click_config_only_on_single_byte() {
        let click = ClickConfig::new(0x15)
            .with_timing(0x10, 0x20, 0x30)
            .with_thresholds(0x0A, 0x03, 0x1C);
        let config = Config::new().with_click(click);

        let mut core = single_byte();
        block_on(core.identify()).expect("identify");
        block_on(core.apply_config(&config)).expect("apply");
        assert_eq!(
            core.interface.writes(),
            &[
                (Register::ClickCfg.addr(), 0x15),
                (Register::ClickTimeLimit.addr(), 0x10),
                (Register::ClickLatency.addr(), 0x20),
                (Register::ClickWindow.addr(), 0x30),
                (Register::ClickThsZ.addr(), 0x0C),
                (Register::ClickThsYX.addr(), 0x3A),
            ]
        );

        let mut core = double_byte();
        block_on(core.identify()).expect("identify");
        block_on(core.apply_config(&config)).expect("apply");
        assert!(core.interface.writes().is_empty());
    }

    #[test]
    fn irq_cfg_written_when_nonzero() {
        let mut core = double_byte();
        block_on(core.identify()).expect("identify");
        block_on(core.apply_config(&Config::new().with_irq_cfg(0))).expect("apply");
        assert!(core.interface.writes().is_empty());

        block_on(core.apply_config(&Config::new().with_irq_cfg(0x24))).expect("apply");
        assert_eq!(core.interface.writes(), &[(Register::CtrlReg3.addr(), 0x24)]);
    }

    #[test]
    fn inverted_single_byte_axis() {
        let mut core = single_byte();
        core.interface.set_reg(Register::OutXH.addr(), (-5i8) as u8);
        block_on(core.identify()).expect("identify");
        let axes = AxisMap::new(-1, 2, 3).expect("axes");
        block_on(core.apply_config(&Config::new().with_axes(axes))).expect("apply");

        let position = block_on(core.read_position()).expect("position");
        assert_eq!(position.x, 5);
    }

    #[test]
    fn double_byte_composes_little_endian() {
        let mut core = double_byte();
        core.interface.set_reg(Register::OutXL.addr(), 0x00);
        core.interface.set_reg(Register::OutXH.addr(), 0x01);
        block_on(core.identify()).expect("identify");
        assert_eq!(block_on(core.read_raw_axis(Axis::X)), Ok(256));
    }

    #[test]
    fn calibration_then_sample_is_zero_delta() {
        let mut core = single_byte();
        core.interface.set_reg(Register::OutXH.addr(), 12);
        core.interface.set_reg(Register::OutYH.addr(), (-7i8) as u8);
        core.interface.set_reg(Register::OutZH.addr(), 64);
        block_on(core.identify()).expect("identify");

        let baseline = block_on(core.calibrate()).expect("calibrate");
        assert_eq!(core.calibration().load(), baseline);
        let position = block_on(core.read_position()).expect("position");
        assert_eq!(position.offset_by(core.calibration().load()), Position::new(0, 0, 0));
    }

    #[test]
    fn data_rate_from_ctrl1() {
        let mut core = double_byte();
        core.interface.set_reg(Register::CtrlReg1.addr(), ctrl1::PD0 | ctrl1::DF1);
        block_on(core.identify()).expect("identify");
        assert_eq!(block_on(core.data_rate()), Ok(DataRate::Hz640));
    }

    #[test]
    fn teardown_powers_off_and_locks() {
        let mut core = single_byte();
        block_on(core.identify()).expect("identify");
        block_on(core.power_on()).expect("power on");
        core.interface.clear_log();
        block_on(core.teardown()).expect("teardown");
        assert_eq!(core.interface.writes(), &[(Register::CtrlReg1.addr(), 0)]);
        assert_eq!(core.state(), DeviceState::TornDown);
        assert_eq!(block_on(core.identify()), Err(Error::NotIdentified));
        assert_eq!(block_on(core.read_position()), Err(Error::NotIdentified));
    }
}
