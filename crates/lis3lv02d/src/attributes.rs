//! Text attribute surface (position, calibration, rate).
//!
//! Values are rendered the way a sysfs-style collaborator expects them:
//! one line, newline terminated.

use core::fmt::Write;

use crate::driver::Lis3lv02d;
use crate::error::Error;
use crate::interface::Interface;

/// Attributes exposed by the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Attribute {
    /// Current mapped position, read-only.
    Position,
    /// Calibration baseline. Any store captures a new baseline.
    Calibrate,
    /// Output data rate in Hz, read-only.
    Rate,
}

impl Attribute {
    /// All attributes.
    pub const ALL: [Self; 3] = [Self::Position, Self::Calibrate, Self::Rate];

    /// Attribute name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Calibrate => "calibrate",
            Self::Rate => "rate",
        }
    }

    /// Returns true if [`store`] accepts this attribute.
    pub const fn is_writable(self) -> bool {
        matches!(self, Self::Calibrate)
    }

    /// Looks an attribute up by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.name() == name)
    }
}

/// Renders `attr` into `out`.
///
/// Formatter failures map to [`Error::InvalidArgument`].
pub async fn show<I: Interface, W: Write>(
    driver: &mut Lis3lv02d<I>,
    attr: Attribute,
    out: &mut W,
) -> Result<(), Error> {
    let written = match attr {
        Attribute::Position => {
            let position = driver.read_position().await?;
            writeln!(out, "{position}")
        }
        Attribute::Calibrate => {
            driver.ensure_identified()?;
            writeln!(out, "{}", driver.calibration())
        }
        Attribute::Rate => {
            let rate = driver.data_rate().await?;
            writeln!(out, "{}", rate.hz())
        }
    };
    written.map_err(|_| Error::InvalidArgument)
}

/// Handles a write to `attr`. The input text is ignored.
pub async fn store<I: Interface>(
    driver: &mut Lis3lv02d<I>,
    attr: Attribute,
    input: &str,
) -> Result<usize, Error> {
    if !attr.is_writable() {
        return Err(Error::ReadOnly);
    }
    driver.calibrate().await?;
    Ok(input.len())
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::config::Config;
    use crate::register::{Register, ctrl1, who_am_i};
    use crate::testing::MockInterface;
    use futures::executor::block_on;
    use std::string::String;

    fn driver() -> Lis3lv02d<MockInterface> {
        let interface = MockInterface::default()
            .with_reg(Register::WhoAmI.addr(), who_am_i::DOUBLE_BYTE)
            .with_reg(Register::OutXL.addr(), 0x10)
            .with_reg(Register::OutYL.addr(), 0xFE)
            .with_reg(Register::OutYH.addr(), 0xFF)
            .with_reg(Register::OutZL.addr(), 0x00)
            .with_reg(Register::OutZH.addr(), 0x04);
        let mut driver = Lis3lv02d::new(interface);
        block_on(driver.init(&Config::new())).expect("init");
        driver
    }

    #[test]
    fn position_renders_tuple() {
        let mut driver = driver();
        let mut out = String::new();
        block_on(show(&mut driver, Attribute::Position, &mut out)).expect("show");
        assert_eq!(out, "(16,-2,1024)\n");
    }

    #[test]
    fn rate_renders_hz() {
        let mut driver = driver();
        let mut out = String::new();
        block_on(show(&mut driver, Attribute::Rate, &mut out)).expect("show");
        assert_eq!(out, "40\n");

        let mut interface = driver.release();
        interface.set_reg(Register::CtrlReg1.addr(), ctrl1::PD0 | ctrl1::DF0 | ctrl1::DF1);
        let mut driver = Lis3lv02d::new(interface);
        block_on(driver.identify()).expect("identify");
        let mut out = String::new();
        block_on(show(&mut driver, Attribute::Rate, &mut out)).expect("show");
        assert_eq!(out, "2560\n");
    }

    #[test]
    fn storing_calibrate_captures_baseline() {
        let mut driver = driver();
        assert_eq!(block_on(store(&mut driver, Attribute::Calibrate, "1\n")), Ok(2));
        let mut out = String::new();
        block_on(show(&mut driver, Attribute::Calibrate, &mut out)).expect("show");
        assert_eq!(out, "(16,-2,1024)\n");
    }

    #[test]
    fn read_only_attributes_reject_store() {
        let mut driver = driver();
        assert_eq!(block_on(store(&mut driver, Attribute::Position, "0")), Err(Error::ReadOnly));
        assert_eq!(block_on(store(&mut driver, Attribute::Rate, "0")), Err(Error::ReadOnly));
        assert_eq!(driver.calibration(), crate::data::Position::default());
    }

    #[test]
    fn calibrate_requires_identified_driver() {
        let interface = MockInterface::default().with_reg(Register::WhoAmI.addr(), 0x00);
        let mut driver = Lis3lv02d::new(interface);
        assert_eq!(block_on(driver.identify()), Err(Error::UnknownDevice));

        let mut out = String::new();
        assert_eq!(
            block_on(show(&mut driver, Attribute::Calibrate, &mut out)),
            Err(Error::NotIdentified)
        );
        assert!(out.is_empty());
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(Attribute::from_name("rate"), Some(Attribute::Rate));
        assert_eq!(Attribute::from_name("calibrate"), Some(Attribute::Calibrate));
        assert_eq!(Attribute::from_name("bogus"), None);
    }
}
