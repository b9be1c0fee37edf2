//! Interface abstraction for register I/O.
//!
//! This is the boundary to the bus collaborator. The driver only ever asks
//! for one register at a time; framing stays on the other side of the trait.

pub(crate) mod address;
pub(crate) mod i2c;
pub(crate) mod spi;

pub use address::Lis3Address;
pub use i2c::{I2cConfig, I2cInterface};
pub use spi::SpiInterface;

use crate::error::Error;
use crate::register::{Register, ctrl1};

/// Minimal async register I/O for the device core.
///
/// Implement this for transports other than the bundled I2C and SPI
/// adapters (for example firmware-mediated register access).
#[allow(async_fn_in_trait)]
pub trait Interface {
    /// Reads a single register.
    async fn read_reg(&mut self, reg: u8) -> Result<u8, Error>;
    /// Writes a single register.
    async fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error>;

    /// Transport-specific power-up, run before the common power-on sequence.
    ///
    /// The default leaves power-down mode and enables all three axes.
    async fn init(&mut self) -> Result<(), Error> {
        let reg = Register::CtrlReg1.addr();
        let value = self.read_reg(reg).await?;
        self.write_reg(reg, value | ctrl1::PD0 | ctrl1::AXES_MASK)
            .await
    }
}

impl<T: Interface> Interface for &mut T {
    async fn read_reg(&mut self, reg: u8) -> Result<u8, Error> {
        (**self).read_reg(reg).await
    }

    async fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        (**self).write_reg(reg, value).await
    }

    async fn init(&mut self) -> Result<(), Error> {
        (**self).init().await
    }
}
