//! SPI interface adapter for the LIS3 family.
//!
//! 4-wire mode only; the first byte carries the read flag in its top bit.

use embedded_hal_async::spi::{Operation, SpiDevice};

use super::Interface;
use crate::error::Error;

/// SPI register interface.
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Creates a new SPI interface with the given bus.
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Releases the underlying SPI bus.
    pub fn release(self) -> SPI {
        self.spi
    }
}

const SPI_READ: u8 = 0x80;
const SPI_ADDR_MASK: u8 = 0x3F;

const fn spi_addr_read(reg: u8) -> u8 {
    (reg & SPI_ADDR_MASK) | SPI_READ
}

const fn spi_addr_write(reg: u8) -> u8 {
    reg & SPI_ADDR_MASK
}

impl<SPI> Interface for SpiInterface<SPI>
where
    SPI: SpiDevice,
{
    async fn read_reg(&mut self, reg: u8) -> Result<u8, Error> {
        let addr_buf = [spi_addr_read(reg)];
        let mut buffer = [0u8];
        let mut ops = [Operation::Write(&addr_buf), Operation::Read(&mut buffer)];
        self.spi.transaction(&mut ops).await.map_err(|_| Error::Bus)?;
        Ok(buffer[0])
    }

    async fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error> {
        let buffer = [spi_addr_write(reg), value];
        self.spi.write(&buffer).await.map_err(|_| Error::Bus)
    }
}
