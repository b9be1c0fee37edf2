//! Error type for the LIS3 driver.

/// Error type for LIS3 operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Bus communication error (I2C, SPI, etc.).
    Bus,
    /// WHO_AM_I returned a signature this driver does not know.
    UnknownDevice,
    /// The sensor has not been identified, or has been torn down.
    NotIdentified,
    /// Lifecycle operation not valid from the current state.
    InvalidState,
    /// The interrupt line could not be acquired exclusively.
    ResourceUnavailable,
    /// The event device already has a reader attached.
    AlreadyOpen,
    /// Invalid argument or configuration.
    InvalidArgument,
    /// Non-blocking read with no pending event.
    WouldBlock,
    /// A blocking read was cancelled before an event arrived.
    Interrupted,
    /// Store attempted on a read-only attribute.
    ReadOnly,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::Bus => "bus transfer failed",
            Self::UnknownDevice => "unknown sensor signature",
            Self::NotIdentified => "sensor not identified",
            Self::InvalidState => "operation not valid in current state",
            Self::ResourceUnavailable => "interrupt line unavailable",
            Self::AlreadyOpen => "event device already open",
            Self::InvalidArgument => "invalid argument",
            Self::WouldBlock => "no event pending",
            Self::Interrupted => "read interrupted",
            Self::ReadOnly => "attribute is read-only",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for Error {}
