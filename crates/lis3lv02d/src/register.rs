//! LIS3LV02DL / LIS302DL register definitions.
//!
//! Both parts share the same control block and output layout. The 8-bit
//! LIS302DL only populates the high output registers and replaces the
//! direction-detection block with the click engine.

#![allow(dead_code)]

/// LIS3 register addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    /// Device identifier register.
    WhoAmI = 0x0F,
    /// Factory offset, X axis (LIS3LV02DL only).
    OffsetX = 0x16,
    /// Factory offset, Y axis (LIS3LV02DL only).
    OffsetY = 0x17,
    /// Factory offset, Z axis (LIS3LV02DL only).
    OffsetZ = 0x18,
    /// Factory gain, X axis (LIS3LV02DL only).
    GainX = 0x19,
    /// Factory gain, Y axis (LIS3LV02DL only).
    GainY = 0x1A,
    /// Factory gain, Z axis (LIS3LV02DL only).
    GainZ = 0x1B,
    /// Control register 1 (power, data rate, axis enable).
    CtrlReg1 = 0x20,
    /// Control register 2 (block data update, scale, interrupt enable).
    CtrlReg2 = 0x21,
    /// Control register 3 (interrupt routing / high-pass filter).
    CtrlReg3 = 0x22,
    /// High-pass filter reset.
    HpFilterReset = 0x23,
    /// Data status register.
    Status = 0x27,
    /// X-axis low byte.
    OutXL = 0x28,
    /// X-axis high byte (the only X register on 8-bit parts).
    OutXH = 0x29,
    /// Y-axis low byte.
    OutYL = 0x2A,
    /// Y-axis high byte (the only Y register on 8-bit parts).
    OutYH = 0x2B,
    /// Z-axis low byte.
    OutZL = 0x2C,
    /// Z-axis high byte (the only Z register on 8-bit parts).
    OutZH = 0x2D,
    /// Free-fall / wake-up configuration.
    FfWuCfg = 0x30,
    /// Free-fall / wake-up source.
    FfWuSrc = 0x31,
    /// Free-fall / wake-up acknowledge.
    FfWuAck = 0x32,
    /// Free-fall / wake-up threshold low byte.
    FfWuThsL = 0x34,
    /// Free-fall / wake-up threshold high byte.
    FfWuThsH = 0x35,
    /// Free-fall / wake-up duration.
    FfWuDuration = 0x36,
    /// Click configuration (LIS302DL only).
    ClickCfg = 0x38,
    /// Click source (LIS302DL only).
    ClickSrc = 0x39,
    /// Click X/Y thresholds, packed nibbles (LIS302DL only).
    ClickThsYX = 0x3B,
    /// Click Z threshold (LIS302DL only).
    ClickThsZ = 0x3C,
    /// Click time limit (LIS302DL only).
    ClickTimeLimit = 0x3D,
    /// Click latency (LIS302DL only).
    ClickLatency = 0x3E,
    /// Click window (LIS302DL only).
    ClickWindow = 0x3F,
}

impl Register {
    /// Returns the register address.
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// Expected values for WHO_AM_I.
pub mod who_am_i {
    /// 12-bit LIS3LV02DL, read as two bytes per axis.
    pub const DOUBLE_BYTE: u8 = 0x3A;
    /// 8-bit LIS302DL, read as one byte per axis.
    pub const SINGLE_BYTE: u8 = 0x3B;
}

/// CTRL_REG1 register bits.
pub mod ctrl1 {
    /// Power-down control bit 1.
    pub const PD1: u8 = 0b1000_0000;
    /// Power-down control bit 0 (device active when set).
    pub const PD0: u8 = 0b0100_0000;
    /// Decimation factor bit 1.
    pub const DF1: u8 = 0b0010_0000;
    /// Decimation factor bit 0.
    pub const DF0: u8 = 0b0001_0000;
    /// Decimation factor shift.
    pub const DF_SHIFT: u8 = 4;
    /// Self-test enable.
    pub const ST: u8 = 0b0000_1000;
    /// Z axis enable.
    pub const ZEN: u8 = 0b0000_0100;
    /// Y axis enable.
    pub const YEN: u8 = 0b0000_0010;
    /// X axis enable.
    pub const XEN: u8 = 0b0000_0001;
    /// All three axes enabled.
    pub const AXES_MASK: u8 = XEN | YEN | ZEN;
}

/// CTRL_REG2 register bits.
pub mod ctrl2 {
    /// Full-scale selection.
    pub const FS: u8 = 0b1000_0000;
    /// Block data update: low and high bytes latch together.
    pub const BDU: u8 = 0b0100_0000;
    /// Big/little endian selection.
    pub const BLE: u8 = 0b0010_0000;
    /// Reboot memory content.
    pub const BOOT: u8 = 0b0001_0000;
    /// Interrupt enable (route to RDY pin).
    pub const IEN: u8 = 0b0000_1000;
    /// Data-ready generation enable.
    pub const DRDY: u8 = 0b0000_0100;
    /// SPI 3-wire mode.
    pub const SIM: u8 = 0b0000_0010;
    /// Data alignment selection (12-bit right justified when clear).
    pub const DAS: u8 = 0b0000_0001;
}

/// CTRL_REG3 register bits.
pub mod ctrl3 {
    /// External clock enable.
    pub const ECK: u8 = 0b1000_0000;
    /// High-pass filter enabled for direction detection.
    pub const HPDD: u8 = 0b0100_0000;
    /// High-pass filter enabled for free-fall / wake-up.
    pub const HPFF: u8 = 0b0010_0000;
    /// Filtered data selection.
    pub const FDS: u8 = 0b0001_0000;
    /// High-pass cut-off frequency selection mask.
    pub const CFS_MASK: u8 = 0b0000_0011;
}

/// STATUS register bits.
pub mod status {
    /// X, Y, Z data overrun.
    pub const ZYXOR: u8 = 0b1000_0000;
    /// X, Y, Z new data available.
    pub const ZYXDA: u8 = 0b0000_1000;
}

/// CLICK_CFG register bits (LIS302DL).
pub mod click_cfg {
    /// Latch interrupt request into CLICK_SRC.
    pub const LIR: u8 = 0b0100_0000;
    /// Double click on Z axis.
    pub const DOUBLE_Z: u8 = 0b0010_0000;
    /// Single click on Z axis.
    pub const SINGLE_Z: u8 = 0b0001_0000;
    /// Double click on Y axis.
    pub const DOUBLE_Y: u8 = 0b0000_1000;
    /// Single click on Y axis.
    pub const SINGLE_Y: u8 = 0b0000_0100;
    /// Double click on X axis.
    pub const DOUBLE_X: u8 = 0b0000_0010;
    /// Single click on X axis.
    pub const SINGLE_X: u8 = 0b0000_0001;
}

/// CLICK_THSY_X packing.
pub mod click_ths_yx {
    /// Threshold nibble mask.
    pub const NIBBLE_MASK: u8 = 0x0F;
    /// Y threshold shift.
    pub const Y_SHIFT: u8 = 4;
}
