//! Per-axis sample decoding.

use crate::interface::Interface;

use super::{Axis, Resolution};

/// Decodes an 8-bit sample from the high output register.
pub const fn decode_single_byte(high: u8) -> i32 {
    high as i8 as i32
}

/// Decodes a 16-bit little-endian sample from its low and high bytes.
pub const fn decode_double_byte(low: u8, high: u8) -> i32 {
    i16::from_le_bytes([low, high]) as i32
}

/// Reads one physical axis.
///
/// A failed register read is not propagated; the axis reads as 0.
pub(crate) async fn read_axis<I: Interface>(
    interface: &mut I,
    resolution: Resolution,
    axis: Axis,
) -> i32 {
    match resolution {
        Resolution::SingleByte => {
            let reg = axis.high_register().addr();
            match interface.read_reg(reg).await {
                Ok(high) => decode_single_byte(high),
                Err(_) => {
                    debug!("lis3: axis read failed reg={=u8:#x}", reg);
                    0
                }
            }
        }
        Resolution::DoubleByte => {
            // Two single reads; address auto-increment is not assumed.
            let low_reg = axis.low_register().addr();
            let Ok(low) = interface.read_reg(low_reg).await else {
                debug!("lis3: axis read failed reg={=u8:#x}", low_reg);
                return 0;
            };
            let high_reg = low_reg.wrapping_add(1);
            let Ok(high) = interface.read_reg(high_reg).await else {
                debug!("lis3: axis read failed reg={=u8:#x}", high_reg);
                return 0;
            };
            decode_double_byte(low, high)
        }
    }
}

/// Reads all three physical axes in X, Y, Z order.
pub(crate) async fn read_raw<I: Interface>(interface: &mut I, resolution: Resolution) -> [i32; 3] {
    let mut raw = [0i32; 3];
    for (slot, axis) in raw.iter_mut().zip(Axis::ALL) {
        *slot = read_axis(interface, resolution, axis).await;
    }
    raw
}
