//! Async `#![no_std]` driver for the ST
//! [LIS3LV02DL](https://www.st.com/en/mems-and-sensors/lis3lv02dl.html) and
//! LIS302DL three-axis accelerometers.
//!
//! The driver identifies the part from WHO_AM_I (12-bit LIS3LV02DL or 8-bit
//! LIS302DL), powers it on, decodes and remaps samples, and turns the
//! free-fall interrupt into a coalescing single-reader event stream.
//!
//! # Quick start (I2C)
//!
//! ```rust,no_run
//! use ph_lis3lv02d::{AxisMap, Config, I2cConfig, Lis3Address, Lis3lv02dI2c};
//! # use embedded_hal_async::i2c::I2c;
//! #
//! # async fn example<I2C: I2c>(i2c: I2C) -> Result<(), ph_lis3lv02d::Error> {
//! let config = Config::new().with_axes(AxisMap::new(-2, 1, 3)?);
//! let i2c_config = I2cConfig::new(Lis3Address::Primary.addr());
//! let mut accel: Lis3lv02dI2c<I2C> = Lis3lv02dI2c::with_i2c_config(i2c, i2c_config);
//! accel.init(&config).await?;
//! let position = accel.read_position().await?;
//! # let _ = position;
//! # Ok(())
//! # }
//! ```
//!
//! # Free-fall events
//!
//! [`FreefallEvents`] is meant to live in a `static`. The interrupt handler
//! (or [`forward_edges`] on an async pin) calls [`FreefallEvents::trigger`];
//! one [`FreefallReader`] at a time drains the counter. Triggers between
//! reads coalesce and each read delivers a count clamped to 255.
//!
//! # Joystick and attributes
//!
//! [`Joystick`] polls the sensor every 50 ms and reports calibrated deltas
//! to an [`InputSink`]. The [`attributes`] module renders position,
//! calibration and data rate as text.
//!
//! # Logging
//!
//! Enable the `defmt` feature for log output and `defmt::Format` on public
//! types.

#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_code)]
// Clippy lint levels live here.
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements,
    clippy::let_underscore_future
)]

#[macro_use]
mod fmt;

pub mod attributes;
mod config;
mod data;
mod device;
mod driver;
mod error;
mod event;
mod interface;
mod register;
mod sampler;

#[cfg(test)]
mod testing;

// Interface layer
pub use interface::Interface;
pub use interface::Lis3Address;
pub use interface::{I2cConfig, I2cInterface};
pub use interface::SpiInterface;

// Configuration
pub use config::{ClickConfig, Config, DataRate, SamplerConfig};
pub use register::click_cfg;

// Driver
pub use device::{Calibration, DeviceState};
pub use driver::{Lis3lv02d, Lis3lv02dI2c, Lis3lv02dSpi};

// Data types
pub use data::{Axis, AxisMap, Position, Resolution};
pub use data::{decode_double_byte, decode_single_byte, map_axis};

// Features
pub use attributes::Attribute;
pub use error::Error;
pub use event::{FreefallEvents, FreefallReader, InterruptLine, NotifySink, OpenMode};
pub use event::{NOTIFY_CAPACITY, WAITER_CAPACITY, forward_edges};
pub use sampler::{InputSink, Joystick};
