//! A control driver for the OV5640/OV3660 family of image sensors.
//!
//! The sensor is configured entirely over its two-wire control bus (SCCB);
//! the high-bandwidth parallel pixel path is owned by the capture peripheral
//! of the host and is not touched here. Works on any microcontroller
//! implementing the embedded-hal blocking I2C interface.

#![no_std]

/// Drivers and register tables for the OV5640.
pub mod ov5640;

/// The generic sensor control interface implemented by sensor drivers.
pub mod sensor;
