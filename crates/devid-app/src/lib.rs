//! devid Application Orchestration Layer
//!
//! This crate contains the device id use case.

pub mod usecases;

pub use usecases::{DeviceIdOrigin, DeviceIdReport, GetDeviceId};
