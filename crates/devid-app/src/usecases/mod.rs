//! Business logic use cases

pub mod get_device_id;

pub use get_device_id::{DeviceIdOrigin, DeviceIdReport, GetDeviceId};
