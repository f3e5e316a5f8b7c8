//! # devid-core
//!
//! Core domain models and derivation rules for devid.
//!
//! This crate contains pure business logic without any infrastructure dependencies.
//! Platform reads, digests and randomness are reached through [`ports`].

// Public module exports
pub mod config;
pub mod device;
pub mod ids;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use device::{DescriptorField, HardwareDescriptors, PseudoHardwareId};
pub use ids::DeviceId;
