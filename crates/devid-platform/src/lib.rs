//! Platform-context adapters for devid.
//!
//! Each adapter implements [`devid_core::ports::PlatformContextPort`] over a
//! different source of Android build values.

pub mod adapters;
pub mod properties;

pub use adapters::{BuildPropPlatformContext, GetpropPlatformContext, StaticPlatformContext};
