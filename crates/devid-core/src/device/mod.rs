//! Device domain models and identifier derivation rules.

pub mod descriptors;
pub mod fingerprint;
pub mod pseudo_id;
pub mod string_hash;

pub use descriptors::{DescriptorField, HardwareDescriptors};
pub use fingerprint::{compose_fingerprint_input, FINGERPRINT_SEPARATOR};
pub use pseudo_id::PseudoHardwareId;
pub use string_hash::platform_string_hash;
