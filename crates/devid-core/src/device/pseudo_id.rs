use std::fmt::{Display, Formatter};
use uuid::Uuid;

use super::descriptors::HardwareDescriptors;
use super::string_hash::platform_string_hash;

/// Fixed prefix of the numeric descriptor string.
pub const DESCRIPTOR_PREFIX: &str = "35";

/// Pseudo-hardware identifier synthesized from descriptor lengths and the
/// installation identifier.
///
/// The high 64 bits carry the sign-extended hash of the numeric descriptor
/// string, the low 64 bits the sign-extended hash of the installation
/// identifier. Displayed as 32 lowercase hex digits without dashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PseudoHardwareId(Uuid);

impl PseudoHardwareId {
    pub fn synthesize(descriptors: &HardwareDescriptors, installation_id: &str) -> Self {
        let numeric = descriptor_string(descriptors);
        Self::from_seeds(
            platform_string_hash(&numeric),
            platform_string_hash(installation_id),
        )
    }

    /// Build the 128-bit value from two 32-bit seeds.
    pub fn from_seeds(high: i32, low: i32) -> Self {
        let most = i64::from(high) as u64;
        let least = i64::from(low) as u64;
        Self(Uuid::from_u128((u128::from(most) << 64) | u128::from(least)))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for PseudoHardwareId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// `"35"` followed by one length digit per descriptor field.
pub fn descriptor_string(descriptors: &HardwareDescriptors) -> String {
    format!("{DESCRIPTOR_PREFIX}{}", descriptors.length_digits())
}
