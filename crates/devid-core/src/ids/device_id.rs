use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Length of an identifier derived from a SHA-1 digest (20 bytes, two hex digits each)
pub const DIGEST_ID_LEN: usize = 40;

/// Length of an identifier derived from a random UUID (no separators)
pub const RANDOM_ID_LEN: usize = 32;

/// Best-effort stable device identifier
/// 尽力而为的稳定设备标识
///
/// Always uppercase hexadecimal without separators: 40 characters when it
/// comes from the digest path, 32 when it comes from the random fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(String);

impl DeviceId {
    /// Render a digest as uppercase hex, two zero-padded digits per byte.
    pub fn from_digest(digest: &[u8]) -> Self {
        Self(hex::encode_upper(digest))
    }

    /// Render a UUID in simple form (dashes stripped), uppercase.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(
            uuid.simple()
                .encode_upper(&mut Uuid::encode_buffer())
                .to_string(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Validate device ID format (40 or 32 uppercase hex digits)
    pub fn is_valid(&self) -> bool {
        matches!(self.0.len(), DIGEST_ID_LEN | RANDOM_ID_LEN)
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
    }
}

impl Display for DeviceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DeviceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<DeviceId> for String {
    fn from(id: DeviceId) -> Self {
        id.0
    }
}
