use crate::device::DescriptorField;
use crate::ports::PlatformReadError;

/// Read-only access to the host platform's identifying values.
/// 宿主平台只读访问端口
///
/// Each read may fail independently. Implementations must be free of side
/// effects and return the same value for repeated reads.
pub trait PlatformContextPort: Send + Sync {
    /// Platform-assigned secure installation identifier.
    fn installation_id(&self) -> Result<String, PlatformReadError>;

    /// One hardware / build descriptor value.
    fn descriptor(&self, field: DescriptorField) -> Result<String, PlatformReadError>;
}
