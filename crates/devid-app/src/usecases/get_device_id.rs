//! Use case for deriving the device identifier
//! 派生设备标识的用例

use serde::Serialize;
use std::sync::Arc;

use devid_core::device::compose_fingerprint_input;
use devid_core::ports::{DigestPort, PlatformContextPort, RandomIdPort};
use devid_core::{DeviceId, HardwareDescriptors, PseudoHardwareId};

/// Which path produced the identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceIdOrigin {
    /// SHA-1 over installation id and / or pseudo-hardware id
    Digest,
    /// No usable input; random UUID
    RandomFallback,
}

/// Derived identifier plus what went into it.
///
/// Carries no installation identifier value, only whether one was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceIdReport {
    pub device_id: DeviceId,
    pub origin: DeviceIdOrigin,
    pub installation_id_available: bool,
    pub descriptors_available: bool,
    pub pseudo_hardware_id: Option<String>,
}

/// Use case for deriving a best-effort stable device identifier.
///
/// ## Behavior / 行为
/// - Reads the installation identifier (empty on failure)
/// - Synthesizes the pseudo-hardware id from descriptors (absent on failure)
/// - Digests `installation_id|pseudo_id` with SHA-1, uppercase hex
/// - Falls back to a random UUID when nothing is available or the digest fails
///
/// Never fails: every read or digest error is logged and absorbed.
pub struct GetDeviceId {
    platform: Arc<dyn PlatformContextPort>,
    digest: Arc<dyn DigestPort>,
    random: Arc<dyn RandomIdPort>,
}

impl GetDeviceId {
    pub fn new(
        platform: Arc<dyn PlatformContextPort>,
        digest: Arc<dyn DigestPort>,
        random: Arc<dyn RandomIdPort>,
    ) -> Self {
        Self {
            platform,
            digest,
            random,
        }
    }

    /// Execute the use case.
    pub fn execute(&self) -> DeviceId {
        self.execute_detailed().device_id
    }

    /// Execute the use case and keep the diagnostics.
    pub fn execute_detailed(&self) -> DeviceIdReport {
        let installation_id = self.read_installation_id();
        let pseudo_hardware_id = self.synthesize_pseudo_hardware_id(&installation_id);

        let input = compose_fingerprint_input(&installation_id, pseudo_hardware_id.as_deref());

        let (device_id, origin) = match self.digest_input(&input) {
            Some(id) => (id, DeviceIdOrigin::Digest),
            None => {
                tracing::info!("No usable device inputs, using random device id");
                (
                    DeviceId::from_uuid(self.random.random_uuid()),
                    DeviceIdOrigin::RandomFallback,
                )
            }
        };

        tracing::debug!(?origin, "Derived device id");

        DeviceIdReport {
            device_id,
            origin,
            installation_id_available: !installation_id.is_empty(),
            descriptors_available: pseudo_hardware_id.is_some(),
            pseudo_hardware_id,
        }
    }

    fn read_installation_id(&self) -> String {
        match self.platform.installation_id() {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!(error = %err, "Installation id unavailable, treating as empty");
                String::new()
            }
        }
    }

    fn synthesize_pseudo_hardware_id(&self, installation_id: &str) -> Option<String> {
        match HardwareDescriptors::collect(self.platform.as_ref()) {
            Ok(descriptors) => {
                Some(PseudoHardwareId::synthesize(&descriptors, installation_id).to_string())
            }
            Err(err) => {
                tracing::warn!(error = %err, "Hardware descriptors unavailable, skipping pseudo-hardware id");
                None
            }
        }
    }

    fn digest_input(&self, input: &str) -> Option<DeviceId> {
        if input.is_empty() {
            return None;
        }

        match self.digest.digest(input.as_bytes()) {
            Ok(bytes) if !bytes.is_empty() => Some(DeviceId::from_digest(&bytes)),
            Ok(_) => {
                tracing::warn!("Digest returned no bytes, falling back to random device id");
                None
            }
            Err(err) => {
                tracing::warn!(error = %err, "Digest failed, falling back to random device id");
                None
            }
        }
    }
}
