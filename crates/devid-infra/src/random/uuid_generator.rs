use devid_core::ports::RandomIdPort;
use uuid::Uuid;

/// Random ids backed by UUID v4.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4Generator;

impl RandomIdPort for UuidV4Generator {
    fn random_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}
