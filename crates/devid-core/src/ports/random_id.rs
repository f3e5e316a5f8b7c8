use uuid::Uuid;

/// Source of random 128-bit identifiers for the fallback path.
pub trait RandomIdPort: Send + Sync {
    fn random_uuid(&self) -> Uuid;
}
