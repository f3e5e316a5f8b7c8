use anyhow::Result;

/// Cryptographic digest used to normalize the fingerprint input.
pub trait DigestPort: Send + Sync {
    fn digest(&self, bytes: &[u8]) -> Result<Vec<u8>>;
}
