// devid-infra/src/security/hashing/sha1_digest.rs
use anyhow::Result;
use devid_core::ports::DigestPort;
use sha1::{Digest, Sha1};

#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1Digest;

impl DigestPort for Sha1Digest {
    fn digest(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let mut hasher = Sha1::new();
        hasher.update(bytes);
        Ok(hasher.finalize().to_vec())
    }
}
