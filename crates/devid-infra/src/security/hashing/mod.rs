mod sha1_digest;

pub use sha1_digest::Sha1Digest;
