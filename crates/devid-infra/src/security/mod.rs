pub mod hashing;

pub use hashing::Sha1Digest;
