pub mod random;
pub mod security;

pub use random::UuidV4Generator;
pub use security::Sha1Digest;
