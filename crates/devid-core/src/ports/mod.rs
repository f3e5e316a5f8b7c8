//! Port interfaces for the application layer
//!
//! Ports define the contract between the derivation use case and the
//! infrastructure / platform implementations. The core never talks to the
//! host platform, a hash library or a random source directly.
//!
//! All ports are synchronous and `Send + Sync`: a derivation is a single
//! blocking call that may run on any thread.

mod digest;
pub mod errors;
pub mod platform_context;
mod random_id;

pub use digest::*;
pub use errors::PlatformReadError;
pub use platform_context::PlatformContextPort;
pub use random_id::*;
