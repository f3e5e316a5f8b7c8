use thiserror::Error;

/// Failure to read a value from the host platform.
///
/// Callers of the derivation never see this: every read failure is absorbed
/// and treated as "value unavailable".
#[derive(Debug, Error)]
pub enum PlatformReadError {
    #[error("{0} is not available on this platform")]
    NotAvailable(String),

    #[error("platform source error: {0}")]
    Source(String),
}
