use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    /// Malformed chart input: length mismatch, non-finite value, bad color.
    /// Aborts the whole call; nothing partially validated is returned.
    #[error("invalid data: {0}")]
    Validation(String),

    /// Network or store failure. Surfaced to the caller, never retried here.
    #[error("transport failure: {0}")]
    Transport(String),

    /// Operation attempted from an illegal state, e.g. submitting while a
    /// cycle is in flight or updating an unmounted render handle.
    #[error("illegal operation: {0}")]
    Configuration(String),
}
