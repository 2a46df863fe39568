//! Error types for bitauth-sin.
//!
//! Errors are strongly typed and returned, never panicked.
//! Key material is never included in error messages.

/// Errors raised while assembling a SIN record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SinError {
    #[error("Invalid argument: {field} is required")]
    InvalidArgument { field: &'static str },
}

impl SinError {
    pub(crate) fn missing(field: &'static str) -> Self {
        log::debug!("rejecting SIN record: {field} is absent");
        Self::InvalidArgument { field }
    }
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, SinError>;
