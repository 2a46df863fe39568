//! Builder for SIN records assembled from separately produced parts.

use crate::error::{Result, SinError};

use super::identity::IdentityRecord;

/// Collects the four record fields; `build` rejects any that were never set.
#[derive(Default)]
pub struct IdentityRecordBuilder {
    private_key: Option<String>,
    public_key: Option<String>,
    identifier: Option<String>,
    created_at: Option<i64>,
}

impl IdentityRecordBuilder {
    /// Start an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the encoded private key.
    pub fn private_key(mut self, key: impl Into<String>) -> Self {
        self.private_key = Some(key.into());
        self
    }

    /// Set the encoded public key.
    pub fn public_key(mut self, key: impl Into<String>) -> Self {
        self.public_key = Some(key.into());
        self
    }

    /// Set the SIN computed from the public key.
    pub fn identifier(mut self, sin: impl Into<String>) -> Self {
        self.identifier = Some(sin.into());
        self
    }

    /// Set the creation time (seconds since Unix epoch).
    pub fn created_at(mut self, secs: i64) -> Self {
        self.created_at = Some(secs);
        self
    }

    /// Validate and finalize the record.
    pub fn build(self) -> Result<IdentityRecord> {
        let private_key = self
            .private_key
            .ok_or_else(|| SinError::missing("private_key"))?;
        let public_key = self
            .public_key
            .ok_or_else(|| SinError::missing("public_key"))?;
        let identifier = self
            .identifier
            .ok_or_else(|| SinError::missing("identifier"))?;
        let created_at = self
            .created_at
            .ok_or_else(|| SinError::missing("created_at"))?;
        IdentityRecord::new(private_key, public_key, identifier, created_at)
    }
}
