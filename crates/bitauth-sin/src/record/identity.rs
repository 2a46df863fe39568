//! The SIN identity record — an immutable credential bundle.

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::error::{Result, SinError};

use super::builder::IdentityRecordBuilder;

/// A BitAuth System Identification Number with the key pair it was
/// derived from and the time it was created.
///
/// Fields are fixed at construction. Equality and hashing cover all four
/// fields. The private key is zeroized on drop.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawIdentityRecord")
)]
pub struct IdentityRecord {
    created_at: i64,
    private_key: String,
    public_key: String,
    identifier: String,
}

impl IdentityRecord {
    /// Assemble a record from precomputed key material and SIN.
    ///
    /// Values are stored verbatim. Only the private key must be non-empty;
    /// an empty one is rejected with [`SinError::InvalidArgument`].
    pub fn new(
        private_key: impl Into<String>,
        public_key: impl Into<String>,
        identifier: impl Into<String>,
        created_at: i64,
    ) -> Result<Self> {
        let private_key = private_key.into();
        if private_key.is_empty() {
            return Err(SinError::missing("private_key"));
        }
        Ok(Self {
            created_at,
            private_key,
            public_key: public_key.into(),
            identifier: identifier.into(),
        })
    }

    /// Start a builder for records whose fields arrive separately.
    pub fn builder() -> IdentityRecordBuilder {
        IdentityRecordBuilder::new()
    }

    /// The encoded private key.
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// The encoded public key.
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// The SIN derived from the public key.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Creation time, seconds since Unix epoch.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Creation time as an RFC 3339 string.
    pub fn created_rfc3339(&self) -> String {
        crate::time::secs_to_rfc3339(self.created_at)
    }

    /// Platform-independent hash over created, priv, pub, sin (in that
    /// order), folded as `acc * 31 + field`.
    ///
    /// Unlike the `Hash` impl this value is stable across processes, so it
    /// can key external caches.
    pub fn hash_code(&self) -> u64 {
        [
            field_hash(&self.created_at.to_be_bytes()),
            field_hash(self.private_key.as_bytes()),
            field_hash(self.public_key.as_bytes()),
            field_hash(self.identifier.as_bytes()),
        ]
        .into_iter()
        .fold(0u64, |acc, h| acc.wrapping_mul(31).wrapping_add(h))
    }
}

fn field_hash(bytes: &[u8]) -> u64 {
    let digest = Sha256::digest(bytes);
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(head)
}

impl fmt::Display for IdentityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SIN{{created={}, priv='{}', pub='{}', sin='{}'}}",
            self.created_at, self.private_key, self.public_key, self.identifier
        )
    }
}

impl fmt::Debug for IdentityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityRecord")
            .field("created_at", &self.created_at)
            .field("private_key", &"<redacted>")
            .field("public_key", &self.public_key)
            .field("identifier", &self.identifier)
            .finish()
    }
}

impl Drop for IdentityRecord {
    fn drop(&mut self) {
        self.private_key.zeroize();
    }
}

/// Wire shape accepted on deserialization; funnels through `new`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawIdentityRecord {
    created_at: i64,
    private_key: String,
    public_key: String,
    identifier: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawIdentityRecord> for IdentityRecord {
    type Error = SinError;

    fn try_from(raw: RawIdentityRecord) -> Result<Self> {
        Self::new(raw.private_key, raw.public_key, raw.identifier, raw.created_at)
    }
}
