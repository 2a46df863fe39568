//! SIN records — immutable bundles of key material and identity metadata.
//!
//! A record carries the output of key generation and SIN derivation; it
//! performs neither. See `IdentityRecord` for the equality and hashing
//! contract.

pub mod builder;
pub mod identity;

pub use builder::IdentityRecordBuilder;
pub use identity::IdentityRecord;
