//! bitauth-sin — System Identification Number records for BitAuth.
//!
//! Provides an immutable value type bundling a key pair, the SIN derived
//! from it, and its creation time, with structural equality, stable
//! hashing and human-readable rendering.

pub mod error;
pub mod record;
pub mod time;

// Re-export primary types
pub use error::{Result, SinError};
pub use record::{IdentityRecord, IdentityRecordBuilder};
