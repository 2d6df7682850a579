// crates/account/src/domain/ports/password_encoder.rs

use shared_kernel::errors::Result;

use crate::domain::value_objects::{PasswordHash, RawPassword};

/// One-way password hashing primitive.
pub trait PasswordEncoder: Send + Sync {
    fn encode(&self, raw: &RawPassword) -> Result<PasswordHash>;

    /// Malformed hashes never match
    fn matches(&self, raw: &str, hash: &PasswordHash) -> bool;
}
