// crates/account/src/domain/ports/password_encoder_stub.rs

use shared_kernel::errors::Result;

use crate::domain::ports::PasswordEncoder;
use crate::domain::value_objects::{PasswordHash, RawPassword};

/// Reversible fake, enough to tell hashed from plain in assertions.
#[derive(Default)]
pub struct PasswordEncoderStub;

impl PasswordEncoder for PasswordEncoderStub {
    fn encode(&self, raw: &RawPassword) -> Result<PasswordHash> {
        Ok(PasswordHash::from_raw(format!("{{stub}}{}", raw.as_str())))
    }

    fn matches(&self, raw: &str, hash: &PasswordHash) -> bool {
        hash.as_str() == format!("{{stub}}{}", raw)
    }
}
