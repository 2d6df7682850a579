// crates/shared-kernel/src/errors/result.rs

use crate::errors::{AppError, DomainError};

/// Domain result.
/// Used by aggregates, validators, use cases and repository ports.
pub type Result<T> = std::result::Result<T, DomainError>;

/// Application result.
/// Used by binaries and connection factories, where technical and business
/// failures are reported through the same serialisable shape.
pub type AppResult<T> = std::result::Result<T, AppError>;
