// crates/shared-kernel/src/infrastructure/mod.rs

pub mod bootstrap;
mod retry;

#[cfg(feature = "postgres")]
pub mod postgres;

#[cfg(feature = "concurrency")]
pub mod concurrency;

pub use retry::{RetryConfig, with_retry};
