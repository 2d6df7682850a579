// crates/shared-kernel/src/lib.rs

pub mod clock;
pub mod domain;
pub mod errors;
pub mod infrastructure;
