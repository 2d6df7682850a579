// crates/account/src/lib.rs

pub mod application;
pub mod domain;
pub mod infrastructure;
