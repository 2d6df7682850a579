//! Study and event form validators. Same contract as the account ones: an
//! empty `FieldErrors` lets the mutation run.

mod codes;
mod event_validator;
mod study_validator;

pub use codes::*;
pub use event_validator::validate_event;
pub use study_validator::{validate_description, validate_study};

#[cfg(test)]
mod tests;
