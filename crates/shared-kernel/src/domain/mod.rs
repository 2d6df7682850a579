pub mod aggregates;
pub mod entities;
mod identifier;
pub mod transaction;
pub mod value_objects;

pub use identifier::Identifier;
