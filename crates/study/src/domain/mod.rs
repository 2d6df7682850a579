pub mod entities;
pub mod repositories;
pub mod validation;
pub mod value_objects;
