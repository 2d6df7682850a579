pub mod builders;
pub mod entities;
pub mod ports;
pub mod repositories;
pub mod validation;
pub mod value_objects;
