mod account_id;
mod value_object;

pub use account_id::AccountId;
pub use value_object::ValueObject;
