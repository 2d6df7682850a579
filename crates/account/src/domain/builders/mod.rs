mod account_builder;

pub use account_builder::AccountBuilder;
