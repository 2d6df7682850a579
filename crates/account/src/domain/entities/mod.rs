mod account;
mod tag;
mod zone;

pub use account::Account;
pub use tag::Tag;
pub use zone::Zone;

#[cfg(test)]
mod tests;
