mod tag_resolver;
mod zone_resolver;

pub use tag_resolver::TagResolver;
pub use zone_resolver::ZoneResolver;

#[cfg(test)]
mod resolvers_test;
