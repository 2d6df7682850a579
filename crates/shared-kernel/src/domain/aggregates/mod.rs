mod metadata;

pub use metadata::{AggregateMetadata, AggregateRoot};
