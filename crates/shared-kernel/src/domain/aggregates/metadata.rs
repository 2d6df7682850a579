// crates/shared-kernel/src/domain/aggregates/metadata.rs

/// Technical data shared by every aggregate: the current version and the
/// version that was read from storage.
///
/// Repositories save with `WHERE version = persisted_version`, so any number
/// of mutations applied in one request still detect a concurrent writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateMetadata {
    version: i32,
    persisted_version: i32,
}

impl AggregateMetadata {
    /// Fresh aggregate, never persisted
    pub fn new(version: i32) -> Self {
        Self {
            version,
            persisted_version: 0,
        }
    }

    /// Used by repositories when rebuilding an aggregate from a row
    pub fn restore(version: i32) -> Self {
        Self {
            version,
            persisted_version: version,
        }
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn persisted_version(&self) -> i32 {
        self.persisted_version
    }

    pub fn is_new(&self) -> bool {
        self.persisted_version == 0
    }

    pub fn is_dirty(&self) -> bool {
        self.version != self.persisted_version
    }

    pub fn increment_version(&mut self) {
        self.version += 1;
    }
}

impl Default for AggregateMetadata {
    fn default() -> Self {
        Self::new(1)
    }
}

pub trait AggregateRoot: Send + Sync {
    fn id(&self) -> String;

    fn metadata(&self) -> &AggregateMetadata;

    fn metadata_mut(&mut self) -> &mut AggregateMetadata;

    fn version(&self) -> i32 {
        self.metadata().version()
    }

    fn increment_version(&mut self) {
        self.metadata_mut().increment_version();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_aggregate_is_dirty_until_persisted() {
        let meta = AggregateMetadata::new(1);
        assert!(meta.is_new());
        assert!(meta.is_dirty());
    }

    #[test]
    fn test_restored_aggregate_tracks_loaded_version() {
        let mut meta = AggregateMetadata::restore(4);
        assert!(!meta.is_dirty());

        meta.increment_version();
        meta.increment_version();

        assert_eq!(meta.version(), 6);
        assert_eq!(meta.persisted_version(), 4);
        assert!(meta.is_dirty());
    }
}
