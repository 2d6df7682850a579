// crates/study/src/domain/entities/study.rs

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use shared_kernel::domain::aggregates::{AggregateMetadata, AggregateRoot};
use shared_kernel::domain::entities::EntityMetadata;
use shared_kernel::domain::value_objects::AccountId;

use crate::domain::value_objects::{
    FullDescription, ShortDescription, StudyId, StudyPath, StudyTitle,
};

/// A study group. Its creator is the first manager and the manager set is
/// never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Study {
    pub(crate) id: StudyId,
    pub(crate) path: StudyPath,
    pub(crate) title: StudyTitle,
    pub(crate) short_description: ShortDescription,
    pub(crate) full_description: FullDescription,
    pub(crate) managers: BTreeSet<AccountId>,
    pub(crate) members: BTreeSet<AccountId>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
    pub(crate) metadata: AggregateMetadata,
}

impl Study {
    pub fn create(
        path: StudyPath,
        title: StudyTitle,
        short_description: ShortDescription,
        full_description: FullDescription,
        creator: AccountId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: StudyId::new(),
            path,
            title,
            short_description,
            full_description,
            managers: BTreeSet::from([creator]),
            members: BTreeSet::new(),
            created_at: now,
            updated_at: now,
            metadata: AggregateMetadata::default(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: StudyId,
        path: StudyPath,
        title: StudyTitle,
        short_description: ShortDescription,
        full_description: FullDescription,
        managers: BTreeSet<AccountId>,
        members: BTreeSet<AccountId>,
        version: i32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            path,
            title,
            short_description,
            full_description,
            managers,
            members,
            created_at,
            updated_at,
            metadata: AggregateMetadata::restore(version),
        }
    }

    // ==========================================
    // BUSINESS LOGIC
    // ==========================================

    pub fn is_manager(&self, account_id: &AccountId) -> bool {
        self.managers.contains(account_id)
    }

    pub fn is_member(&self, account_id: &AccountId) -> bool {
        self.members.contains(account_id)
    }

    /// Returns false when both texts are unchanged
    pub fn update_description(
        &mut self,
        short_description: ShortDescription,
        full_description: FullDescription,
        now: DateTime<Utc>,
    ) -> bool {
        if self.short_description == short_description && self.full_description == full_description {
            return false;
        }
        self.short_description = short_description;
        self.full_description = full_description;
        self.apply_change(now);
        true
    }

    /// Managers already belong to the study and are never listed as members
    pub fn add_member(&mut self, account_id: AccountId, now: DateTime<Utc>) -> bool {
        if self.is_manager(&account_id) || !self.members.insert(account_id) {
            return false;
        }
        self.apply_change(now);
        true
    }

    pub fn remove_member(&mut self, account_id: &AccountId, now: DateTime<Utc>) -> bool {
        if !self.members.remove(account_id) {
            return false;
        }
        self.apply_change(now);
        true
    }

    // ==========================================
    // GETTERS
    // ==========================================

    pub fn id(&self) -> &StudyId {
        &self.id
    }

    pub fn path(&self) -> &StudyPath {
        &self.path
    }

    pub fn title(&self) -> &StudyTitle {
        &self.title
    }

    pub fn short_description(&self) -> &ShortDescription {
        &self.short_description
    }

    pub fn full_description(&self) -> &FullDescription {
        &self.full_description
    }

    pub fn managers(&self) -> &BTreeSet<AccountId> {
        &self.managers
    }

    pub fn members(&self) -> &BTreeSet<AccountId> {
        &self.members
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn apply_change(&mut self, now: DateTime<Utc>) {
        self.increment_version();
        self.updated_at = now;
    }
}

impl EntityMetadata for Study {
    fn entity_name() -> &'static str {
        "Study"
    }

    fn map_constraint_to_field(constraint: &str) -> &'static str {
        match constraint {
            "studies_path_key" => "path",
            _ => "unique_constraint",
        }
    }
}

impl AggregateRoot for Study {
    fn id(&self) -> String {
        self.id.to_string()
    }

    fn metadata(&self) -> &AggregateMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut AggregateMetadata {
        &mut self.metadata
    }
}
