// crates/shared-kernel/src/domain/value_objects/account_id.rs

use crate::domain::entities::EntityMetadata;
use crate::uuid_identifier;

uuid_identifier!(AccountId, "account_id");

impl EntityMetadata for AccountId {
    fn entity_name() -> &'static str {
        "AccountId"
    }
}
