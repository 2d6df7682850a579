// crates/study/src/application/authorization.rs

use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::Study;

pub(crate) fn require_manager(study: &Study, account_id: &AccountId) -> Result<()> {
    if !study.is_manager(account_id) {
        tracing::warn!(study = %study.path(), account_id = %account_id, "Manager-only action refused");
        return Err(DomainError::Forbidden {
            reason: format!("Only managers of '{}' may do this", study.path()),
        });
    }
    Ok(())
}
