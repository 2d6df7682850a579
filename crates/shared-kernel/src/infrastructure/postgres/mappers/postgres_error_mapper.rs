// crates/shared-kernel/src/infrastructure/postgres/mappers/postgres_error_mapper.rs

use crate::domain::entities::EntityMetadata;
use crate::errors::DomainError;

const UNIQUE_VIOLATION: &str = "23505";
const SERIALIZATION_FAILURE: &str = "40001";
const DEADLOCK_DETECTED: &str = "40P01";

pub trait SqlxErrorExt<T> {
    /// Maps storage failures onto the domain vocabulary of entity `E`.
    fn map_domain<E: EntityMetadata>(self) -> Result<T, DomainError>;

    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError>;

    /// For commits: serialization failures become retryable conflicts.
    fn map_commit(self, context: &'static str) -> Result<T, DomainError>;
}

fn is_retryable(code: &str) -> bool {
    code == SERIALIZATION_FAILURE || code == DEADLOCK_DETECTED
}

impl<T> SqlxErrorExt<T> for std::result::Result<T, sqlx::Error> {
    fn map_domain<E: EntityMetadata>(self) -> Result<T, DomainError> {
        self.map_err(|e| match e {
            sqlx::Error::RowNotFound => DomainError::NotFound {
                entity: E::entity_name(),
                id: "unknown".into(),
            },
            sqlx::Error::Database(db_err) => {
                let code = db_err.code().map(|c| c.into_owned()).unwrap_or_default();

                if code == UNIQUE_VIOLATION {
                    let field = db_err
                        .constraint()
                        .map(E::map_constraint_to_field)
                        .unwrap_or("unique_constraint");

                    return DomainError::AlreadyExists {
                        entity: E::entity_name(),
                        field,
                        value: "already taken".into(),
                    };
                }

                if is_retryable(&code) {
                    return DomainError::ConcurrencyConflict {
                        reason: format!("Concurrency conflict on {}", E::entity_name()),
                    };
                }

                DomainError::Infrastructure(db_err.message().into())
            }
            other => DomainError::Infrastructure(other.to_string()),
        })
    }

    fn map_domain_infra(self, context: &'static str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Infrastructure(format!("{}: {}", context, e)))
    }

    fn map_commit(self, context: &'static str) -> Result<T, DomainError> {
        self.map_err(|e| {
            let retryable = e
                .as_database_error()
                .and_then(|db| db.code())
                .is_some_and(|code| is_retryable(&code));

            if retryable {
                DomainError::ConcurrencyConflict {
                    reason: format!("{}: {}", context, e),
                }
            } else {
                DomainError::Infrastructure(format!("{}: {}", context, e))
            }
        })
    }
}
