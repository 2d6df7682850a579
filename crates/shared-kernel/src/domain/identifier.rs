// crates/shared-kernel/src/domain/identifier.rs

use uuid::Uuid;

/// Uniform identifier contract across the workspace.
pub trait Identifier:
    serde::Serialize + for<'de> serde::Deserialize<'de> + Clone + Send + Sync + PartialEq
{
    fn as_uuid(&self) -> Uuid;
    fn as_string(&self) -> String;
    fn from_uuid(uuid: Uuid) -> Self;
}

/// Declares a UUID v7 backed identifier with the usual conversions.
#[macro_export]
macro_rules! uuid_identifier {
    ($name:ident, $field:literal) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Time ordered UUID v7, friendly to B-tree indexes
            pub fn new() -> Self {
                Self(uuid::Uuid::now_v7())
            }

            pub fn as_uuid(&self) -> uuid::Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::domain::Identifier for $name {
            fn as_uuid(&self) -> uuid::Uuid {
                self.0
            }

            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::errors::DomainError;

            fn from_str(s: &str) -> $crate::errors::Result<Self> {
                uuid::Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|_| $crate::errors::DomainError::Validation {
                        field: $field,
                        reason: format!("'{}' is not a valid UUID", s),
                    })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
