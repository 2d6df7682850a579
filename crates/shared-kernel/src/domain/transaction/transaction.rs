// crates/shared-kernel/src/domain/transaction/transaction.rs

use std::any::Any;

/// Opaque unit of work handed to repositories.
/// Adapters downcast it back to their concrete transaction type.
pub trait Transaction: Send + Sync + Any {
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
