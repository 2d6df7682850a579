// crates/shared-kernel/src/errors/context.rs

use serde::Serialize;

use crate::errors::{DomainError, Result};

/// One rejected form field.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the rejected field (ex: "nickname")
    pub field: &'static str,
    /// Machine readable code (ex: "wrong.value")
    pub code: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            code,
            message: message.into(),
        }
    }
}

/// Ordered list of field errors produced by a validator.
/// An empty list means the form is valid.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(&mut self, field: &'static str, code: &'static str, message: impl Into<String>) {
        self.0.push(FieldError::new(field, code, message));
    }

    /// Records a value object rejection under `field` / `code` and hands
    /// back the value when it was accepted.
    pub fn capture<T>(&mut self, field: &'static str, code: &'static str, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(DomainError::Validation { reason, .. }) => {
                self.reject(field, code, reason);
                None
            }
            Err(other) => {
                self.reject(field, code, other.to_string());
                None
            }
        }
    }

    pub fn extend(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.0.iter().filter(move |e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<FieldError> for FieldErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

/// Outcome of a form-driven use case.
///
/// A rejected submission is an expected, user-correctable result: it carries
/// the field errors and guarantees that no mutation was applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<T> {
    Accepted(T),
    Rejected(FieldErrors),
}

impl<T> Submission<T> {
    /// Runs `accept` only when `errors` is empty.
    pub async fn guard<F, Fut>(errors: FieldErrors, accept: F) -> crate::errors::Result<Self>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = crate::errors::Result<T>>,
    {
        if !errors.is_empty() {
            return Ok(Self::Rejected(errors));
        }
        accept().await.map(Self::Accepted)
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Rejected(errors) => Some(errors),
            Self::Accepted(_) => None,
        }
    }

    pub fn accepted(self) -> Option<T> {
        match self {
            Self::Accepted(value) => Some(value),
            Self::Rejected(_) => None,
        }
    }
}
