// crates/account/src/domain/ports/verification_notifier.rs

use async_trait::async_trait;

use crate::domain::value_objects::{Email, EmailToken, Nickname};

/// Delivers the email confirmation link. Fire and forget: delivery
/// failures are the adapter's business and never fail the caller.
#[async_trait]
pub trait VerificationNotifier: Send + Sync {
    async fn send_confirmation(&self, email: &Email, nickname: &Nickname, token: &EmailToken);
}
