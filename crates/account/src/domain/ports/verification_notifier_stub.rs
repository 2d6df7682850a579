// crates/account/src/domain/ports/verification_notifier_stub.rs

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::ports::VerificationNotifier;
use crate::domain::value_objects::{Email, EmailToken, Nickname};

#[derive(Debug, Clone)]
pub struct SentConfirmation {
    pub email: Email,
    pub nickname: Nickname,
    pub token: EmailToken,
}

#[derive(Default)]
pub struct VerificationNotifierStub {
    pub sent: Arc<Mutex<Vec<SentConfirmation>>>,
}

impl VerificationNotifierStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl VerificationNotifier for VerificationNotifierStub {
    async fn send_confirmation(&self, email: &Email, nickname: &Nickname, token: &EmailToken) {
        self.sent.lock().unwrap().push(SentConfirmation {
            email: email.clone(),
            nickname: nickname.clone(),
            token: token.clone(),
        });
    }
}
