// crates/account/src/infrastructure/notification/logging_verification_notifier.rs

use async_trait::async_trait;
use shared_kernel::errors::{DomainError, Result};
use url::Url;

use crate::domain::ports::VerificationNotifier;
use crate::domain::value_objects::{Email, EmailToken, Nickname};

const CHECK_EMAIL_PATH: &str = "check-email-token";

/// Development notifier: the confirmation link is written to the log
/// instead of being mailed.
pub struct LoggingVerificationNotifier {
    base_url: Url,
}

impl LoggingVerificationNotifier {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url).map_err(|e| DomainError::Validation {
            field: "base_url",
            reason: format!("Invalid base url '{}': {}", base_url, e),
        })?;
        // `join` replaces the last segment unless the path ends with a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url })
    }

    /// Token and email are form-encoded, so any character an address may
    /// hold (`+`, `&`, `=`) comes back unchanged on the verify side.
    pub fn confirmation_link(&self, email: &Email, token: &EmailToken) -> Result<Url> {
        let mut link = self
            .base_url
            .join(CHECK_EMAIL_PATH)
            .map_err(|e| DomainError::Internal(format!("Cannot build confirmation link: {}", e)))?;
        link.query_pairs_mut()
            .append_pair("token", token.as_str())
            .append_pair("email", email.as_str());
        Ok(link)
    }
}

#[async_trait]
impl VerificationNotifier for LoggingVerificationNotifier {
    async fn send_confirmation(&self, email: &Email, nickname: &Nickname, token: &EmailToken) {
        match self.confirmation_link(email, token) {
            Ok(link) => tracing::info!(
                nickname = %nickname,
                link = %link,
                "Email confirmation requested"
            ),
            Err(e) => tracing::error!(nickname = %nickname, error = %e, "Confirmation link not built"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_of(link: &Url) -> Vec<(String, String)> {
        link.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn test_link_carries_token_and_email() {
        let notifier = LoggingVerificationNotifier::new("http://localhost:8080/").unwrap();
        let email = Email::try_new("a@b.com").unwrap();
        let token = EmailToken::from_raw("abc-123");

        let link = notifier.confirmation_link(&email, &token).unwrap();

        assert_eq!(link.path(), "/check-email-token");
        assert_eq!(
            query_of(&link),
            vec![
                ("token".to_string(), "abc-123".to_string()),
                ("email".to_string(), "a@b.com".to_string()),
            ]
        );
    }

    #[test]
    fn test_reserved_characters_in_email_cannot_add_parameters() {
        let notifier = LoggingVerificationNotifier::new("http://localhost:8080").unwrap();
        let token = EmailToken::from_raw("real");

        for address in ["x&token=evil@b.com", "a+b@c.com"] {
            let email = Email::try_new(address).unwrap();
            let link = notifier.confirmation_link(&email, &token).unwrap();
            let pairs = query_of(&link);

            let tokens: Vec<_> = pairs.iter().filter(|(k, _)| k == "token").collect();
            assert_eq!(tokens.len(), 1, "{link}");
            assert_eq!(tokens[0].1, "real");
            let emails: Vec<_> = pairs.iter().filter(|(k, _)| k == "email").collect();
            assert_eq!(emails.len(), 1, "{link}");
            assert_eq!(emails[0].1, email.as_str());
        }
    }

    #[test]
    fn test_base_path_is_kept() {
        let notifier = LoggingVerificationNotifier::new("https://study.example/app").unwrap();
        let link = notifier
            .confirmation_link(&Email::try_new("a@b.com").unwrap(), &EmailToken::from_raw("t"))
            .unwrap();
        assert_eq!(link.path(), "/app/check-email-token");
    }

    #[test]
    fn test_malformed_base_url_is_rejected() {
        assert!(LoggingVerificationNotifier::new("not a url").is_err());
    }
}
