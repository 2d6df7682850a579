mod password_encoder;
mod verification_notifier;

pub use password_encoder::PasswordEncoder;
pub use verification_notifier::VerificationNotifier;

#[cfg(test)]
mod password_encoder_stub;
#[cfg(test)]
mod verification_notifier_stub;

#[cfg(test)]
pub use password_encoder_stub::PasswordEncoderStub;
#[cfg(test)]
pub use verification_notifier_stub::{SentConfirmation, VerificationNotifierStub};
