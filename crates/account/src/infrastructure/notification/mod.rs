mod logging_verification_notifier;

pub use logging_verification_notifier::LoggingVerificationNotifier;
