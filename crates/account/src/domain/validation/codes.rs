pub const INVALID_NICKNAME: &str = "invalid.nickname";
pub const INVALID_EMAIL: &str = "invalid.email";
pub const INVALID_PASSWORD: &str = "invalid.password";
pub const INVALID_VALUE: &str = "invalid.value";
pub const WRONG_VALUE: &str = "wrong.value";
pub const TOO_LONG: &str = "too.long";
