pub const INVALID_VALUE: &str = "invalid.value";
pub const WRONG_PATH: &str = "wrong.path";
pub const WRONG_DATETIME: &str = "wrong.datetime";
