mod account_preferences;
mod get_account_preferences_use_case;

pub use account_preferences::AccountPreferences;
pub use get_account_preferences_use_case::GetAccountPreferencesUseCase;

#[cfg(test)]
mod get_account_preferences_use_case_test;
