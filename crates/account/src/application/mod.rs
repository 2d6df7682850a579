pub mod add_tag;
pub mod add_zone;
pub mod authenticate;
pub mod change_nickname;
pub mod change_password;
pub mod get_account_preferences;
pub mod register_account;
pub mod remove_tag;
pub mod remove_zone;
pub mod resend_confirmation_email;
pub mod resolvers;
pub mod seed_zones;
pub mod update_profile;
pub mod verify_email;
