mod argon2_password_encoder;

pub use argon2_password_encoder::Argon2PasswordEncoder;
