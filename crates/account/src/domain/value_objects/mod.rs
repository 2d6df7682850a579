mod email;
mod email_token;
mod nickname;
mod password;
mod profile;
mod tag;
mod zone;

pub use email::Email;
pub use email_token::EmailToken;
pub use nickname::Nickname;
pub use password::{PasswordHash, RawPassword};
pub use profile::{Bio, Profile, ProfileText};
pub use tag::{TagId, TagTitle};
pub use zone::{City, LocalNameOfCity, Province, ZoneId, ZoneLabel};

#[cfg(test)]
mod tests;
