mod account_repository;
mod tag_repository;
mod zone_repository;

pub use account_repository::AccountRepository;
pub use tag_repository::TagRepository;
pub use zone_repository::ZoneRepository;

#[cfg(test)]
mod account_repository_stub;
#[cfg(test)]
mod tag_repository_stub;
#[cfg(test)]
mod zone_repository_stub;

#[cfg(test)]
pub use account_repository_stub::AccountRepositoryStub;
#[cfg(test)]
pub use tag_repository_stub::TagRepositoryStub;
#[cfg(test)]
pub use zone_repository_stub::ZoneRepositoryStub;
