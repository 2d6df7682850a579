mod event_repository;
mod study_repository;

pub use event_repository::EventRepository;
pub use study_repository::StudyRepository;

#[cfg(test)]
mod event_repository_stub;
#[cfg(test)]
mod study_repository_stub;

#[cfg(test)]
pub use event_repository_stub::EventRepositoryStub;
#[cfg(test)]
pub use study_repository_stub::StudyRepositoryStub;
