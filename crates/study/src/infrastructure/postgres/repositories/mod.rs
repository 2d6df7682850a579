mod event_repository;
mod study_repository;

pub use event_repository::PostgresEventRepository;
pub use study_repository::PostgresStudyRepository;
