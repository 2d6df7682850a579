mod postgres_event_row;
mod postgres_study_row;

pub use postgres_event_row::PostgresEventRow;
pub use postgres_study_row::PostgresStudyRow;
