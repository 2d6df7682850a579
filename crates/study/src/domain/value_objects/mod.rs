mod event_schedule;
mod event_type;
mod ids;
mod study_path;
mod text;

pub use event_schedule::{EnrollmentLimit, EventSchedule};
pub use event_type::EventType;
pub use ids::{EventId, StudyId};
pub use study_path::StudyPath;
pub use text::{EventTitle, FullDescription, ShortDescription, StudyTitle};

#[cfg(test)]
mod tests;
