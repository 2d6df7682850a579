mod authorization;

pub mod create_event;
pub mod create_study;
pub mod join_study;
pub mod leave_study;
pub mod update_event;
pub mod update_study_description;
