mod update_event_use_case;

pub use update_event_use_case::UpdateEventUseCase;
