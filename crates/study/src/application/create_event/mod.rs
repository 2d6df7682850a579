mod create_event_use_case;
mod event_form;

pub use create_event_use_case::CreateEventUseCase;
pub use event_form::EventForm;
