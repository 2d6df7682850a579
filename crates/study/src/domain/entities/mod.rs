mod event;
mod study;

pub use event::{Event, EventDraft};
pub use study::Study;
