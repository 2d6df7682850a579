// crates/study/src/domain/value_objects/ids.rs

use shared_kernel::uuid_identifier;

uuid_identifier!(StudyId, "study_id");
uuid_identifier!(EventId, "event_id");
