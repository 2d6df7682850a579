// crates/study/src/application/leave_study/leave_study_command.rs

use shared_kernel::domain::value_objects::AccountId;

use crate::domain::value_objects::StudyId;

#[derive(Debug, Clone, Copy)]
pub struct LeaveStudyCommand {
    pub study_id: StudyId,
    pub account_id: AccountId,
}
