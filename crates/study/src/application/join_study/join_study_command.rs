// crates/study/src/application/join_study/join_study_command.rs

use shared_kernel::domain::value_objects::AccountId;

use crate::domain::value_objects::StudyId;

#[derive(Debug, Clone, Copy)]
pub struct JoinStudyCommand {
    pub study_id: StudyId,
    pub account_id: AccountId,
}
