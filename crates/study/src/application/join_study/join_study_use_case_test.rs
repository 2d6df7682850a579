use std::sync::Arc;

use chrono::Utc;
use shared_kernel::clock::FixedClock;
use shared_kernel::domain::transaction::StubTxManager;
use shared_kernel::domain::value_objects::AccountId;
use shared_kernel::errors::DomainError;

use crate::application::join_study::{JoinStudyCommand, JoinStudyUseCase};
use crate::domain::entities::Study;
use crate::domain::repositories::StudyRepositoryStub;
use crate::domain::value_objects::{FullDescription, ShortDescription, StudyId, StudyPath, StudyTitle};

fn setup() -> (JoinStudyUseCase, Arc<StudyRepositoryStub>, StudyId, AccountId) {
    let repo = Arc::new(StudyRepositoryStub::new());
    let manager = AccountId::new();
    let study = Study::create(
        StudyPath::try_new("spring").unwrap(),
        StudyTitle::try_new("Spring").unwrap(),
        ShortDescription::try_new("short").unwrap(),
        FullDescription::try_new("full").unwrap(),
        manager,
        Utc::now(),
    );
    let study_id = *study.id();
    repo.add_study(study);
    let use_case = JoinStudyUseCase::new(repo.clone(), Arc::new(StubTxManager), Arc::new(FixedClock::default()));
    (use_case, repo, study_id, manager)
}

#[tokio::test]
async fn test_joining_twice_is_the_same_as_once() {
    let (use_case, repo, study_id, _) = setup();
    let member = AccountId::new();
    let command = JoinStudyCommand {
        study_id,
        account_id: member,
    };

    use_case.execute(command).await.unwrap();
    use_case.execute(command).await.unwrap();

    let study = repo.get(&study_id).unwrap();
    assert!(study.is_member(&member));
    assert_eq!(study.members().len(), 1);
    assert_eq!(*repo.save_calls.lock().unwrap(), 1);
}

#[tokio::test]
async fn test_manager_joining_is_a_no_op() {
    let (use_case, repo, study_id, manager) = setup();

    use_case
        .execute(JoinStudyCommand {
            study_id,
            account_id: manager,
        })
        .await
        .unwrap();

    assert!(repo.get(&study_id).unwrap().members().is_empty());
}

#[tokio::test]
async fn test_unknown_study_is_not_found() {
    let (use_case, _, _, _) = setup();

    let result = use_case
        .execute(JoinStudyCommand {
            study_id: StudyId::new(),
            account_id: AccountId::new(),
        })
        .await;

    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}
