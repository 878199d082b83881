mod common;

use common::catalog::{create_objective, create_subject, right, true_false};
use common::engines;
use lumera_config::EngineConfig;
use lumera_core::error::AssessmentError;
use lumera_entity::question::Usage;
use lumera_model::practice::StartPracticeRequest;
use lumera_model::question::SubmitAnswerRequest;
use lumera_test_helpers::{SqliteDb, TestDb};
use sea_orm::{ConnectOptions, Database};
use test_log::test;
use uuid::Uuid;

/// Two submits racing on one session either both land or the loser leaves no trace.
#[test(tokio::test(flavor = "multi_thread", worker_threads = 2))]
async fn test_double_submit_keeps_counters_consistent() {
    let sqlite = SqliteDb::new().unwrap();
    let mut options = ConnectOptions::new(sqlite.db_uri());
    options.max_connections(4).sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    lumera_db::schema::apply(&db).await.unwrap();

    let engines = engines(&EngineConfig::default());
    let subject_id = create_subject(&db).await;
    let objective = create_objective(&db, subject_id, "OA1", &[3]).await;
    let question = true_false(&db, objective.level(3).id, Usage::Practice).await;
    let user_id = Uuid::new_v4();
    let session = engines
        .practice
        .start(
            &db,
            user_id,
            StartPracticeRequest {
                objective_id: objective.id,
                objective_level_id: objective.level(3).id,
                question_count: Some(10),
            },
        )
        .await
        .unwrap();

    let request = || SubmitAnswerRequest {
        question_id: question.id,
        answer: right(),
        response_time_secs: None,
    };
    let (first, second) = futures::join!(
        engines.practice.submit(&db, user_id, session.id, request()),
        engines.practice.submit(&db, user_id, session.id, request()),
    );

    let mut accepted = 0;
    for result in [first, second] {
        match result {
            Ok(_) => accepted += 1,
            Err(AssessmentError::Conflict | AssessmentError::Database(_)) => {}
            Err(error) => panic!("unexpected error {error:?}"),
        }
    }
    assert!(accepted >= 1);

    let detail = engines.practice.get(&db, user_id, session.id).await.unwrap();
    assert_eq!(detail.answers.len(), accepted);
    assert_eq!(usize::try_from(detail.session.answered).unwrap(), accepted);
    assert_eq!(usize::try_from(detail.session.correct).unwrap(), accepted);
}
