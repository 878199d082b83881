mod common;

use common::catalog::{create_objective, create_subject};
use common::connect;
use lumera_core::progress::{ProgressProjector, ProgressUpdate};
use lumera_entity::progress::MasteryState as DbMasteryState;
use lumera_model::bloom::BloomLevel;
use lumera_model::progress::{MasteryState, ProgressEventKind};
use test_log::test;
use uuid::Uuid;

fn update(user_id: Uuid, objective_level_id: i32, accuracy_percent: f64, correct: i32, total: i32) -> ProgressUpdate {
    ProgressUpdate {
        user_id,
        objective_level_id,
        achieved_level: BloomLevel::Apply,
        accuracy_percent,
        correct,
        total,
        event: ProgressEventKind::Practice,
    }
}

#[test(tokio::test)]
async fn test_percent_never_drops() {
    let db = connect().await;
    let subject_id = create_subject(&db).await;
    let objective = create_objective(&db, subject_id, "OA1", &[3]).await;
    let level_id = objective.level(3).id;
    let user_id = Uuid::new_v4();

    let first = ProgressProjector::project(&db, update(user_id, level_id, 90.0, 9, 10))
        .await
        .unwrap();
    assert_eq!(first.achievement_percent, 90);
    assert_eq!(first.attempts, 1);
    assert_eq!(first.state, DbMasteryState::Mastered);

    let second = ProgressProjector::project(&db, update(user_id, level_id, 40.0, 2, 5))
        .await
        .unwrap();
    assert_eq!(second.achievement_percent, 90);
    assert_eq!(second.attempts, 2);
    assert_eq!(second.state, DbMasteryState::InProgress);
    assert_eq!(second.notes.as_deref(), Some("Bloom level 3 - 2/5 correctas"));

    let history = ProgressProjector::history(&db, user_id, level_id).await.unwrap();
    assert_eq!(history.len(), 2);
    // both rows may share a timestamp
    let latest = history.iter().find(|event| event.achievement_percent == 40).unwrap();
    assert_eq!(latest.state, MasteryState::InProgress);
    assert!((latest.score_obtained - 2.0).abs() < f64::EPSILON);
    assert!((latest.score_max - 5.0).abs() < f64::EPSILON);
    assert!(history.iter().any(|event| event.achievement_percent == 90));
}

#[test(tokio::test)]
async fn test_percent_is_truncated() {
    let db = connect().await;
    let subject_id = create_subject(&db).await;
    let objective = create_objective(&db, subject_id, "OA1", &[3]).await;
    let user_id = Uuid::new_v4();

    let progress = ProgressProjector::project(&db, update(user_id, objective.level(3).id, 66.67, 2, 3))
        .await
        .unwrap();
    assert_eq!(progress.achievement_percent, 66);
    assert_eq!(progress.state, DbMasteryState::Achieved);

    let rows = ProgressProjector::list(&db, user_id).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].state, MasteryState::Achieved);
    assert!(ProgressProjector::list(&db, Uuid::new_v4()).await.unwrap().is_empty());
}
