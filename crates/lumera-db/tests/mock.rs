use lumera_db::progress::objective::Query;
use lumera_entity::progress::MasteryState;
use lumera_entity::progress::objective;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
use test_log::test;
use uuid::Uuid;

#[test(tokio::test)]
async fn test_find_progress() -> Result<(), DbErr> {
    let user_id = Uuid::new_v4();
    let model = objective::Model {
        user_id,
        objective_level_id: 7,
        state: MasteryState::Achieved,
        achievement_percent: 65,
        attempts: 2,
        last_activity: chrono::Utc::now().naive_utc(),
        notes: None,
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[model.clone()]])
        .into_connection();

    assert_eq!(Query::find(&db, user_id, 7).await?, Some(model));

    Ok(())
}

#[test(tokio::test)]
async fn test_missing_progress() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<objective::Model>::new()])
        .into_connection();

    assert_eq!(Query::find(&db, Uuid::new_v4(), 1).await?, None);

    Ok(())
}
