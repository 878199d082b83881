use chrono::Utc;
use lumera_entity::diagnostic::result::{ActiveModel as ActiveDiagnosticResult, Model as DiagnosticResult};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

#[derive(Debug, Clone)]
pub struct NewDiagnosticResult {
    pub objective_id: i32,
    pub mastered_level: Option<i16>,
    pub mastered_level_name: Option<String>,
    pub answered: i32,
    pub correct: i32,
    pub accuracy_percent: i32,
    pub recommendation: String,
}

impl Mutation {
    pub async fn create_many<C: ConnectionTrait>(
        conn: &C,
        session_id: Uuid,
        results: Vec<NewDiagnosticResult>,
    ) -> Result<Vec<DiagnosticResult>, DbErr> {
        let created_at = Utc::now().naive_utc();
        let mut stored = Vec::with_capacity(results.len());
        for result in results {
            let objective_id = result.objective_id;
            let model = ActiveDiagnosticResult {
                id: ActiveValue::Set(Uuid::new_v4()),
                session_id: ActiveValue::Set(session_id),
                objective_id: ActiveValue::Set(result.objective_id),
                mastered_level: ActiveValue::Set(result.mastered_level),
                mastered_level_name: ActiveValue::Set(result.mastered_level_name),
                answered: ActiveValue::Set(result.answered),
                correct: ActiveValue::Set(result.correct),
                accuracy_percent: ActiveValue::Set(result.accuracy_percent),
                recommendation: ActiveValue::Set(result.recommendation),
                created_at: ActiveValue::Set(created_at),
            }
            .insert(conn)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, %session_id, objective_id, "failed to store diagnostic result");
            })?;
            stored.push(model);
        }
        Ok(stored)
    }
}
