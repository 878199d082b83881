use chrono::Utc;
use lumera_entity::diagnostic::answer::{ActiveModel as ActiveDiagnosticAnswer, Model as DiagnosticAnswer};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

#[derive(Debug, Clone)]
pub struct NewDiagnosticAnswer {
    pub session_id: Uuid,
    pub question_id: i32,
    pub objective_level_id: i32,
    pub objective_id: i32,
    pub bloom_level: i16,
    pub answer: String,
    pub is_correct: Option<bool>,
    pub score: Option<f64>,
    pub response_time_secs: Option<i32>,
}

impl Mutation {
    pub async fn create<C: ConnectionTrait>(conn: &C, answer: NewDiagnosticAnswer) -> Result<DiagnosticAnswer, DbErr> {
        let session_id = answer.session_id;
        let question_id = answer.question_id;
        ActiveDiagnosticAnswer {
            id: ActiveValue::Set(Uuid::new_v4()),
            session_id: ActiveValue::Set(answer.session_id),
            question_id: ActiveValue::Set(answer.question_id),
            objective_level_id: ActiveValue::Set(answer.objective_level_id),
            objective_id: ActiveValue::Set(answer.objective_id),
            bloom_level: ActiveValue::Set(answer.bloom_level),
            answer: ActiveValue::Set(answer.answer),
            is_correct: ActiveValue::Set(answer.is_correct),
            score: ActiveValue::Set(answer.score),
            response_time_secs: ActiveValue::Set(answer.response_time_secs),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
        .insert(conn)
        .await
        .inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, %session_id, question_id, "failed to store diagnostic answer");
        })
    }
}
