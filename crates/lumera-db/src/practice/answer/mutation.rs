use chrono::Utc;
use lumera_entity::practice::answer::{ActiveModel as ActivePracticeAnswer, Model as PracticeAnswer};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};
use std::error::Error;
use uuid::Uuid;

pub struct Mutation;

#[derive(Debug, Clone)]
pub struct NewPracticeAnswer {
    pub session_id: Uuid,
    pub question_id: i32,
    pub bloom_level: i16,
    pub answer: String,
    pub is_correct: bool,
    pub score: f64,
    pub response_time_secs: Option<i32>,
}

impl Mutation {
    pub async fn create<C: ConnectionTrait>(conn: &C, answer: NewPracticeAnswer) -> Result<PracticeAnswer, DbErr> {
        let session_id = answer.session_id;
        ActivePracticeAnswer {
            id: ActiveValue::Set(Uuid::new_v4()),
            session_id: ActiveValue::Set(answer.session_id),
            question_id: ActiveValue::Set(answer.question_id),
            bloom_level: ActiveValue::Set(answer.bloom_level),
            answer: ActiveValue::Set(answer.answer),
            is_correct: ActiveValue::Set(answer.is_correct),
            score: ActiveValue::Set(answer.score),
            response_time_secs: ActiveValue::Set(answer.response_time_secs),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        }
        .insert(conn)
        .await
        .inspect_err(|error| tracing::error!(error = error as &dyn Error, %session_id, "failed to store practice answer"))
    }
}
