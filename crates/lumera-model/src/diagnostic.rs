use crate::bloom::BloomLevel;
use crate::session::SessionState;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct StartDiagnosticRequest {
    pub subject_id: i32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DiagnosticSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub subject_id: i32,
    pub attempt: i32,
    pub status: SessionState,
    pub current_bloom_level: BloomLevel,
    pub total_questions: i32,
    pub correct_answers: i32,
    pub started_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DiagnosticAnswer {
    pub id: Uuid,
    pub question_id: i32,
    pub objective_level_id: i32,
    pub objective_id: i32,
    pub bloom_level: BloomLevel,
    #[schema(value_type = Object)]
    pub answer: Value,
    /// Empty while the answer waits for manual review.
    pub is_correct: Option<bool>,
    pub score: Option<f64>,
    pub response_time_secs: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DiagnosticSessionDetail {
    #[serde(flatten)]
    pub session: DiagnosticSession,
    pub answers: Vec<DiagnosticAnswer>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DiagnosticSubmitResult {
    pub answer_id: Uuid,
    pub is_correct: Option<bool>,
    pub score: Option<f64>,
    pub new_bloom_level: BloomLevel,
    pub requires_review: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DiagnosticResult {
    pub objective_id: i32,
    /// Highest level answered correctly, if any.
    pub mastered_level: Option<BloomLevel>,
    pub mastered_level_name: Option<String>,
    pub answered: i32,
    pub correct: i32,
    pub accuracy_percent: i32,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DiagnosticCompletion {
    pub session: DiagnosticSession,
    /// Mean of the mastered levels of objectives with at least one correct answer.
    pub average_bloom_level: Option<f64>,
    pub results: Vec<DiagnosticResult>,
}
