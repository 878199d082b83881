use crate::bloom::BloomLevel;
use crate::session::SessionState;
use crate::strategy::AnswerOutcome;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct StartPracticeRequest {
    pub objective_id: i32,
    pub objective_level_id: i32,
    /// Defaults to the configured target when absent.
    #[serde(default)]
    pub question_count: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PracticeListQuery {
    pub objective_id: Option<i32>,
    pub status: Option<SessionState>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PracticeSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub objective_id: i32,
    pub objective_level_id: i32,
    pub status: SessionState,
    pub initial_level: BloomLevel,
    pub current_level: BloomLevel,
    pub final_level: Option<BloomLevel>,
    pub target_questions: i32,
    pub answered: i32,
    pub correct: i32,
    pub started_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<PracticeSummary>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PracticeAnswer {
    pub id: Uuid,
    pub question_id: i32,
    pub bloom_level: BloomLevel,
    #[schema(value_type = Object)]
    pub answer: Value,
    pub is_correct: bool,
    pub score: f64,
    pub response_time_secs: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PracticeSessionDetail {
    #[serde(flatten)]
    pub session: PracticeSession,
    pub answers: Vec<PracticeAnswer>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PracticeSubmitResult {
    pub answer_id: Uuid,
    pub is_correct: bool,
    pub score: f64,
    pub new_bloom_level: BloomLevel,
    pub answered: i32,
    pub total: i32,
    pub is_complete: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PracticeSummary {
    pub initial_level: BloomLevel,
    pub final_level: BloomLevel,
    pub level_change: i8,
    pub accuracy_percent: f64,
    pub total_questions: i32,
    pub correct_answers: i32,
    #[schema(value_type = BTreeMap<String, u32>)]
    pub correct_by_level: BTreeMap<BloomLevel, u32>,
    #[schema(value_type = BTreeMap<String, u32>)]
    pub incorrect_by_level: BTreeMap<BloomLevel, u32>,
    pub pattern: Vec<AnswerOutcome>,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct RewardGrant {
    pub xp: i32,
    pub coins: i32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PracticeCompletion {
    pub session: PracticeSession,
    pub summary: PracticeSummary,
    pub rewards: RewardGrant,
}
