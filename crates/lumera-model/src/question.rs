use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use utoipa::{IntoParams, ToSchema};

/// The nine supported question formats. The snake_case name is the stored type tag.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ToSchema,
    EnumString,
    Display,
    AsRefStr,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    TrueFalse,
    FillBlanks,
    DragDropMatching,
    Sequencing,
    CompareContrast,
    OpenEnded,
    CriteriaEvaluation,
    ConceptMap,
}

impl QuestionKind {
    /// Kinds that are never auto-scored and need manual or AI review.
    #[must_use]
    pub fn requires_review(self) -> bool {
        matches!(self, Self::OpenEnded | Self::ConceptMap)
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::MultipleChoice => "Selección múltiple",
            Self::TrueFalse => "Verdadero o falso",
            Self::FillBlanks => "Completar espacios",
            Self::DragDropMatching => "Emparejar",
            Self::Sequencing => "Ordenar secuencia",
            Self::CompareContrast => "Comparar y contrastar",
            Self::OpenEnded => "Respuesta abierta",
            Self::CriteriaEvaluation => "Evaluación por criterios",
            Self::ConceptMap => "Mapa conceptual",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuestionUsage {
    Diagnostic,
    Practice,
    All,
}

/// A question as shown to the learner. Never carries the validation key.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct PublicQuestion {
    pub id: i32,
    pub objective_level_id: i32,
    /// Stored type tag, usually a [`QuestionKind`].
    pub kind: String,
    pub usage: QuestionUsage,
    #[schema(value_type = Object)]
    pub question_data: Value,
    pub difficulty: i16,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
}

/// Full question record for authoring, including the validation key.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct Question {
    pub id: i32,
    pub objective_level_id: i32,
    pub kind: String,
    pub usage: QuestionUsage,
    #[schema(value_type = Object)]
    pub question_data: Value,
    #[schema(value_type = Object)]
    pub validation_data: Value,
    pub difficulty: i16,
    pub active: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    pub times_used: i32,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}

impl Question {
    #[must_use]
    pub fn into_public(self) -> PublicQuestion {
        PublicQuestion {
            id: self.id,
            objective_level_id: self.objective_level_id,
            kind: self.kind,
            usage: self.usage,
            question_data: self.question_data,
            difficulty: self.difficulty,
            tags: self.tags,
        }
    }
}

fn default_difficulty() -> i16 {
    3
}

fn default_true() -> bool {
    true
}

fn default_usage() -> QuestionUsage {
    QuestionUsage::All
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct QuestionInput {
    pub objective_level_id: i32,
    pub kind: QuestionKind,
    #[serde(default = "default_usage")]
    pub usage: QuestionUsage,
    #[schema(value_type = Object)]
    pub question_data: Value,
    #[schema(value_type = Object)]
    pub validation_data: Value,
    #[serde(default = "default_difficulty")]
    pub difficulty: i16,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Only active questions are ever listed.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuestionListQuery {
    pub kind: Option<QuestionKind>,
    pub usage: Option<QuestionUsage>,
    pub objective_level_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct QuestionTypeInfo {
    pub kind: QuestionKind,
    pub display_name: String,
    pub auto_scored: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct ValidateAnswerRequest {
    #[schema(value_type = Object)]
    pub answer: Value,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct ValidateAnswerResponse {
    pub is_correct: bool,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub correct_answer: Option<Value>,
}

/// Next question of a session plus where the learner stands.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct NextQuestion {
    pub question: PublicQuestion,
    pub question_number: i32,
    pub total_questions: i32,
    pub current_bloom_level: crate::bloom::BloomLevel,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub struct SubmitAnswerRequest {
    pub question_id: i32,
    #[schema(value_type = Object)]
    pub answer: Value,
    #[serde(default)]
    pub response_time_secs: Option<i32>,
}
