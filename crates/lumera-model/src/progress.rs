use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MasteryState {
    NotStarted,
    InProgress,
    Achieved,
    Mastered,
}

impl MasteryState {
    /// `accuracy` is a percentage.
    #[must_use]
    pub fn from_accuracy(accuracy: f64, total: i32) -> Self {
        if accuracy >= 80.0 {
            Self::Mastered
        } else if accuracy >= 60.0 {
            Self::Achieved
        } else if total > 0 {
            Self::InProgress
        } else {
            Self::NotStarted
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProgressEventKind {
    Practice,
    Diagnostic,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ObjectiveProgress {
    pub objective_level_id: i32,
    pub state: MasteryState,
    pub achievement_percent: i32,
    pub attempts: i32,
    pub last_activity: NaiveDateTime,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProgressEvent {
    pub id: Uuid,
    pub objective_level_id: i32,
    pub state: MasteryState,
    pub achievement_percent: i32,
    pub event: ProgressEventKind,
    pub score_obtained: f64,
    pub score_max: f64,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_thresholds() {
        assert_eq!(MasteryState::from_accuracy(80.0, 5), MasteryState::Mastered);
        assert_eq!(MasteryState::from_accuracy(79.9, 5), MasteryState::Achieved);
        assert_eq!(MasteryState::from_accuracy(60.0, 5), MasteryState::Achieved);
        assert_eq!(MasteryState::from_accuracy(10.0, 5), MasteryState::InProgress);
        assert_eq!(MasteryState::from_accuracy(0.0, 0), MasteryState::NotStarted);
    }
}
