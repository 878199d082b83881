use crate::convert::{FromDbModel, FromModel, IntoModel};
use lumera_entity::progress::history::{EventKind, Model as HistoryModel};
use lumera_entity::progress::objective::Model as ProgressModel;
use lumera_entity::progress::MasteryState as MasteryStateModel;
use lumera_model::progress::{MasteryState, ObjectiveProgress, ProgressEvent, ProgressEventKind};

impl FromDbModel<MasteryStateModel> for MasteryState {
    fn from_db_model(model: MasteryStateModel) -> Self {
        match model {
            MasteryStateModel::NotStarted => Self::NotStarted,
            MasteryStateModel::InProgress => Self::InProgress,
            MasteryStateModel::Achieved => Self::Achieved,
            MasteryStateModel::Mastered => Self::Mastered,
        }
    }
}

impl FromModel<MasteryState> for MasteryStateModel {
    fn from_model(model: MasteryState) -> Self {
        match model {
            MasteryState::NotStarted => Self::NotStarted,
            MasteryState::InProgress => Self::InProgress,
            MasteryState::Achieved => Self::Achieved,
            MasteryState::Mastered => Self::Mastered,
        }
    }
}

impl FromDbModel<EventKind> for ProgressEventKind {
    fn from_db_model(model: EventKind) -> Self {
        match model {
            EventKind::Practice => Self::Practice,
            EventKind::Diagnostic => Self::Diagnostic,
        }
    }
}

impl FromModel<ProgressEventKind> for EventKind {
    fn from_model(model: ProgressEventKind) -> Self {
        match model {
            ProgressEventKind::Practice => Self::Practice,
            ProgressEventKind::Diagnostic => Self::Diagnostic,
        }
    }
}

impl FromDbModel<ProgressModel> for ObjectiveProgress {
    fn from_db_model(model: ProgressModel) -> Self {
        Self {
            objective_level_id: model.objective_level_id,
            state: model.state.into_model(),
            achievement_percent: model.achievement_percent,
            attempts: model.attempts,
            last_activity: model.last_activity,
            notes: model.notes,
        }
    }
}

impl FromDbModel<HistoryModel> for ProgressEvent {
    fn from_db_model(model: HistoryModel) -> Self {
        Self {
            id: model.id,
            objective_level_id: model.objective_level_id,
            state: model.state.into_model(),
            achievement_percent: model.achievement_percent,
            event: model.event.into_model(),
            score_obtained: model.score_obtained,
            score_max: model.score_max,
            notes: model.notes,
            created_at: model.created_at,
        }
    }
}
