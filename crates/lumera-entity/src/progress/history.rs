use super::MasteryState;
use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum EventKind {
    #[sea_orm(string_value = "practice")]
    Practice,
    #[sea_orm(string_value = "diagnostic")]
    Diagnostic,
}

/// Append-only. Rows are never updated.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_objective_history")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub objective_level_id: i32,
    pub state: MasteryState,
    pub achievement_percent: i32,
    pub event: EventKind,
    pub score_obtained: f64,
    pub score_max: f64,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
