use super::MasteryState;
use chrono::NaiveDateTime;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student_objective_progress")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub objective_level_id: i32,
    pub state: MasteryState,
    pub achievement_percent: i32,
    pub attempts: i32,
    pub last_activity: NaiveDateTime,
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::objective_level::Entity",
        from = "Column::ObjectiveLevelId",
        to = "crate::objective_level::Column::Id"
    )]
    ObjectiveLevel,
}

impl Related<crate::objective_level::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ObjectiveLevel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
