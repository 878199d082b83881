use sea_orm::entity::prelude::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Usage {
    #[sea_orm(string_value = "diagnostic")]
    Diagnostic,
    #[sea_orm(string_value = "practice")]
    Practice,
    #[sea_orm(string_value = "all")]
    All,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "question")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub objective_level_id: i32,
    /// Kept as text so unknown stored kinds still load.
    pub kind: String,
    pub usage: Usage,
    #[sea_orm(column_type = "Text")]
    pub question_data: String,
    #[sea_orm(column_type = "Text")]
    pub validation_data: String,
    pub difficulty: i16,
    pub active: bool,
    #[sea_orm(column_type = "Text")]
    pub tags: String,
    pub times_used: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
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
